use std::path::Path;
use std::process::{Command, Output};

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ftally"))
}

fn run_on(content: &str, args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, content).unwrap();
    run_path(&path, args)
}

fn run_path(path: &Path, args: &[&str]) -> Output {
    let mut c = cmd();
    c.arg(path);
    c.args(args);
    c.env_remove("RUST_LOG");
    c.output().unwrap()
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

#[test]
fn test_visible_mode_default() {
    let o = run_on("ab\nc\nde\n", &["2"]);
    assert!(o.status.success(), "stderr: {}", stderr(&o));
    let out = stdout(&o);
    assert!(out.contains("Total lines: 3\n"));
    assert!(out.contains("Total characters: 5\n"));
    assert!(out.contains("File size (bytes): 9\n"));
}

#[test]
fn test_all_mode_trailing_newline() {
    let o = run_on("ab\nc\nde\n", &["3", "all"]);
    assert!(o.status.success());
    assert!(stdout(&o).contains("Total characters: 8\n"));
}

#[test]
fn test_all_mode_no_trailing_newline() {
    let o = run_on("ab\nc\nde", &["2", "all"]);
    assert!(o.status.success());
    assert!(stdout(&o).contains("Total characters: 7\n"));
    assert!(stdout(&o).contains("File size (bytes): 8\n"));
}

#[test]
fn test_word_ranking_output() {
    let o = run_on("Hello, world! World.\nhello there\n", &["2"]);
    assert!(o.status.success());
    let out = stdout(&o);
    assert!(out.contains("Most frequent word: 'hello' (2 times)\n"));
    assert!(out.contains("1) 'hello' : 2\n2) 'world' : 2\n3) 'there' : 1\n"));
}

#[test]
fn test_top_option_limits_list() {
    let o = run_on("a a a b b c\n", &["1", "--top", "2"]);
    assert!(o.status.success());
    let out = stdout(&o);
    assert!(out.contains("Top 2 words:\n1) 'a' : 3\n2) 'b' : 2\n"));
    assert!(!out.contains("3) "));
}

#[test]
fn test_more_workers_than_lines_warns() {
    let o = run_on("one\ntwo\n", &["8"]);
    assert!(o.status.success());
    assert!(stdout(&o).contains("Total lines: 2\n"));
    assert!(stderr(&o).contains("more workers than lines"));
}

#[test]
fn test_empty_file() {
    let o = run_on("", &["4"]);
    assert!(o.status.success());
    assert_eq!(stdout(&o), "File is empty.\n");
}

#[test]
fn test_zero_workers_rejected() {
    let o = run_on("x\n", &["0"]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("invalid number of workers: 0"));
}

#[test]
fn test_negative_workers_rejected() {
    let o = run_on("x\n", &["-3"]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("invalid number of workers: -3"));
}

#[test]
fn test_unknown_mode_rejected() {
    let o = run_on("x\n", &["1", "bytes"]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("invalid mode 'bytes'"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let o = run_path(&dir.path().join("absent.txt"), &["2"]);
    assert_eq!(o.status.code(), Some(1));
    let err = stderr(&o);
    assert!(err.contains("No such file or directory"));
    assert!(!err.contains("os error"));
}

#[test]
fn test_directory_as_file() {
    let dir = tempfile::tempdir().unwrap();
    let o = run_path(dir.path(), &["2"]);
    assert_eq!(o.status.code(), Some(1));
    let err = stderr(&o);
    assert!(err.contains("Is a directory"), "stderr: {}", err);
    assert!(!err.contains("os error"));
}

#[test]
fn test_many_workers_finish() {
    let content: String = (0..3_000).map(|i| format!("row {}\n", i)).collect();
    let o = run_on(&content, &["3000", "all"]);
    assert!(o.status.success(), "stderr: {}", stderr(&o));
    assert!(stdout(&o).contains("Total lines: 3000\n"));
}

#[test]
fn test_verbose_reports_workers() {
    let o = run_on("a\nb\nc\nd\n", &["2", "-vv"]);
    assert!(o.status.success());
    let err = stderr(&o);
    assert!(err.contains("starting worker"));
    assert!(err.contains("worker finished"));
}
