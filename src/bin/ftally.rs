use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use tally_rs::common::io::{ends_with_newline, file_size, read_file, split_lines};
use tally_rs::common::{init_logging, reset_sigpipe};
use tally_rs::tally::{self, CountingPolicy, DEFAULT_TOP_K, Summary, TallyConfig, TallyError};

const TOOL_NAME: &str = "ftally";

#[derive(Parser)]
#[command(
    name = "ftally",
    version,
    about = "Count lines, characters and word frequencies of FILE using parallel workers"
)]
struct Cli {
    /// File to analyze
    file: PathBuf,

    /// Number of workers to split the lines across
    #[arg(allow_negative_numbers = true)]
    workers: i64,

    /// Character counting mode: visible (default) or all
    mode: Option<String>,

    /// Number of most frequent words to list
    #[arg(short = 'k', long = "top", value_name = "N", default_value_t = DEFAULT_TOP_K)]
    top: usize,

    /// Increase log verbosity (-v progress, -vv per-worker detail)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse the optional MODE operand. `None` means it was not given.
fn parse_mode(mode: Option<&str>) -> Option<CountingPolicy> {
    match mode {
        None | Some("visible") => Some(CountingPolicy::VisibleOnly),
        Some("all") => Some(CountingPolicy::IncludeLineTerminators),
        Some(_) => None,
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(policy) = parse_mode(cli.mode.as_deref()) else {
        eprintln!(
            "{}: invalid mode '{}'",
            TOOL_NAME,
            cli.mode.as_deref().unwrap_or_default()
        );
        eprintln!("Valid arguments are:");
        eprintln!("  - 'all'");
        eprintln!("  - 'visible'");
        eprintln!("Try '{} --help' for more information.", TOOL_NAME);
        process::exit(1);
    };
    if cli.mode.is_none() {
        info!("mode: {} (default)", policy.describe());
    } else {
        info!("mode: {}", policy.describe());
    }

    let config = TallyConfig {
        workers: cli.workers,
        policy,
        top_k: cli.top,
    };
    config.validate()?;

    let data = read_file(&cli.file).map_err(|e| TallyError::from_io(&cli.file, e))?;
    let lines = split_lines(&data);
    info!(lines = lines.len(), "lines read");
    info!(workers = config.workers, "workers requested");

    if lines.is_empty() {
        println!("File is empty.");
        return Ok(());
    }

    let result = tally::run(&lines, &config, ends_with_newline(&data))?;

    let summary = Summary {
        tally: &result,
        file_size: file_size(&cli.file).ok(),
        elapsed: result.elapsed,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::with_capacity(64 * 1024, stdout.lock());
    tally::write_summary(&mut out, &summary)?;
    info!("analysis complete");
    Ok(())
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", TOOL_NAME, e);
        process::exit(1);
    }
}
