use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tally_rs::common::io::split_lines;
use tally_rs::tally::{self, CountingPolicy, TallyConfig};

const VOCAB: [&str; 8] = [
    "alpha", "Beta,", "gamma!", "delta", "(epsilon)", "zeta", "eta.", "theta",
];

fn generate_text(lines: usize, words_per_line: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..lines {
        for j in 0..words_per_line {
            if j > 0 {
                data.push(b' ');
            }
            data.extend_from_slice(VOCAB[(i * 7 + j * 3) % VOCAB.len()].as_bytes());
        }
        data.push(b'\n');
    }
    data
}

fn bench_extract_words(c: &mut Criterion) {
    let data = generate_text(10_000, 10);
    let lines = split_lines(&data);
    c.bench_function("tally_extract_words_10k_lines", |b| {
        b.iter(|| {
            lines
                .iter()
                .map(|l| tally::words(black_box(l)).count())
                .sum::<usize>()
        })
    });
}

fn bench_run_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tally_run");
    let data = generate_text(200_000, 8);
    let lines = split_lines(&data);
    for workers in [1i64, 2, 4, 8] {
        let config = TallyConfig {
            workers,
            policy: CountingPolicy::IncludeLineTerminators,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::new("workers", workers),
            &config,
            |b, config| b.iter(|| tally::run(black_box(&lines), config, true)),
        );
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let table: tally::WordTable = (0..50_000u64)
        .map(|i| (format!("word{}", i), i % 997))
        .collect();
    c.bench_function("tally_rank_top10_50k", |b| {
        b.iter(|| tally::rank(black_box(&table), 10))
    });
}

criterion_group!(benches, bench_extract_words, bench_run_workers, bench_rank);
criterion_main!(benches);
