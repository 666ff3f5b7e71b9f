use std::num::NonZeroUsize;
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{info, warn};

use super::analyze::CountingPolicy;
use super::error::{Result, TallyError};
use super::merge::{GlobalResult, merge};
use super::plan::plan;
use super::rank::{RankedReport, rank};
use super::worker::{PartialResult, partitions};

/// Default length of the ranked word list.
pub const DEFAULT_TOP_K: usize = 10;

/// Settings fixed for the whole run.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    /// Requested worker count. Non-positive values are rejected.
    pub workers: i64,
    pub policy: CountingPolicy,
    pub top_k: usize,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            policy: CountingPolicy::VisibleOnly,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl TallyConfig {
    /// Reject a non-positive worker count before any input is read.
    pub fn validate(&self) -> Result<()> {
        if self.workers <= 0 {
            return Err(TallyError::InvalidConfig {
                requested: self.workers,
            });
        }
        Ok(())
    }
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct Tally {
    /// Workers that actually ran.
    pub workers: usize,
    /// True if the requested worker count exceeded the line count.
    pub clamped: bool,
    pub global: GlobalResult,
    pub report: RankedReport,
    /// Wall-clock time from planning through the merge; ranking excluded.
    pub elapsed: Duration,
}

/// Threads for the worker pool: one per core, never more than partitions.
pub(super) fn pool_threads(partitions: usize) -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(partitions)
        .max(1)
}

/// Partition `lines`, tally each partition as its own task, then merge and
/// rank.
///
/// Tasks run on a dedicated pool capped at the core count, so a partition
/// count in the thousands queues tasks instead of spawning threads. The
/// merge starts only after every task has returned.
pub fn run<L>(lines: &[L], config: &TallyConfig, file_ends_with_newline: bool) -> Result<Tally>
where
    L: AsRef<[u8]> + Sync,
{
    let start = Instant::now();
    let chunks = plan(lines.len(), config.workers)?;
    if chunks.is_empty() {
        return Err(TallyError::EmptyInput);
    }
    if chunks.clamped() {
        warn!(
            requested = chunks.requested(),
            workers = chunks.workers(),
            "more workers than lines, using {}",
            chunks.workers()
        );
    }

    let parts = partitions(lines, &chunks, file_ends_with_newline);
    for part in &parts {
        info!(worker = part.index, lines = part.lines.len(), "starting worker");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(pool_threads(chunks.workers()))
        .thread_name(|i| format!("tally-worker-{i}"))
        .build()?;
    let policy = config.policy;
    let partials: Vec<PartialResult> =
        pool.install(|| parts.par_iter().map(|part| part.process(policy)).collect());

    let global = merge(partials)?;
    let elapsed = start.elapsed();
    let report = rank(&global.words, config.top_k);

    Ok(Tally {
        workers: chunks.workers(),
        clamped: chunks.clamped(),
        global,
        report,
        elapsed,
    })
}
