use std::ops::Range;

use super::error::{Result, TallyError};

/// Contiguous, size-balanced split of `total_lines` lines across workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    ranges: Vec<Range<usize>>,
    requested: i64,
    clamped: bool,
}

impl ChunkPlan {
    /// Line index ranges, one per worker, in worker order.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of workers that will actually run.
    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    /// Worker count the caller asked for.
    pub fn requested(&self) -> i64 {
        self.requested
    }

    /// True if more workers were requested than there are lines.
    pub fn clamped(&self) -> bool {
        self.clamped
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Divide `total_lines` lines among `requested_workers` workers.
///
/// The first `total % workers` partitions get one extra line, so sizes differ
/// by at most one. Asking for more workers than lines clamps to one line per
/// worker. Zero lines yields an empty plan.
pub fn plan(total_lines: usize, requested_workers: i64) -> Result<ChunkPlan> {
    if requested_workers <= 0 {
        return Err(TallyError::InvalidConfig {
            requested: requested_workers,
        });
    }

    if total_lines == 0 {
        return Ok(ChunkPlan {
            ranges: Vec::new(),
            requested: requested_workers,
            clamped: false,
        });
    }

    let requested = usize::try_from(requested_workers).unwrap_or(usize::MAX);
    let clamped = requested > total_lines;
    let workers = requested.min(total_lines);

    let base = total_lines / workers;
    let remainder = total_lines % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let len = base + usize::from(i < remainder);
        ranges.push(start..start + len);
        start += len;
    }
    debug_assert_eq!(start, total_lines);

    Ok(ChunkPlan {
        ranges,
        requested: requested_workers,
        clamped,
    })
}
