use std::collections::HashMap;

use tracing::debug;

use super::analyze::{CountingPolicy, char_contribution, words};
use super::plan::ChunkPlan;

/// Word → occurrence count.
pub type WordTable = HashMap<String, u64>;

/// One worker's private tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialResult {
    pub lines: u64,
    pub chars: u64,
    pub words: WordTable,
}

/// A contiguous run of lines owned by one worker, plus the two facts about
/// the whole file that a slice of lines cannot tell on its own.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a, L> {
    pub index: usize,
    pub lines: &'a [L],
    /// This partition holds the last line of the file.
    pub is_file_tail: bool,
    pub file_ends_with_newline: bool,
}

impl<'a, L: AsRef<[u8]>> Partition<'a, L> {
    /// Tally every line of the partition.
    pub fn process(&self, policy: CountingPolicy) -> PartialResult {
        let mut result = PartialResult::default();
        let last = self.lines.len().saturating_sub(1);

        for (idx, line) in self.lines.iter().enumerate() {
            let line = line.as_ref();
            result.lines += 1;

            let unterminated_tail =
                self.is_file_tail && idx == last && !self.file_ends_with_newline;
            result.chars += char_contribution(line, policy, !unterminated_tail);

            for word in words(line) {
                *result.words.entry(word).or_insert(0) += 1;
            }
        }

        debug!(
            worker = self.index,
            lines = result.lines,
            chars = result.chars,
            distinct_words = result.words.len(),
            "worker finished"
        );
        result
    }
}

/// Carve `lines` into the partitions described by `plan`.
///
/// Only the final partition is marked as the file tail.
pub fn partitions<'a, L>(
    lines: &'a [L],
    plan: &ChunkPlan,
    file_ends_with_newline: bool,
) -> Vec<Partition<'a, L>> {
    let count = plan.workers();
    plan.ranges()
        .iter()
        .enumerate()
        .map(|(index, range)| Partition {
            index,
            lines: &lines[range.clone()],
            is_file_tail: index + 1 == count,
            file_ends_with_newline,
        })
        .collect()
}
