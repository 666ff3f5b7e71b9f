use super::error::{Result, TallyError};
use super::worker::{PartialResult, WordTable};

/// Totals across every worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalResult {
    pub lines: u64,
    pub chars: u64,
    pub words: WordTable,
}

impl GlobalResult {
    /// Fold one partial result in. Addition only, so order never matters.
    fn absorb(&mut self, partial: PartialResult) {
        self.lines += partial.lines;
        self.chars += partial.chars;
        if self.words.is_empty() {
            self.words = partial.words;
            return;
        }
        for (word, count) in partial.words {
            *self.words.entry(word).or_insert(0) += count;
        }
    }

    /// Total number of word occurrences.
    pub fn total_words(&self) -> u64 {
        self.words.values().sum()
    }
}

/// Merge per-worker results into one global result.
pub fn merge<I>(results: I) -> Result<GlobalResult>
where
    I: IntoIterator<Item = PartialResult>,
{
    let mut results = results.into_iter().peekable();
    if results.peek().is_none() {
        return Err(TallyError::EmptyInput);
    }

    let mut global = GlobalResult::default();
    for partial in results {
        global.absorb(partial);
    }
    Ok(global)
}
