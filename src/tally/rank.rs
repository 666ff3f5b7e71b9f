use std::cmp::Ordering;

use super::worker::WordTable;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

/// The most frequent word and the top-K list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedReport {
    pub most_frequent: Option<RankedWord>,
    pub ranked: Vec<RankedWord>,
}

/// Descending count, then ascending word so ties are reproducible.
#[inline]
fn by_rank(a: (&String, &u64), b: (&String, &u64)) -> Ordering {
    b.1.cmp(a.1).then_with(|| a.0.cmp(b.0))
}

/// Rank the table and keep at most `top_k` entries.
pub fn rank(table: &WordTable, top_k: usize) -> RankedReport {
    let most_frequent = table
        .iter()
        .min_by(|a, b| by_rank(*a, *b))
        .map(|(word, count)| RankedWord {
            word: word.clone(),
            count: *count,
        });

    let mut entries: Vec<(&String, &u64)> = table.iter().collect();
    let keep = top_k.min(entries.len());
    if keep == 0 {
        return RankedReport {
            most_frequent,
            ranked: Vec::new(),
        };
    }

    // Only the first `keep` positions need to be ordered.
    if keep < entries.len() {
        entries.select_nth_unstable_by(keep - 1, |a, b| by_rank(*a, *b));
        entries.truncate(keep);
    }
    entries.sort_unstable_by(|a, b| by_rank(*a, *b));

    let ranked = entries
        .into_iter()
        .map(|(word, count)| RankedWord {
            word: word.clone(),
            count: *count,
        })
        .collect();

    RankedReport {
        most_frequent,
        ranked,
    }
}
