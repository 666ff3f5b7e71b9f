use std::io::{self, Write};
use std::time::Duration;

use super::pipeline::Tally;

/// Everything the results block needs.
pub struct Summary<'a> {
    pub tally: &'a Tally,
    /// Byte length of the input, from file metadata.
    pub file_size: Option<u64>,
    pub elapsed: Duration,
}

/// Render the results block.
///
/// The most-frequent line and the ranked list are omitted when the input
/// contained no words.
pub fn write_summary(out: &mut impl Write, summary: &Summary<'_>) -> io::Result<()> {
    let tally = summary.tally;

    writeln!(out, "=== RESULTS ===")?;
    writeln!(out, "Total lines: {}", tally.global.lines)?;
    writeln!(out, "Total characters: {}", tally.global.chars)?;
    if let Some(size) = summary.file_size {
        writeln!(out, "File size (bytes): {}", size)?;
    }
    writeln!(out, "Elapsed: {} ms", summary.elapsed.as_millis())?;

    if let Some(top) = &tally.report.most_frequent {
        writeln!(out, "Most frequent word: '{}' ({} times)", top.word, top.count)?;
        writeln!(out)?;
        writeln!(out, "Top {} words:", tally.report.ranked.len())?;
        for (i, entry) in tally.report.ranked.iter().enumerate() {
            writeln!(out, "{}) '{}' : {}", i + 1, entry.word, entry.count)?;
        }
    }
    out.flush()
}
