/// How characters are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountingPolicy {
    /// Only the bytes of each line.
    #[default]
    VisibleOnly,
    /// Line bytes plus one per `\n` terminator present in the file.
    IncludeLineTerminators,
}

impl CountingPolicy {
    /// Human-readable description used in the run banner.
    pub fn describe(self) -> &'static str {
        match self {
            CountingPolicy::VisibleOnly => "visible characters only",
            CountingPolicy::IncludeLineTerminators => {
                "all characters including line terminators"
            }
        }
    }
}

/// Whitespace lookup table matching C locale `isspace()`:
/// space, tab, newline, CR, form feed, vertical tab.
const fn make_ws_table() -> [bool; 256] {
    let mut t = [false; 256];
    t[0x09] = true; // \t  horizontal tab
    t[0x0A] = true; // \n  newline
    t[0x0B] = true; // \v  vertical tab
    t[0x0C] = true; // \f  form feed
    t[0x0D] = true; // \r  carriage return
    t[0x20] = true; //     space
    t
}

const WS_TABLE: [bool; 256] = make_ws_table();

#[inline(always)]
fn is_space(b: u8) -> bool {
    WS_TABLE[b as usize]
}

/// Per-line output of the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineAnalysis {
    pub chars: u64,
    pub words: Vec<String>,
}

/// Iterator over the normalized words of one line.
///
/// Tokens are maximal runs of non-whitespace bytes. Every byte that is not
/// ASCII alphanumeric is dropped and the rest is lowercased; tokens left
/// empty are skipped.
pub struct Words<'a> {
    rest: &'a [u8],
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let start = self.rest.iter().position(|&b| !is_space(b))?;
            let tail = &self.rest[start..];
            let end = tail.iter().position(|&b| is_space(b)).unwrap_or(tail.len());
            let (token, rest) = tail.split_at(end);
            self.rest = rest;

            let word: String = token
                .iter()
                .filter(|b| b.is_ascii_alphanumeric())
                .map(|&b| b.to_ascii_lowercase() as char)
                .collect();
            if !word.is_empty() {
                return Some(word);
            }
        }
    }
}

/// Lazily tokenize a line into normalized words.
#[inline]
pub fn words(line: &[u8]) -> Words<'_> {
    Words { rest: line }
}

/// Collect the normalized words of a line, duplicates and order kept.
pub fn extract_words(line: &[u8]) -> Vec<String> {
    words(line).collect()
}

/// Characters this line contributes to the total.
///
/// `terminated` is false only for the final line of a file that does not end
/// with `\n`; it is ignored under `VisibleOnly`.
#[inline]
pub fn char_contribution(line: &[u8], policy: CountingPolicy, terminated: bool) -> u64 {
    let len = line.len() as u64;
    match policy {
        CountingPolicy::VisibleOnly => len,
        CountingPolicy::IncludeLineTerminators => len + u64::from(terminated),
    }
}

/// Character contribution and words of a single line.
pub fn analyze(line: &[u8], policy: CountingPolicy, terminated: bool) -> LineAnalysis {
    LineAnalysis {
        chars: char_contribution(line, policy, terminated),
        words: extract_words(line),
    }
}
