//! Entry list parsing
//!
//! Raw entry text is plain newline-delimited text. Entries are derived data:
//! they are recomputed from the raw text on every redraw and never stored on
//! their own.

/// Parse raw text into the ordered list of non-empty, trimmed entries.
///
/// Duplicates are kept; each occupies its own segment.
pub fn parse(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Number of entries `raw` would produce, without allocating them
pub fn count(raw: &str) -> usize {
    raw.split('\n').filter(|line| !line.trim().is_empty()).count()
}

/// Join entries back into raw text
pub fn join(entries: &[String]) -> String {
    entries.join("\n")
}
