use std::sync::LazyLock;

use regex::Regex;

// Decimal-number shape: comma-grouped triples or a plain digit run, with an
// optional fractional part. Groups after a separator must be exactly three
// digits, so "1,23" scans as two separate tokens.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?\b").unwrap());

/// Scan `text` left to right for number-shaped substrings and yield each one
/// with its grouping separators removed. Matches are non-overlapping and
/// leftmost; the scan is a pure function of the input, so the sequence can be
/// restarted simply by calling again.
pub fn numeric_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    NUMBER_RE.find_iter(text).map(|m| m.as_str().replace(',', ""))
}
