//! Locate the literal, case-insensitive occurrences of a search input inside a
//! displayed name so a renderer can mark them.

use regex::RegexBuilder;
use std::ops::Range;

/// Byte ranges of every non-overlapping, case-insensitive occurrence of
/// `needle` in `text`. Needles shorter than `min_chars` characters produce
/// no ranges.
pub fn match_ranges(text: &str, needle: &str, min_chars: usize) -> Vec<Range<usize>> {
    if needle.is_empty() || needle.chars().count() < min_chars {
        return Vec::new();
    }
    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(err) => {
            tracing::debug!(error = %err, "highlight pattern rejected");
            Vec::new()
        }
    }
}
