//! Pluralization helpers for report lines.

/// Return "s" suffix for plural counts (`0 nodes`, `1 node`, `5 nodes`).
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
