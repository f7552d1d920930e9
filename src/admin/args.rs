//! Command argument validation

/// Parse a non-negative whole number argument such as hours or points.
///
/// Returns `None` for empty, negative, fractional or non-numeric input.
#[inline]
pub fn parse_count(arg: &str) -> Option<u64> {
    let arg = arg.trim();
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}
