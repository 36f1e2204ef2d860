/// Finds the first occurrence of `needle` inside `haystack[start..end)`.
///
/// Only matches lying completely inside the window are reported, so a needle
/// longer than the remaining window (or an empty window) yields `None`.
/// `end` is clamped to the haystack length.
pub fn find(haystack: &[u8], needle: &[u8], start: usize, end: usize) -> Option<usize> {
    let end = end.min(haystack.len());

    if needle.is_empty() || start >= end || end - start < needle.len() {
        return None;
    }

    haystack[start..end]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| start + pos)
}
