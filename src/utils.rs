//! Common utilities

/// Returns the byte offset of the `idx`-th `char` in `text`, or `text.len()` if `text` has `idx`
/// or fewer chars.
pub fn byte_offset(text: &str, idx: usize) -> usize {
    text.char_indices()
        .nth(idx)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Slices `text` by char positions rather than byte offsets.
///
/// Out of range positions are clamped to the end of `text` and an inverted range yields `""`, so
/// this never panics.
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }

    let begin = byte_offset(text, start);
    let rest = &text[begin..];
    &rest[..byte_offset(rest, end - start)]
}

/// Number of `char`s in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
