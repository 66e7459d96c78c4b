//! Unicode-aware text measurement for laying out labels and field text.
//!
//! All widths are terminal columns: wide (CJK, fullwidth) characters take
//! two, control and zero-width characters take none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Remove control characters. Field text is a single line, so newlines and
/// tabs are dropped too.
pub fn sanitize(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Display width of a single character.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string. The empty string measures zero.
pub fn text_width(s: &str) -> usize {
    s.width()
}

/// Longest prefix of `s` that fits in `max_width` columns.
///
/// Never splits a wide character: if the next character would straddle the
/// limit, it is left out entirely.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > max_width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Sum of widths of `chars[from..to]`.
pub(crate) fn slice_width(chars: &[char], from: usize, to: usize) -> usize {
    chars[from..to].iter().map(|&c| char_width(c)).sum()
}
