//! Display-width aware string helpers.
//!
//! Widths are terminal cells, not bytes or chars: CJK and other wide glyphs
//! take two cells, combining marks take none.

use unicode_width::UnicodeWidthChar;

/// Tab stops are every four cells.
pub const TAB_SIZE: usize = 4;

/// Returns the display width of a string, the sum of its chars' widths.
///
/// Control characters, including the escape that starts an ANSI sequence,
/// take no cells; the rest of such a sequence is counted like any text, the
/// same as when it is cropped or wrapped.
///
/// ```rust
/// use standout_grid::text::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Width of a single char in cells; zero for control characters.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Finds the longest prefix of `s` that fits in `max_width` cells.
///
/// Returns the byte length of that prefix and its display width.
pub fn prefix_within(s: &str, max_width: usize) -> (usize, usize) {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > max_width {
            return (idx, used);
        }
        used += w;
    }
    (s.len(), used)
}

/// Replaces tabs with spaces up to the next tab stop.
pub fn expand_tabs(s: &str) -> String {
    if !s.contains('\t') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut column = 0;
    for c in s.chars() {
        match c {
            '\t' => {
                let fill = TAB_SIZE - column % TAB_SIZE;
                out.push_str(&" ".repeat(fill));
                column += fill;
            }
            '\n' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += char_width(c);
            }
        }
    }
    out
}
