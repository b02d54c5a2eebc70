//! Line breaking.
//!
//! Breaks are chosen greedily at word boundaries. A word keeps its trailing
//! whitespace, so joining the divided lines gives back the original line.
//! Words longer than the width are either split across lines (fold) or
//! left whole to overrun, to be truncated afterwards.

use super::util::{char_width, display_width};

/// Byte ranges of the words in `text`.
///
/// Each word carries the whitespace that follows it; the first word also
/// carries any leading whitespace. Trailing whitespace with no word after
/// it belongs to the last word.
pub fn words(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut start = 0;

    loop {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }
        while chars.next_if(|(_, c)| !c.is_whitespace()).is_some() {}
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let end = chars.peek().map(|(idx, _)| *idx).unwrap_or(text.len());
        spans.push((start, end));
        start = end;
    }

    spans
}

/// Splits `text` into pieces of at most `width` cells each.
///
/// Always makes progress: a glyph wider than `width` gets a piece of its
/// own.
pub fn chop_cells(text: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = char_width(c);
        if used + w > width && idx > start {
            pieces.push(&text[start..idx]);
            start = idx;
            used = 0;
        }
        used += w;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Byte offsets at which `text` should be broken to fit `width` cells.
///
/// With `fold`, words wider than a whole line are split; the last piece
/// continues the line so following words can join it.
pub fn divide_line(text: &str, width: usize, fold: bool) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut offset = 0;

    for (start, end) in words(text) {
        let word = &text[start..end];
        let word_width = display_width(word.trim_end());

        if offset + word_width <= width {
            offset += display_width(word);
        } else if word_width > width {
            if fold {
                let pieces = chop_cells(word, width);
                let last = pieces.len().saturating_sub(1);
                let mut piece_start = start;
                for (index, piece) in pieces.into_iter().enumerate() {
                    if piece_start > 0 {
                        breaks.push(piece_start);
                    }
                    if index == last {
                        offset = display_width(piece);
                    } else {
                        piece_start += piece.len();
                    }
                }
            } else {
                if start > 0 {
                    breaks.push(start);
                }
                offset = display_width(word);
            }
        } else if offset > 0 && start > 0 {
            breaks.push(start);
            offset = display_width(word);
        }
    }

    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_at<'a>(text: &'a str, breaks: &[usize]) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut last = 0;
        for &b in breaks {
            out.push(&text[last..b]);
            last = b;
        }
        out.push(&text[last..]);
        out
    }

    #[test]
    fn test_words_keep_trailing_whitespace() {
        let text = "  foo bar  baz ";
        let spans: Vec<&str> = words(text).iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(spans, vec!["  foo ", "bar  ", "baz "]);
    }

    #[test]
    fn test_words_empty_and_blank() {
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_divide_simple() {
        let text = "banana pancakes";
        assert_eq!(split_at(text, &divide_line(text, 10, true)), vec!["banana ", "pancakes"]);
        assert!(divide_line(text, 15, true).is_empty());
    }

    #[test]
    fn test_divide_folds_long_word() {
        let text = "abcdefghij xy";
        assert_eq!(
            split_at(text, &divide_line(text, 4, true)),
            vec!["abcd", "efgh", "ij ", "xy"]
        );
    }

    #[test]
    fn test_divide_fold_last_piece_continues_line() {
        let text = "abcdef g";
        assert_eq!(
            split_at(text, &divide_line(text, 4, true)),
            vec!["abcd", "ef g"]
        );
    }

    #[test]
    fn test_divide_without_fold_keeps_word_whole() {
        let text = "banana pancakes";
        assert_eq!(
            split_at(text, &divide_line(text, 7, false)),
            vec!["banana ", "pancakes"]
        );
    }

    #[test]
    fn test_chop_cells_wide_glyphs() {
        assert_eq!(chop_cells("日本語", 4), vec!["日本", "語"]);
        assert_eq!(chop_cells("日本", 1), vec!["日", "本"]);
    }
}
