//! Styled text: the built-in cell content.
//!
//! [`Text`] is a plain string with styled [`Span`]s over it, a base style,
//! and optional per-text overrides for justification, overflow and
//! wrapping. It measures itself (longest word to longest line) and renders
//! itself into wrapped, justified [`Line`]s.
//!
//! ```rust
//! use standout_grid::{Justify, Overflow, Text};
//!
//! let text = Text::new("banana pancakes");
//! let lines = text.wrap(10, Justify::Center, Overflow::Fold, false);
//! let plain: Vec<&str> = lines.iter().map(|l| l.plain()).collect();
//! assert_eq!(plain, vec!["  banana  ", " pancakes "]);
//! ```
//!
//! Tabs are expanded to four-cell stops when text is created.

mod highlight;
mod util;
mod wrap;

pub use highlight::highlight;
pub use util::{char_width, display_width, expand_tabs, prefix_within, TAB_SIZE};
pub use wrap::{chop_cells, divide_line, words};

use crate::measure::Measurement;
use crate::renderable::{RenderOptions, Renderable};
use crate::segment::{Line, Segment};
use crate::style::Style;
use crate::types::{Justify, Overflow};

const ELLIPSIS: &str = "…";

/// A styled byte range of a [`Text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// A string with styled spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    plain: String,
    spans: Vec<Span>,
    /// Style under every span.
    pub style: Style,
    /// Overrides the justification of the column the text is rendered in.
    pub justify: Option<Justify>,
    /// Overrides the overflow policy of the column.
    pub overflow: Option<Overflow>,
    /// Overrides the column's wrap setting.
    pub no_wrap: Option<bool>,
    highlightable: bool,
}

impl Text {
    pub fn new(plain: impl Into<String>) -> Self {
        Self {
            plain: expand_tabs(&plain.into()),
            ..Self::default()
        }
    }

    /// Text with a base style.
    pub fn styled(plain: impl Into<String>, style: Style) -> Self {
        Self {
            style,
            ..Self::new(plain)
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = Some(no_wrap);
        self
    }

    /// Allow literal highlighting when rendered with highlighting on.
    pub fn highlightable(mut self, highlightable: bool) -> Self {
        self.highlightable = highlightable;
        self
    }

    pub fn is_highlightable(&self) -> bool {
        self.highlightable
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    /// Display width of the whole text, ignoring line breaks.
    pub fn cell_len(&self) -> usize {
        display_width(&self.plain)
    }

    /// Appends text, optionally styled.
    pub fn append(&mut self, text: &str, style: Option<Style>) -> &mut Self {
        let start = self.plain.len();
        self.plain.push_str(&expand_tabs(text));
        if let Some(style) = style {
            self.stylize_bytes(style, start, self.plain.len());
        }
        self
    }

    /// Styles the chars in `start..end`.
    pub fn stylize(&mut self, style: Style, start: usize, end: usize) -> &mut Self {
        let to_byte = |index: usize| {
            self.plain
                .char_indices()
                .nth(index)
                .map(|(b, _)| b)
                .unwrap_or(self.plain.len())
        };
        let (start, end) = (to_byte(start), to_byte(end));
        self.stylize_bytes(style, start, end)
    }

    pub(crate) fn stylize_bytes(&mut self, style: Style, start: usize, end: usize) -> &mut Self {
        let end = end.min(self.plain.len());
        if start < end {
            self.spans.push(Span { start, end, style });
        }
        self
    }

    /// A copy of the bytes `start..end` with spans clipped to that range.
    fn slice(&self, start: usize, end: usize) -> Text {
        let spans = self
            .spans
            .iter()
            .filter(|span| span.end > start && span.start < end)
            .map(|span| Span {
                start: span.start.max(start) - start,
                end: span.end.min(end) - start,
                style: span.style.clone(),
            })
            .collect();
        Text {
            plain: self.plain[start..end].to_string(),
            spans,
            ..self.shell()
        }
    }

    /// Same settings, no content.
    fn shell(&self) -> Text {
        Text {
            plain: String::new(),
            spans: Vec::new(),
            style: self.style.clone(),
            justify: self.justify,
            overflow: self.overflow,
            no_wrap: self.no_wrap,
            highlightable: self.highlightable,
        }
    }

    fn push_text(&mut self, other: &Text) {
        let offset = self.plain.len();
        self.plain.push_str(&other.plain);
        self.spans.extend(other.spans.iter().map(|span| Span {
            start: span.start + offset,
            end: span.end + offset,
            style: span.style.clone(),
        }));
    }

    /// Splits at `\n`, keeping blank lines.
    pub fn split_lines(&self) -> Vec<Text> {
        let mut lines = Vec::new();
        let mut start = 0;
        for (idx, _) in self.plain.match_indices('\n') {
            lines.push(self.slice(start, idx));
            start = idx + 1;
        }
        lines.push(self.slice(start, self.plain.len()));
        lines
    }

    /// Splits at the given byte offsets.
    pub fn divide(&self, offsets: &[usize]) -> Vec<Text> {
        let mut pieces = Vec::with_capacity(offsets.len() + 1);
        let mut start = 0;
        for &offset in offsets {
            pieces.push(self.slice(start, offset));
            start = offset;
        }
        pieces.push(self.slice(start, self.plain.len()));
        pieces
    }

    fn crop_bytes(&mut self, end: usize) {
        self.plain.truncate(end);
        self.spans.retain_mut(|span| {
            span.end = span.end.min(end);
            span.start < span.end
        });
    }

    /// Crops or pads to exactly `width` cells.
    pub fn set_cell_size(&mut self, width: usize) {
        let (end, used) = prefix_within(&self.plain, width);
        self.crop_bytes(end);
        self.pad_right(width - used);
    }

    /// Applies the overflow policy when wider than `width`, then
    /// optionally pads up to `width`.
    pub fn truncate(&mut self, width: usize, overflow: Overflow, pad: bool) {
        let length = self.cell_len();
        if overflow != Overflow::Ignore && length > width {
            if overflow == Overflow::Ellipsis && width > 0 {
                self.set_cell_size(width - 1);
                self.plain.push_str(ELLIPSIS);
            } else {
                self.set_cell_size(width);
            }
        }
        let length = self.cell_len();
        if pad && length < width {
            self.pad_right(width - length);
        }
    }

    pub fn pad_left(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.plain.insert_str(0, &" ".repeat(count));
        for span in &mut self.spans {
            span.start += count;
            span.end += count;
        }
    }

    pub fn pad_right(&mut self, count: usize) {
        self.plain.push_str(&" ".repeat(count));
    }

    /// Removes trailing whitespace.
    pub fn rstrip(&mut self) {
        let end = self.plain.trim_end().len();
        self.crop_bytes(end);
    }

    /// Removes trailing whitespace that sits beyond `width` cells.
    pub fn rstrip_end(&mut self, width: usize) {
        let length = self.cell_len();
        if length <= width {
            return;
        }
        let mut excess = length - width;
        let mut end = self.plain.len();
        for (idx, c) in self.plain.char_indices().rev() {
            if excess == 0 || !c.is_whitespace() {
                break;
            }
            end = idx;
            excess = excess.saturating_sub(char_width(c));
        }
        self.crop_bytes(end);
    }

    /// Wraps into lines no wider than `width`, justified within it.
    ///
    /// Lines may still overrun with [`Overflow::Ignore`].
    pub fn wrap(&self, width: usize, justify: Justify, overflow: Overflow, no_wrap: bool) -> Vec<Text> {
        let mut lines = Vec::new();
        for line in self.split_lines() {
            if width == 0 {
                lines.push(line.shell());
                continue;
            }
            let mut divided = if no_wrap {
                vec![line]
            } else {
                let offsets = divide_line(&line.plain, width, overflow == Overflow::Fold);
                line.divide(&offsets)
            };
            for piece in &mut divided {
                piece.rstrip_end(width);
            }
            justify_lines(&mut divided, width, justify, overflow);
            for piece in &mut divided {
                piece.truncate(width, overflow, false);
            }
            lines.extend(divided);
        }
        lines
    }

    /// Converts to a styled line, with `base` under the text's own style.
    pub fn to_line(&self, base: &Style) -> Line {
        let base = base.combine(&self.style);
        let mut line = Line::new();
        if self.spans.is_empty() {
            line.push(Segment::new(self.plain.clone(), base));
            return line;
        }

        let mut cuts: Vec<usize> = vec![0, self.plain.len()];
        for span in &self.spans {
            cuts.push(span.start);
            cuts.push(span.end);
        }
        cuts.sort_unstable();
        cuts.dedup();

        for window in cuts.windows(2) {
            let (start, end) = (window[0], window[1]);
            let style = self
                .spans
                .iter()
                .filter(|span| span.start <= start && span.end >= end)
                .fold(base.clone(), |acc, span| acc.combine(&span.style));
            line.push(Segment::new(&self.plain[start..end], style));
        }
        line
    }
}

fn justify_lines(lines: &mut [Text], width: usize, justify: Justify, overflow: Overflow) {
    match justify {
        Justify::Left => {
            for line in lines.iter_mut() {
                line.truncate(width, overflow, true);
            }
        }
        Justify::Center => {
            for line in lines.iter_mut() {
                line.rstrip();
                line.truncate(width, overflow, false);
                let length = line.cell_len();
                line.pad_left(width.saturating_sub(length) / 2);
                let length = line.cell_len();
                line.pad_right(width.saturating_sub(length));
            }
        }
        Justify::Right => {
            for line in lines.iter_mut() {
                line.rstrip();
                line.truncate(width, overflow, false);
                let length = line.cell_len();
                line.pad_left(width.saturating_sub(length));
            }
        }
        Justify::Full => {
            let count = lines.len();
            for line in lines.iter_mut().take(count.saturating_sub(1)) {
                *line = spread_words(line, width);
            }
        }
    }
}

/// Widens the gaps between words until the line is `width` cells wide.
/// Extra spaces go to the rightmost gaps first.
fn spread_words(line: &Text, width: usize) -> Text {
    let mut trimmed = line.clone();
    trimmed.rstrip();

    let mut bounds = Vec::new();
    let mut start = 0;
    for (idx, _) in trimmed.plain.match_indices(' ') {
        bounds.push((start, idx));
        start = idx + 1;
    }
    bounds.push((start, trimmed.plain.len()));

    if bounds.len() < 2 {
        return trimmed;
    }

    let words_size: usize = bounds
        .iter()
        .map(|&(s, e)| display_width(&trimmed.plain[s..e]))
        .sum();
    let mut spaces = vec![1usize; bounds.len() - 1];
    let mut num_spaces = spaces.len();
    let mut index = 0;
    while words_size + num_spaces < width {
        let gap = spaces.len() - index - 1;
        spaces[gap] += 1;
        num_spaces += 1;
        index = (index + 1) % spaces.len();
    }

    let mut spread = trimmed.shell();
    for (i, &(s, e)) in bounds.iter().enumerate() {
        spread.push_text(&trimmed.slice(s, e));
        if let Some(&gap) = spaces.get(i) {
            spread.plain.push_str(&" ".repeat(gap));
        }
    }
    spread
}

impl Renderable for Text {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        let maximum = self
            .plain
            .split('\n')
            .map(display_width)
            .max()
            .unwrap_or(0);
        let no_wrap = self.no_wrap.unwrap_or(options.no_wrap);
        let minimum = if no_wrap {
            maximum
        } else {
            self.plain
                .split_whitespace()
                .map(display_width)
                .max()
                .unwrap_or(maximum)
        };
        Measurement::new(minimum, maximum)
    }

    fn render(&self, options: &RenderOptions) -> Vec<Line> {
        let justify = self.justify.or(options.justify).unwrap_or_default();
        let overflow = self.overflow.or(options.overflow).unwrap_or_default();
        let no_wrap = self.no_wrap.unwrap_or(options.no_wrap);

        let source = if options.highlight && self.highlightable {
            let mut highlighted = self.clone();
            highlight(&mut highlighted);
            highlighted
        } else {
            self.clone()
        };

        source
            .wrap(options.max_width, justify, overflow, no_wrap)
            .iter()
            .map(|line| line.to_line(&options.style))
            .collect()
    }
}

impl From<&str> for Text {
    fn from(plain: &str) -> Self {
        Text::new(plain)
    }
}

impl From<String> for Text {
    fn from(plain: String) -> Self {
        Text::new(plain)
    }
}
