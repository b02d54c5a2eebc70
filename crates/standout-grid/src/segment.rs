//! Styled output lines.
//!
//! A [`Line`] is what every renderable produces and what a table emits: an
//! ordered run of [`Segment`]s, each a piece of text with a [`Style`].
//! Lines know their display width and can be cropped or padded to an exact
//! width without splitting a double-width glyph.

use std::fmt;

use crate::style::Style;
use crate::text::{char_width, display_width};

/// A piece of text with a single style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// An unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    /// Display width in terminal cells.
    pub fn cell_len(&self) -> usize {
        display_width(&self.text)
    }
}

/// One line of styled output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// A line of `width` spaces in `style`.
    pub fn blank(width: usize, style: &Style) -> Self {
        let mut line = Line::new();
        line.push(Segment::new(" ".repeat(width), style.clone()));
        line
    }

    /// Appends a segment, skipping empty ones.
    pub fn push(&mut self, segment: Segment) {
        if !segment.text.is_empty() {
            self.segments.push(segment);
        }
    }

    /// Appends all segments of another line.
    pub fn extend(&mut self, other: Line) {
        for segment in other.segments {
            self.push(segment);
        }
    }

    /// Display width in terminal cells.
    pub fn cell_len(&self) -> usize {
        self.segments.iter().map(Segment::cell_len).sum()
    }

    /// The text of the line without styles.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Crop or pad to exactly `width` cells.
    ///
    /// Padding uses `style`. A double-width glyph straddling the crop point
    /// is replaced by a space so the result is never wider than `width`.
    pub fn adjust(mut self, width: usize, style: &Style) -> Line {
        let length = self.cell_len();
        if length < width {
            self.push(Segment::new(" ".repeat(width - length), style.clone()));
            return self;
        }
        if length == width {
            return self;
        }

        let mut cropped = Line::new();
        let mut remaining = width;
        for segment in self.segments {
            if remaining == 0 {
                break;
            }
            let seg_width = segment.cell_len();
            if seg_width <= remaining {
                remaining -= seg_width;
                cropped.push(segment);
                continue;
            }
            let mut text = String::new();
            for ch in segment.text.chars() {
                let w = char_width(ch);
                if w > remaining {
                    break;
                }
                remaining -= w;
                text.push(ch);
            }
            text.push_str(&" ".repeat(remaining));
            remaining = 0;
            cropped.push(Segment::new(text, segment.style));
        }
        cropped
    }

    /// Layers `style` under every segment.
    pub fn apply_style(mut self, style: &Style) -> Line {
        if style.is_empty() {
            return self;
        }
        for segment in &mut self.segments {
            segment.style = style.combine(&segment.style);
        }
        self
    }

    /// Renders the line with ANSI escapes regardless of terminal detection.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.style.is_empty() {
                out.push_str(&segment.text);
            } else {
                let styled = segment
                    .style
                    .to_console()
                    .force_styling(true)
                    .apply_to(&segment.text);
                out.push_str(&styled.to_string());
            }
        }
        out
    }
}

impl fmt::Display for Line {
    /// Writes styled text, honoring `console`'s color detection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            if segment.style.is_empty() {
                f.write_str(&segment.text)?;
            } else {
                write!(f, "{}", segment.style.to_console().apply_to(&segment.text))?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        let mut line = Line::new();
        line.push(Segment::plain(text));
        line
    }
}
