//! Laying out a single cell.
//!
//! A cell is rendered at its column's width minus horizontal padding, every
//! line is padded out to the full column width, and padding lines are added
//! above and below. The block is then aligned vertically against the
//! tallest cell of its row.

use crate::renderable::{Cell, RenderOptions};
use crate::segment::{Line, Segment};
use crate::style::Style;
use crate::types::{Justify, Overflow, VerticalAlign};

use super::options::Padding;

/// Layout settings for one cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellFormat {
    pub justify: Justify,
    pub overflow: Overflow,
    pub no_wrap: bool,
    pub highlight: bool,
    pub vertical: VerticalAlign,
    /// Style under the content, also used for padding and blank lines.
    pub style: Style,
}

impl CellFormat {
    fn options(&self, width: usize) -> RenderOptions {
        RenderOptions::new(width)
            .with_justify(self.justify)
            .with_overflow(self.overflow)
            .with_no_wrap(self.no_wrap)
            .with_highlight(self.highlight)
            .with_style(self.style.clone())
    }
}

/// The rendered lines of one cell, each exactly `width` cells wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBlock {
    pub lines: Vec<Line>,
    pub width: usize,
}

impl CellBlock {
    /// Renders `cell` into a block `width` cells wide, padding included.
    pub fn render(cell: &Cell, width: usize, padding: Padding, format: &CellFormat) -> Self {
        let style = &format.style;
        let content_width = width.saturating_sub(padding.left + padding.right);
        let left = " ".repeat(padding.left);
        let right = " ".repeat(padding.right);

        let mut lines = Vec::new();
        lines.extend((0..padding.top).map(|_| Line::blank(width, style)));
        for content in cell.render(&format.options(content_width)) {
            let mut line = Line::new();
            line.push(Segment::new(left.as_str(), style.clone()));
            line.extend(content.adjust(content_width, style));
            line.push(Segment::new(right.as_str(), style.clone()));
            lines.push(line.adjust(width, style));
        }
        lines.extend((0..padding.bottom).map(|_| Line::blank(width, style)));

        Self { lines, width }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Pads the block to `height` lines with blank lines in `style`.
    ///
    /// Top alignment adds blanks after the content, bottom before it, and
    /// middle splits them with the odd one after. A block taller than
    /// `height` is cut to `height`.
    pub fn align(self, vertical: VerticalAlign, height: usize, style: &Style) -> Vec<Line> {
        let width = self.width;
        let mut lines = self.lines;
        lines.truncate(height);

        let blank = height - lines.len();
        let (before, after) = match vertical {
            VerticalAlign::Top => (0, blank),
            VerticalAlign::Bottom => (blank, 0),
            VerticalAlign::Middle => (blank / 2, blank - blank / 2),
        };

        let mut aligned = Vec::with_capacity(height);
        aligned.extend((0..before).map(|_| Line::blank(width, style)));
        aligned.extend(lines);
        aligned.extend((0..after).map(|_| Line::blank(width, style)));
        aligned
    }
}

/// Renders a cell to exactly `width` cells and `target_height` lines.
///
/// ```rust
/// use standout_grid::{render_cell, CellFormat, Cell, VerticalAlign};
///
/// let format = CellFormat {
///     vertical: VerticalAlign::Bottom,
///     ..CellFormat::default()
/// };
/// let lines = render_cell(&Cell::from("foo"), 5, &format, 3);
/// let plain: Vec<String> = lines.iter().map(|l| l.plain()).collect();
/// assert_eq!(plain, vec!["     ", "     ", "foo  "]);
/// ```
pub fn render_cell(cell: &Cell, width: usize, format: &CellFormat, target_height: usize) -> Vec<Line> {
    CellBlock::render(cell, width, Padding::ZERO, format).align(
        format.vertical,
        target_height,
        &format.style,
    )
}
