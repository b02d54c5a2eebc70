//! Column configuration.

use crate::renderable::{Cell, IntoCell};
use crate::style::Style;
use crate::types::{Justify, Overflow, VerticalAlign};

/// One column of a [`Table`](super::Table).
///
/// Holds the header and footer cells and everything that shapes how the
/// column's cells are laid out. Body cells live in the table's rows; the
/// width a column is given is worked out again on every render and is
/// never stored here.
///
/// ```rust
/// use standout_grid::{Column, Justify, Overflow};
///
/// let column = Column::named("Cost")
///     .justify(Justify::Right)
///     .overflow(Overflow::Fold)
///     .max_width(12);
/// assert_eq!(column.max_width, Some(12));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Column {
    pub header: Cell,
    pub footer: Cell,
    /// Layered over the table's header style.
    pub header_style: Style,
    /// Layered over the table's footer style.
    pub footer_style: Style,
    /// Style of body cells.
    pub style: Style,
    pub justify: Justify,
    pub vertical: VerticalAlign,
    pub overflow: Overflow,
    /// Fixed content width; overrides measurement and allocation.
    pub width: Option<usize>,
    pub min_width: Option<usize>,
    pub max_width: Option<usize>,
    /// Share of spare width when the table expands.
    pub ratio: Option<usize>,
    pub no_wrap: bool,
    /// Highlight literals in plain-string cells; inherits the table
    /// setting when unset.
    pub highlight: Option<bool>,
    pub(crate) index: usize,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    /// A column with a header.
    pub fn named(header: impl IntoCell) -> Self {
        Self::new().header(header)
    }

    /// Position in the table, assigned when the column is added.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Columns with a ratio share spare width by weight.
    pub fn is_flexible(&self) -> bool {
        self.ratio.is_some()
    }

    pub fn header(mut self, header: impl IntoCell) -> Self {
        self.header = header.into_cell();
        self
    }

    pub fn footer(mut self, footer: impl IntoCell) -> Self {
        self.footer = footer.into_cell();
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn footer_style(mut self, style: Style) -> Self {
        self.footer_style = style;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Shorthand for `justify(Justify::Right)`.
    pub fn right(self) -> Self {
        self.justify(Justify::Right)
    }

    /// Shorthand for `justify(Justify::Center)`.
    pub fn center(self) -> Self {
        self.justify(Justify::Center)
    }

    pub fn vertical(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn ratio(mut self, ratio: usize) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

impl From<&str> for Column {
    fn from(header: &str) -> Self {
        Column::named(header)
    }
}

impl From<String> for Column {
    fn from(header: String) -> Self {
        Column::named(header)
    }
}
