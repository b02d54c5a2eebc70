//! The capability every cell payload provides.
//!
//! Anything that can say how wide it could be ([`Renderable::measure`]) and
//! produce lines at a given width ([`Renderable::render`]) can sit in a
//! table cell. [`Text`] is the built-in implementation; [`Table`] implements
//! it too, so tables nest.
//!
//! Payloads that are not renderable on their own, such as JSON values, go
//! through a [`CellAdapter`], which either produces a [`Cell`] or rejects the
//! value with [`TableError::NotRenderable`].

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::Value;

use crate::error::TableError;
use crate::measure::Measurement;
use crate::segment::Line;
use crate::style::Style;
use crate::table::Table;
use crate::text::Text;
use crate::types::{Justify, Overflow};

/// Width and layout hints passed down to a renderable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cells available to the content.
    pub max_width: usize,
    /// Justification, unless the content overrides it.
    pub justify: Option<Justify>,
    /// Overflow policy, unless the content overrides it.
    pub overflow: Option<Overflow>,
    pub no_wrap: bool,
    /// Highlight literals in plain strings.
    pub highlight: bool,
    /// Style under the content.
    pub style: Style,
}

impl RenderOptions {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn with_no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Content that can be measured and rendered at a width.
pub trait Renderable: Debug + Send + Sync {
    /// The range of widths this content can be rendered into.
    fn measure(&self, options: &RenderOptions) -> Measurement;

    /// Render into lines no wider than `options.max_width`.
    ///
    /// Lines need not be padded; callers adjust them to the exact width.
    fn render(&self, options: &RenderOptions) -> Vec<Line>;
}

/// A table cell: shared renderable content, or nothing.
#[derive(Clone, Debug, Default)]
pub struct Cell(Option<Arc<dyn Renderable>>);

impl Cell {
    /// The empty cell.
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn new(content: impl Renderable + 'static) -> Self {
        Self(Some(Arc::new(content)))
    }

    pub fn from_shared(content: Arc<dyn Renderable>) -> Self {
        Self(Some(content))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn content(&self) -> Option<&dyn Renderable> {
        self.0.as_deref()
    }

    /// Measures the content; empty cells measure `(0, 0)`.
    pub fn measure(&self, options: &RenderOptions) -> Measurement {
        match self.content() {
            Some(content) => Measurement::get(content, options),
            None => Measurement::default(),
        }
    }

    /// Renders the content; empty cells render one empty line.
    pub fn render(&self, options: &RenderOptions) -> Vec<Line> {
        match self.content() {
            Some(content) => content.render(options),
            None => vec![Line::new()],
        }
    }
}

/// Conversion into a [`Cell`].
///
/// Strings become highlightable [`Text`]; `None` becomes the empty cell.
pub trait IntoCell {
    fn into_cell(self) -> Cell;
}

impl IntoCell for Cell {
    fn into_cell(self) -> Cell {
        self
    }
}

impl IntoCell for &str {
    fn into_cell(self) -> Cell {
        Cell::new(Text::new(self).highlightable(true))
    }
}

impl IntoCell for String {
    fn into_cell(self) -> Cell {
        Cell::new(Text::new(self).highlightable(true))
    }
}

impl IntoCell for &String {
    fn into_cell(self) -> Cell {
        self.as_str().into_cell()
    }
}

impl IntoCell for Text {
    fn into_cell(self) -> Cell {
        Cell::new(self)
    }
}

impl IntoCell for Table {
    fn into_cell(self) -> Cell {
        Cell::new(self)
    }
}

impl IntoCell for Arc<dyn Renderable> {
    fn into_cell(self) -> Cell {
        Cell::from_shared(self)
    }
}

impl<T: IntoCell> IntoCell for Option<T> {
    fn into_cell(self) -> Cell {
        self.map(IntoCell::into_cell).unwrap_or_default()
    }
}

macro_rules! cell_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Cell {
            fn from(value: $ty) -> Self {
                value.into_cell()
            }
        })*
    };
}

cell_from!(&str, String, Text, Table);

/// Turns foreign values into cells.
pub trait CellAdapter {
    fn adapt(&self, value: &Value) -> Result<Cell, TableError>;
}

/// Adapts JSON scalars: strings, numbers and booleans become text, `null`
/// becomes the empty cell. Arrays and objects are rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonAdapter;

impl CellAdapter for JsonAdapter {
    fn adapt(&self, value: &Value) -> Result<Cell, TableError> {
        match value {
            Value::Null => Ok(Cell::empty()),
            Value::Bool(b) => Ok(b.to_string().into_cell()),
            Value::Number(n) => Ok(n.to_string().into_cell()),
            Value::String(s) => Ok(s.as_str().into_cell()),
            Value::Array(_) => Err(TableError::not_renderable("an array")),
            Value::Object(_) => Err(TableError::not_renderable("an object")),
        }
    }
}
