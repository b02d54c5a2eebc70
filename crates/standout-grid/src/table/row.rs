//! Body rows.

use serde_json::Value;

use crate::error::TableError;
use crate::renderable::{Cell, CellAdapter, IntoCell};
use crate::style::Style;

/// One body row: its cells, an optional style, and whether a section ends
/// after it.
#[derive(Clone, Debug, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Layered over the table's cycling row styles.
    pub style: Option<Style>,
    /// Draw a separator after this row.
    pub end_section: bool,
}

impl Row {
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoCell,
    {
        Self {
            cells: cells.into_iter().map(IntoCell::into_cell).collect(),
            ..Self::default()
        }
    }

    /// Builds a row from foreign values, failing on the first value the
    /// adapter rejects.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use standout_grid::{JsonAdapter, Row};
    ///
    /// let row = Row::from_values(&[json!("Dec"), json!(375), json!(null)], &JsonAdapter).unwrap();
    /// assert_eq!(row.cells.len(), 3);
    /// assert!(row.cells[2].is_empty());
    /// assert!(Row::from_values(&[json!([1])], &JsonAdapter).is_err());
    /// ```
    pub fn from_values(values: &[Value], adapter: &dyn CellAdapter) -> Result<Self, TableError> {
        let cells = values
            .iter()
            .map(|value| adapter.adapt(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            cells,
            ..Self::default()
        })
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn end_section(mut self, end_section: bool) -> Self {
        self.end_section = end_section;
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
