//! Tables: columns, rows and the layout that turns them into lines.
//!
//! A [`Table`] is configured with columns and filled with rows. Rendering
//! happens in three steps:
//!
//! 1. Every column is measured over its header, body and footer cells.
//! 2. [`allocate`] turns the measurements into column widths that fit the
//!    available width.
//! 3. [`TableLines`] walks the grid row by row, rendering cells into blocks
//!    of equal height and framing them with the box glyphs.
//!
//! ```rust
//! use standout_grid::{boxes, Column, Table};
//!
//! let mut table = Table::new()
//!     .box_style(boxes::ASCII)
//!     .column(Column::named("Name"))
//!     .column(Column::named("Qty").right());
//! table.add_row(["apples", "3"]).unwrap();
//! table.add_row(["kiwis", "12"]).unwrap();
//!
//! assert_eq!(
//!     table.to_plain(80),
//!     "+--------------+\n\
//!      | Name   | Qty |\n\
//!      |--------+-----|\n\
//!      | apples |   3 |\n\
//!      | kiwis  |  12 |\n\
//!      +--------------+\n"
//! );
//! ```

mod cell;
mod column;
mod options;
mod render;
mod resolve;
mod row;

pub use cell::{render_cell, CellBlock, CellFormat};
pub use column::Column;
pub use options::{Padding, TableOptions};
pub use render::TableLines;
pub use resolve::{allocate, largest_remainder, ratio_distribute, ColumnConstraint, ResolvedWidths};
pub use row::Row;

use serde_json::Value;

use crate::boxes::BoxStyle;
use crate::error::TableError;
use crate::measure::Measurement;
use crate::renderable::{Cell, CellAdapter, IntoCell, RenderOptions, Renderable};
use crate::segment::Line;
use crate::style::Style;
use crate::text::Text;
use crate::types::Justify;

/// A table of columns and rows.
///
/// Build it with the consuming setters, add rows with [`Table::add_row`],
/// then render at a width with [`Table::render`] or one of the string
/// helpers.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    title: Option<Text>,
    caption: Option<Text>,
    options: TableOptions,
}

/// Widths and glyphs for one render.
#[derive(Clone, Debug)]
pub(crate) struct Layout {
    /// Column widths, padding included.
    pub widths: Vec<usize>,
    /// Total width of every emitted line.
    pub table_width: usize,
    /// The box after header and safe-box substitution.
    pub box_style: Option<BoxStyle>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with one column per header.
    pub fn with_headers<I, C>(headers: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoCell,
    {
        headers
            .into_iter()
            .fold(Self::new(), |table, header| table.column(Column::named(header)))
    }

    /// A table using `options`, for example loaded from YAML.
    pub fn with_options(options: TableOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.options
    }

    // Builders

    pub fn title(mut self, title: impl Into<Text>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<Text>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Adds a column.
    pub fn column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    /// Grid glyphs, or `None` for no grid.
    pub fn box_style(mut self, box_style: impl Into<Option<BoxStyle>>) -> Self {
        self.options.box_style = box_style.into();
        self
    }

    pub fn safe_box(mut self, safe_box: bool) -> Self {
        self.options.safe_box = safe_box;
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.options.show_header = show;
        self
    }

    pub fn show_footer(mut self, show: bool) -> Self {
        self.options.show_footer = show;
        self
    }

    pub fn show_edge(mut self, show: bool) -> Self {
        self.options.show_edge = show;
        self
    }

    pub fn show_lines(mut self, show: bool) -> Self {
        self.options.show_lines = show;
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.options.expand = expand;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.options.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.options.min_width = Some(width);
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.options.padding = padding.into();
        self
    }

    pub fn pad_edge(mut self, pad_edge: bool) -> Self {
        self.options.pad_edge = pad_edge;
        self
    }

    pub fn collapse_padding(mut self, collapse: bool) -> Self {
        self.options.collapse_padding = collapse;
        self
    }

    pub fn leading(mut self, leading: usize) -> Self {
        self.options.leading = leading;
        self
    }

    pub fn title_justify(mut self, justify: Justify) -> Self {
        self.options.title_justify = justify;
        self
    }

    pub fn caption_justify(mut self, justify: Justify) -> Self {
        self.options.caption_justify = justify;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.options.style = style;
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.options.header_style = style;
        self
    }

    pub fn footer_style(mut self, style: Style) -> Self {
        self.options.footer_style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.options.border_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.options.title_style = style;
        self
    }

    pub fn caption_style(mut self, style: Style) -> Self {
        self.options.caption_style = style;
        self
    }

    pub fn row_styles(mut self, styles: Vec<Style>) -> Self {
        self.options.row_styles = styles;
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.options.highlight = highlight;
        self
    }

    // Columns and rows

    /// Appends a column and assigns its index.
    pub fn add_column(&mut self, mut column: Column) -> &mut Self {
        column.index = self.columns.len();
        self.columns.push(column);
        self
    }

    /// Appends a row of cells.
    ///
    /// Rows shorter than the column count are padded with empty cells.
    /// More cells than columns is an error and leaves the table unchanged.
    pub fn add_row<I, C>(&mut self, cells: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = C>,
        C: IntoCell,
    {
        self.push_row(Row::new(cells))
    }

    /// Appends a prepared row, with the same checks as [`Table::add_row`].
    pub fn push_row(&mut self, mut row: Row) -> Result<(), TableError> {
        let columns = self.columns.len();
        if row.cells.len() > columns {
            return Err(TableError::TooManyCells {
                cells: row.cells.len(),
                columns,
            });
        }
        row.cells.resize_with(columns, Cell::empty);
        tracing::trace!(row = self.rows.len(), "adding row");
        self.rows.push(row);
        Ok(())
    }

    /// Appends a row of foreign values converted by `adapter`.
    pub fn add_row_values(
        &mut self,
        values: &[Value],
        adapter: &dyn CellAdapter,
    ) -> Result<(), TableError> {
        self.push_row(Row::from_values(values, adapter)?)
    }

    /// Ends a section after the last row. Does nothing on an empty table.
    pub fn add_section(&mut self) {
        if let Some(row) = self.rows.last_mut() {
            row.end_section = true;
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The cycling row style for body row `index`, with the row's own
    /// style on top.
    pub fn get_row_style(&self, index: usize) -> Style {
        let styles = &self.options.row_styles;
        let mut style = if styles.is_empty() {
            Style::default()
        } else {
            styles[index % styles.len()].clone()
        };
        if let Some(own) = self.rows.get(index).and_then(|row| row.style.as_ref()) {
            style = style.combine(own);
        }
        style
    }

    // Layout

    /// Width of the grid itself: edges and column dividers.
    pub fn extra_width(&self) -> usize {
        self.options.extra_width(self.columns.len())
    }

    /// Padding of one cell, after edge and collapse rules.
    pub(crate) fn cell_padding(&self, column: usize, first_row: bool, last_row: bool) -> Padding {
        let options = &self.options;
        let Padding {
            mut top,
            mut right,
            mut bottom,
            mut left,
        } = options.padding;
        let first_column = column == 0;
        let last_column = column + 1 == self.columns.len();

        if options.collapse_padding {
            if !first_column {
                left = left.saturating_sub(right);
            }
            if !last_row {
                bottom = top.saturating_sub(bottom);
            }
        }
        if !options.pad_edge {
            if first_column {
                left = 0;
            }
            if last_column {
                right = 0;
            }
            if first_row {
                top = 0;
            }
            if last_row {
                bottom = 0;
            }
        }
        Padding::new(top, right, bottom, left)
    }

    fn padding_width(&self, column: usize) -> usize {
        self.cell_padding(column, false, false).horizontal()
    }

    /// Header, body and footer cells of a column, as far as they are shown.
    fn column_cells<'a>(&'a self, column: &'a Column) -> impl Iterator<Item = &'a Cell> + 'a {
        let index = column.index;
        let header = self.options.show_header.then_some(&column.header);
        let footer = self.options.show_footer.then_some(&column.footer);
        header
            .into_iter()
            .chain(self.rows.iter().filter_map(move |row| row.cells.get(index)))
            .chain(footer)
    }

    /// Width range of a column, padding included, within `budget`.
    fn measure_column(&self, column: &Column, budget: usize) -> Measurement {
        let pad = self.padding_width(column.index);
        if let Some(width) = column.width {
            return Measurement::exact(width + pad).with_maximum(budget);
        }

        let options = RenderOptions::new(budget.saturating_sub(pad)).with_no_wrap(column.no_wrap);
        let measured = self
            .column_cells(column)
            .map(|cell| cell.measure(&options).widen(pad))
            .reduce(Measurement::union)
            .unwrap_or_else(|| Measurement::new(1, budget));

        measured.with_maximum(budget).clamp(
            column.min_width.map(|width| width + pad),
            column.max_width.map(|width| width + pad),
        )
    }

    /// The range of widths the table can be rendered at within
    /// `max_width`, grid included.
    ///
    /// A table with no columns, or no room, measures `(0, 0)`. An explicit
    /// width measures exactly that width, capped at `max_width`.
    pub fn measure(&self, max_width: usize) -> Measurement {
        if self.columns.is_empty() || max_width == 0 {
            return Measurement::default();
        }

        let measured = match self.options.width {
            Some(width) => Measurement::exact(width.min(max_width)),
            None => {
                let extra = self.extra_width();
                let budget = max_width.saturating_sub(extra);
                let columns: Measurement = self
                    .columns
                    .iter()
                    .map(|column| self.measure_column(column, budget))
                    .sum();
                columns.widen(extra)
            }
        };

        let measured = match self.options.min_width {
            Some(min_width) => measured.with_minimum(min_width),
            None => measured,
        };
        measured.with_maximum(max_width)
    }

    pub(crate) fn layout(&self, max_width: usize) -> Layout {
        let options = &self.options;
        let (render_width, expand) = match options.width {
            Some(width) => (width.min(max_width), true),
            None => (max_width, options.expand),
        };
        let extra = self.extra_width();
        let budget = render_width.saturating_sub(extra);

        let constraints: Vec<ColumnConstraint> = self
            .columns
            .iter()
            .map(|column| {
                let constraint = match column.width {
                    Some(width) => ColumnConstraint::fixed(width + self.padding_width(column.index)),
                    None => {
                        let measured = self.measure_column(column, budget);
                        let constraint = ColumnConstraint::new(measured.minimum, measured.maximum);
                        if column.no_wrap {
                            constraint.no_wrap()
                        } else {
                            constraint
                        }
                    }
                };
                match column.ratio {
                    Some(ratio) => constraint.with_ratio(ratio),
                    None => constraint,
                }
            })
            .collect();

        let mut widths = allocate(&constraints, budget, expand).widths;

        if let Some(min_width) = options.min_width {
            let target = min_width.min(render_width).saturating_sub(extra);
            let total: usize = widths.iter().sum();
            let flexible: Vec<usize> = (0..widths.len())
                .filter(|&index| constraints[index].fixed.is_none())
                .collect();
            if total < target && !flexible.is_empty() {
                let weights: Vec<usize> = flexible.iter().map(|&index| widths[index]).collect();
                let growth = largest_remainder(target - total, &weights);
                for (&index, extra) in flexible.iter().zip(growth) {
                    widths[index] += extra;
                }
            }
        }

        let box_style = options
            .box_style
            .as_ref()
            .map(|style| style.substitute(options.show_header, options.safe_box));
        let table_width = widths.iter().sum::<usize>() + extra;

        tracing::debug!(
            columns = widths.len(),
            rows = self.rows.len(),
            table_width,
            ?widths,
            "laid out table"
        );

        Layout {
            widths,
            table_width,
            box_style,
        }
    }

    // Output

    /// Renders into lines no wider than `max_width`.
    ///
    /// Lines are produced lazily, one grid row at a time. Every line is
    /// exactly as wide as the table.
    pub fn render(&self, max_width: usize) -> TableLines<'_> {
        if self.columns.is_empty() {
            return TableLines::empty(self);
        }
        TableLines::new(self, self.layout(max_width))
    }

    /// Renders to plain text, one `\n`-terminated line per table line.
    ///
    /// A table with no columns renders as a single newline.
    pub fn to_plain(&self, max_width: usize) -> String {
        self.collect_lines(max_width, Line::plain)
    }

    /// Renders with ANSI escapes, regardless of terminal detection.
    pub fn to_ansi(&self, max_width: usize) -> String {
        self.collect_lines(max_width, |line| line.to_ansi())
    }

    fn collect_lines(&self, max_width: usize, format: impl Fn(&Line) -> String) -> String {
        let mut out = String::new();
        for line in self.render(max_width) {
            out.push_str(&format(&line));
            out.push('\n');
        }
        if out.is_empty() {
            out.push('\n');
        }
        out
    }

    pub(crate) fn title_text(&self) -> Option<&Text> {
        self.title.as_ref()
    }

    pub(crate) fn caption_text(&self) -> Option<&Text> {
        self.caption.as_ref()
    }
}

impl Renderable for Table {
    fn measure(&self, options: &RenderOptions) -> Measurement {
        Table::measure(self, options.max_width)
    }

    fn render(&self, options: &RenderOptions) -> Vec<Line> {
        Table::render(self, options.max_width).collect()
    }
}
