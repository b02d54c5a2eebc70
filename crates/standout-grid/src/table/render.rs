//! The line producer behind [`Table::render`].
//!
//! Output is produced in stages: title, top edge, one grid row at a time,
//! bottom edge, caption. Each stage fills a small buffer that the iterator
//! drains before moving on, so only one grid row is ever held in memory.

use std::collections::VecDeque;

use once_cell::sync::Lazy;

use crate::boxes::{Band, BoxStyle, RowLevel};
use crate::renderable::{Cell, RenderOptions, Renderable};
use crate::segment::{Line, Segment};
use crate::style::Style;
use crate::text::Text;
use crate::types::{Justify, Overflow, VerticalAlign};

use super::cell::{CellBlock, CellFormat};
use super::{Layout, Table};

static EMPTY_CELL: Lazy<Cell> = Lazy::new(Cell::empty);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Title,
    Top,
    Rows(usize),
    Bottom,
    Caption,
    Done,
}

/// What a grid row holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GridRow {
    Header,
    Body(usize),
    Footer,
}

/// Lazily rendered table lines. See [`Table::render`].
#[derive(Debug)]
pub struct TableLines<'a> {
    table: &'a Table,
    layout: Layout,
    stage: Stage,
    pending: VecDeque<Line>,
}

impl<'a> TableLines<'a> {
    pub(crate) fn new(table: &'a Table, layout: Layout) -> Self {
        Self {
            table,
            layout,
            stage: Stage::Title,
            pending: VecDeque::new(),
        }
    }

    /// Yields nothing.
    pub(crate) fn empty(table: &'a Table) -> Self {
        let layout = Layout {
            widths: Vec::new(),
            table_width: 0,
            box_style: None,
        };
        Self {
            stage: Stage::Done,
            ..Self::new(table, layout)
        }
    }

    /// Width of every line this iterator yields.
    pub fn width(&self) -> usize {
        self.layout.table_width
    }

    /// Column widths in use, padding included.
    pub fn column_widths(&self) -> &[usize] {
        &self.layout.widths
    }

    fn grid_rows(&self) -> usize {
        let options = &self.table.options;
        usize::from(options.show_header) + self.table.rows.len() + usize::from(options.show_footer)
    }

    fn grid_row(&self, position: usize) -> GridRow {
        let show_header = usize::from(self.table.options.show_header);
        match position.checked_sub(show_header) {
            None => GridRow::Header,
            Some(index) if index < self.table.rows.len() => GridRow::Body(index),
            Some(_) => GridRow::Footer,
        }
    }

    fn border(&self, glyphs: String) -> Line {
        let mut line = Line::new();
        line.push(Segment::new(glyphs, self.table.options.border_style.clone()));
        line
    }

    /// Title or caption lines, wrapped and justified to the table width.
    fn annotation(&self, text: Option<&Text>, style: &Style, justify: Justify) -> Vec<Line> {
        let Some(text) = text else {
            return Vec::new();
        };
        let width = self.layout.table_width;
        let options = RenderOptions::new(width)
            .with_justify(justify)
            .with_overflow(Overflow::Fold)
            .with_style(style.clone());
        text.render(&options)
            .into_iter()
            .map(|line| line.adjust(width, style))
            .collect()
    }

    fn cell_format(&self, row: GridRow, column: usize) -> (&'a Cell, CellFormat) {
        let table = self.table;
        let options = &table.options;
        let column = &table.columns[column];

        let (cell, cell_style, vertical, row_style) = match row {
            GridRow::Header => (
                &column.header,
                options.header_style.combine(&column.header_style),
                VerticalAlign::Bottom,
                Style::default(),
            ),
            GridRow::Body(index) => (
                table.rows[index]
                    .cells
                    .get(column.index)
                    .unwrap_or(&*EMPTY_CELL),
                column.style.clone(),
                column.vertical,
                table.get_row_style(index),
            ),
            GridRow::Footer => (
                &column.footer,
                options.footer_style.combine(&column.footer_style),
                VerticalAlign::Top,
                Style::default(),
            ),
        };

        let format = CellFormat {
            justify: column.justify,
            overflow: column.overflow,
            no_wrap: column.no_wrap,
            highlight: column.highlight.unwrap_or(options.highlight),
            vertical,
            style: options.style.combine(&cell_style).combine(&row_style),
        };
        (cell, format)
    }

    fn render_row(&self, position: usize) -> Vec<Line> {
        let table = self.table;
        let options = &table.options;
        let widths = &self.layout.widths;
        let row = self.grid_row(position);
        let first = position == 0;
        let last = position + 1 == self.grid_rows();
        let (row_style, end_section) = match row {
            GridRow::Body(index) => (table.get_row_style(index), table.rows[index].end_section),
            _ => (Style::default(), false),
        };

        let blocks: Vec<(CellBlock, CellFormat)> = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let (cell, format) = self.cell_format(row, index);
                let padding = table.cell_padding(index, first, last);
                (CellBlock::render(cell, width, padding, &format), format)
            })
            .collect();
        let height = blocks.iter().map(|(block, _)| block.height()).max().unwrap_or(0);
        tracing::trace!(position, ?row, height, "rendering grid row");

        let mut cells: Vec<std::vec::IntoIter<Line>> = blocks
            .into_iter()
            .map(|(block, format)| block.align(format.vertical, height, &format.style).into_iter())
            .collect();

        let mut out = Vec::with_capacity(height + 1);
        let Some(box_style) = &self.layout.box_style else {
            for _ in 0..height {
                let mut line = Line::new();
                for cell in cells.iter_mut() {
                    line.extend(cell.next().unwrap_or_default());
                }
                out.push(line);
            }
            return out;
        };

        let border_style = &options.border_style;
        let edge = options.show_edge;

        if last && options.show_footer {
            out.push(self.border(box_style.row(widths, RowLevel::Foot, edge)));
        }

        let band = if first {
            Band::Head
        } else if last {
            Band::Foot
        } else {
            Band::Mid
        };
        let (left, vertical, right) = box_style.band(band);
        let divider_style = if vertical.is_whitespace() {
            row_style.background_style().combine(border_style)
        } else {
            border_style.clone()
        };

        for _ in 0..height {
            let mut line = Line::new();
            if edge {
                line.push(Segment::new(left.to_string(), border_style.clone()));
            }
            for (index, cell) in cells.iter_mut().enumerate() {
                if index > 0 {
                    line.push(Segment::new(vertical.to_string(), divider_style.clone()));
                }
                line.extend(cell.next().unwrap_or_default());
            }
            if edge {
                line.push(Segment::new(right.to_string(), border_style.clone()));
            }
            out.push(line);
        }

        out.extend(self.separators(box_style, position, row, end_section));
        out
    }

    /// Lines drawn after a grid row: the header separator, blank leading
    /// lines and section dividers. Nothing follows the last row, and the
    /// row before the footer gets the footer separator instead.
    fn separators(
        &self,
        box_style: &BoxStyle,
        position: usize,
        row: GridRow,
        end_section: bool,
    ) -> Vec<Line> {
        let options = &self.table.options;
        let widths = &self.layout.widths;
        let edge = options.show_edge;

        if row == GridRow::Header {
            return vec![self.border(box_style.row(widths, RowLevel::Head, edge))];
        }

        let rows = self.grid_rows();
        let last = position + 1 == rows;
        let before_footer = options.show_footer && position + 2 >= rows;
        if last || before_footer {
            return Vec::new();
        }

        let mut lines: Vec<Line> = (0..options.leading)
            .map(|_| self.border(box_style.row(widths, RowLevel::Mid, edge)))
            .collect();
        if options.show_lines || end_section {
            lines.push(self.border(box_style.row(widths, RowLevel::Row, edge)));
        }
        lines
    }
}

impl Iterator for TableLines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let table = self.table;
        let options = &table.options;
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(line);
            }
            match self.stage {
                Stage::Title => {
                    let lines = self.annotation(
                        table.title_text(),
                        &options.title_style,
                        options.title_justify,
                    );
                    self.pending.extend(lines);
                    self.stage = Stage::Top;
                }
                Stage::Top => {
                    if let (Some(box_style), true) = (&self.layout.box_style, options.show_edge) {
                        let line = self.border(box_style.top(&self.layout.widths));
                        self.pending.push_back(line);
                    }
                    self.stage = Stage::Rows(0);
                }
                Stage::Rows(position) if position < self.grid_rows() => {
                    let lines = self.render_row(position);
                    self.pending.extend(lines);
                    self.stage = Stage::Rows(position + 1);
                }
                Stage::Rows(_) => self.stage = Stage::Bottom,
                Stage::Bottom => {
                    if let (Some(box_style), true) = (&self.layout.box_style, options.show_edge) {
                        let line = self.border(box_style.bottom(&self.layout.widths));
                        self.pending.push_back(line);
                    }
                    self.stage = Stage::Caption;
                }
                Stage::Caption => {
                    let lines = self.annotation(
                        table.caption_text(),
                        &options.caption_style,
                        options.caption_justify,
                    );
                    self.pending.extend(lines);
                    self.stage = Stage::Done;
                }
                Stage::Done => return None,
            }
        }
    }
}
