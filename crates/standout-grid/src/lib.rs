//! # Standout Grid - Terminal Table Layout
//!
//! `standout-grid` lays out tables for fixed-width terminals: it measures
//! cell content, allocates column widths that fit the available width,
//! wraps and aligns every cell, and frames the result with box-drawing
//! glyphs.
//!
//! ## Core Concepts
//!
//! - [`Table`]: columns, rows, title and caption, plus [`TableOptions`]
//! - [`Column`]: header, footer and the layout rules for one column
//! - [`Measurement`]: the `(minimum, maximum)` width range of content
//! - [`BoxStyle`]: glyphs for every structural position of a grid
//! - [`Renderable`]: anything that can be measured and rendered into a cell
//! - [`Line`]: styled output, one terminal line at a time
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_grid::{boxes, Column, Table};
//!
//! let mut table = Table::new()
//!     .title("Star Wars Movies")
//!     .box_style(boxes::ROUNDED)
//!     .column(Column::named("Released"))
//!     .column(Column::named("Title"))
//!     .column(Column::named("Box Office").right());
//! table.add_row(["Dec 20, 2019", "The Rise of Skywalker", "$952,110,690"]).unwrap();
//! table.add_row(["May 25, 2018", "Solo", "$393,151,347"]).unwrap();
//!
//! for line in table.render(40) {
//!     assert!(line.cell_len() <= 40);
//! }
//! print!("{}", table.to_plain(40));
//! ```
//!
//! ## Width Allocation
//!
//! Each column is measured over its shown cells. When the natural widths
//! fit they are used as is; otherwise the width is split by column ratio,
//! narrowing the widest columns first, and wrapping columns give way before
//! columns that cannot wrap. With `expand`, spare width is shared by column
//! ratios. See [`table::allocate`].
//!
//! ## Configuration
//!
//! [`TableOptions`] can be loaded from YAML:
//!
//! ```rust
//! use standout_grid::{Table, TableOptions};
//!
//! let options = TableOptions::from_yaml("box: ascii\nshow_lines: true").unwrap();
//! let table = Table::with_options(options);
//! assert!(table.options().show_lines);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (width resolution at `debug`, per-row
//! work at `trace`, impossible width constraints at `warn`) and installs no
//! subscriber of its own.

pub mod boxes;
pub mod error;
pub mod measure;
pub mod renderable;
pub mod segment;
pub mod style;
pub mod table;
pub mod text;
mod types;

pub use boxes::BoxStyle;
pub use error::{ConfigError, StyleError, TableError};
pub use measure::Measurement;
pub use renderable::{Cell, CellAdapter, IntoCell, JsonAdapter, RenderOptions, Renderable};
pub use segment::{Line, Segment};
pub use style::{ColorDef, Style};
pub use table::{
    render_cell, CellFormat, Column, Padding, Row, Table, TableLines, TableOptions,
};
pub use text::Text;
pub use types::{Justify, Overflow, VerticalAlign};
