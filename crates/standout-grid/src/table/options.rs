//! Table-wide settings and their YAML form.
//!
//! [`TableOptions`] is both the builder state of a [`Table`](super::Table)
//! and a configuration document. Every field is optional in YAML; missing
//! fields take the defaults below, unknown fields are rejected.
//!
//! ```yaml
//! box: rounded          # any registered style name, or null for no box
//! show_lines: true
//! padding: [0, 2]       # 1, 2 or 4 values, like CSS
//! header_style: bold magenta
//! row_styles: ["", "dim"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::boxes::{self, BoxStyle};
use crate::error::ConfigError;
use crate::style::Style;
use crate::types::Justify;

/// Space around cell content, in cells for left and right and lines for top
/// and bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "PaddingRaw")]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const ZERO: Padding = Padding::new(0, 0, 0, 0);

    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Left plus right.
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

impl Default for Padding {
    /// One cell either side, no blank lines.
    fn default() -> Self {
        Padding::new(0, 1, 0, 1)
    }
}

impl From<usize> for Padding {
    fn from(all: usize) -> Self {
        Padding::new(all, all, all, all)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Padding::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<(usize, usize, usize, usize)> for Padding {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Padding::new(top, right, bottom, left)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaddingRaw {
    All(usize),
    Sides(Vec<usize>),
}

impl TryFrom<PaddingRaw> for Padding {
    type Error = String;

    fn try_from(raw: PaddingRaw) -> Result<Self, Self::Error> {
        match raw {
            PaddingRaw::All(all) => Ok(all.into()),
            PaddingRaw::Sides(sides) => match sides.as_slice() {
                [all] => Ok((*all).into()),
                [vertical, horizontal] => Ok((*vertical, *horizontal).into()),
                [top, right, bottom, left] => Ok((*top, *right, *bottom, *left).into()),
                other => Err(format!(
                    "Invalid padding: expected 1, 2 or 4 values, got {}",
                    other.len()
                )),
            },
        }
    }
}

/// Settings that apply to the whole table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Grid glyphs; `None` draws no grid at all.
    #[serde(rename = "box")]
    pub box_style: Option<BoxStyle>,
    /// Fall back to ASCII glyphs.
    pub safe_box: bool,
    pub show_header: bool,
    pub show_footer: bool,
    /// Draw the outer frame.
    pub show_edge: bool,
    /// Draw a separator between every body row.
    pub show_lines: bool,
    /// Fill the available width.
    pub expand: bool,
    /// Exact table width; implies `expand`.
    pub width: Option<usize>,
    pub min_width: Option<usize>,
    pub padding: Padding,
    /// Keep padding on the outer sides of edge cells.
    pub pad_edge: bool,
    /// Merge the padding of adjacent cells.
    pub collapse_padding: bool,
    /// Blank lines between body rows.
    pub leading: usize,
    pub title_justify: Justify,
    pub caption_justify: Justify,
    /// Style under every cell.
    pub style: Style,
    pub header_style: Style,
    pub footer_style: Style,
    pub border_style: Style,
    pub title_style: Style,
    pub caption_style: Style,
    /// Styles cycled over body rows.
    pub row_styles: Vec<Style>,
    /// Highlight literals in plain-string cells.
    pub highlight: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            box_style: Some(boxes::HEAVY_HEAD),
            safe_box: false,
            show_header: true,
            show_footer: false,
            show_edge: true,
            show_lines: false,
            expand: false,
            width: None,
            min_width: None,
            padding: Padding::default(),
            pad_edge: true,
            collapse_padding: false,
            leading: 0,
            title_justify: Justify::Center,
            caption_justify: Justify::Center,
            style: Style::default(),
            header_style: Style::new().bold(),
            footer_style: Style::new().bold(),
            border_style: Style::default(),
            title_style: Style::new().italic(),
            caption_style: Style::new().italic().dim(),
            row_styles: Vec::new(),
            highlight: false,
        }
    }
}

impl TableOptions {
    /// Parses options from a YAML document.
    ///
    /// ```rust
    /// use standout_grid::{boxes, TableOptions};
    ///
    /// let options = TableOptions::from_yaml("box: ascii\nexpand: true").unwrap();
    /// assert_eq!(options.box_style, Some(boxes::ASCII));
    /// assert!(options.expand);
    /// assert!(options.show_header);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let options = serde_yaml::from_str(source)?;
        Ok(options)
    }

    /// Reads options from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading table options");
        Self::from_yaml(&source)
    }

    /// Extra width taken by the grid: outer edges and column dividers.
    pub fn extra_width(&self, columns: usize) -> usize {
        match self.box_style {
            Some(_) => {
                let edges = if self.show_edge { 2 } else { 0 };
                edges + columns.saturating_sub(1)
            }
            None => 0,
        }
    }
}
