//! Error types for table construction, styles and configuration.
//!
//! Rendering itself never fails: width exhaustion degrades to narrow (or
//! zero-width) columns. Errors are raised only where caller input is
//! validated, before any table state is touched.

use std::io;
use std::path::PathBuf;

/// Errors raised while adding content to a [`Table`](crate::Table).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    /// A row carried more cells than the table has columns.
    #[error("Row has {cells} cells but the table only has {columns} columns")]
    TooManyCells { cells: usize, columns: usize },

    /// A payload could not be turned into renderable content.
    #[error("Unable to render {0}; a string, number, boolean or renderable is required")]
    NotRenderable(String),
}

impl TableError {
    /// Create a non-renderable content error.
    pub fn not_renderable(what: impl Into<String>) -> Self {
        Self::NotRenderable(what.into())
    }
}

/// Errors raised while parsing a style definition such as `"bold red on white"`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StyleError {
    /// A word in the definition was neither an attribute nor a color.
    #[error("Invalid color '{word}' in style definition: {reason}")]
    InvalidColor { word: String, reason: String },

    /// `on` was the last word, with no background color after it.
    #[error("Style definition ends with 'on'; a background color is required")]
    MissingBackground,

    /// `not` was not followed by an attribute name.
    #[error("Expected an attribute after 'not', found {0:?}")]
    ExpectedAttribute(Option<String>),
}

/// Errors raised while loading [`TableOptions`](crate::TableOptions).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read table config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration document was malformed.
    #[error("Invalid table config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
