//! Alignment and overflow policies shared by text and columns.

use serde::{Deserialize, Serialize};

/// Horizontal placement of text within its width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on both sides; an odd cell goes on the right.
    Center,
    /// Pad on the left.
    Right,
    /// Stretch the gaps between words to fill the width.
    /// The last line of each paragraph stays left-justified.
    Full,
}

/// What happens to content wider than its column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Wrap, splitting words that are longer than a line.
    /// Example at width 4: "abcdefgh" → "abcd" / "efgh"
    Fold,
    /// Hard cut without any marker.
    /// Example at width 4: "abcdefgh" → "abcd"
    Crop,
    /// Cut and end with "…", which takes one cell.
    /// Example at width 4: "abcdefgh" → "abc…"
    #[default]
    Ellipsis,
    /// Leave the content as is, even if it overruns.
    Ignore,
}

/// Vertical placement of a cell within a taller row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Blank lines go after the content.
    #[default]
    Top,
    /// Blank lines are split; an odd one goes after.
    Middle,
    /// Blank lines go before the content.
    Bottom,
}
