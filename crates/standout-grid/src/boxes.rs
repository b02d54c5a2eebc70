//! Box-drawing styles for table grids.
//!
//! A [`BoxStyle`] names the glyph used at every structural position of a
//! grid. Each style is eight bands of four glyphs (`left`, `fill`,
//! `divider`, `right`):
//!
//! | Band       | Used for                                        |
//! |------------|-------------------------------------------------|
//! | `top`      | top edge                                        |
//! | `head`     | verticals of the first grid row                 |
//! | `head_row` | separator under the header                      |
//! | `mid`      | verticals of body rows, blank "leading" lines   |
//! | `row`      | separator between rows and sections             |
//! | `foot_row` | separator above the footer                      |
//! | `foot`     | verticals of the last grid row                  |
//! | `bottom`   | bottom edge                                     |
//!
//! The registered styles are process-wide constants. Customize one by
//! copying it and changing fields; the copy keeps the name of the style it
//! came from, which is what [`BoxStyle::substitute`] looks up.
//!
//! ```rust
//! use standout_grid::boxes::{self, BoxStyle};
//!
//! let mut tagged = boxes::ASCII;
//! tagged.top_left = 'a';
//! assert_eq!(tagged.top(&[3]), "a---+");
//! assert_eq!(boxes::ASCII.top(&[3]), "+---+");
//! assert_eq!(BoxStyle::by_name("rounded"), Some(&boxes::ROUNDED));
//! ```

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{de, Deserialize, Deserializer};

/// Which separator band [`BoxStyle::row`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowLevel {
    /// Under the header.
    Head,
    /// Between body rows or sections.
    Row,
    /// A blank line with body verticals.
    Mid,
    /// Above the footer.
    Foot,
}

/// Which vertical glyphs a grid row uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Head,
    Mid,
    Foot,
}

/// The glyphs for one framed grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    name: &'static str,

    pub top_left: char,
    pub top: char,
    pub top_divider: char,
    pub top_right: char,

    pub head_left: char,
    pub head_vertical: char,
    pub head_right: char,

    pub head_row_left: char,
    pub head_row_horizontal: char,
    pub head_row_cross: char,
    pub head_row_right: char,

    pub mid_left: char,
    pub mid_vertical: char,
    pub mid_right: char,

    pub row_left: char,
    pub row_horizontal: char,
    pub row_cross: char,
    pub row_right: char,

    pub foot_row_left: char,
    pub foot_row_horizontal: char,
    pub foot_row_cross: char,
    pub foot_row_right: char,

    pub foot_left: char,
    pub foot_vertical: char,
    pub foot_right: char,

    pub bottom_left: char,
    pub bottom: char,
    pub bottom_divider: char,
    pub bottom_right: char,

    /// Only ASCII glyphs.
    pub ascii: bool,
}

impl BoxStyle {
    /// Builds a style from its eight bands, top to bottom.
    ///
    /// The fill glyph of the `head`, `mid` and `foot` bands is unused.
    pub const fn new(name: &'static str, rows: [[char; 4]; 8], ascii: bool) -> Self {
        let [top, head, head_row, mid, row, foot_row, foot, bottom] = rows;
        Self {
            name,
            top_left: top[0],
            top: top[1],
            top_divider: top[2],
            top_right: top[3],
            head_left: head[0],
            head_vertical: head[2],
            head_right: head[3],
            head_row_left: head_row[0],
            head_row_horizontal: head_row[1],
            head_row_cross: head_row[2],
            head_row_right: head_row[3],
            mid_left: mid[0],
            mid_vertical: mid[2],
            mid_right: mid[3],
            row_left: row[0],
            row_horizontal: row[1],
            row_cross: row[2],
            row_right: row[3],
            foot_row_left: foot_row[0],
            foot_row_horizontal: foot_row[1],
            foot_row_cross: foot_row[2],
            foot_row_right: foot_row[3],
            foot_left: foot[0],
            foot_vertical: foot[2],
            foot_right: foot[3],
            bottom_left: bottom[0],
            bottom: bottom[1],
            bottom_divider: bottom[2],
            bottom_right: bottom[3],
            ascii,
        }
    }

    /// The registered name this style was built or copied from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a registered style by name (case-insensitive, `-` or `_`).
    pub fn by_name(name: &str) -> Option<&'static BoxStyle> {
        let key = name.trim().to_lowercase().replace('-', "_");
        REGISTRY.get(key.as_str()).copied()
    }

    /// Names of all registered styles, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ALL.iter().map(|style| style.name)
    }

    /// All registered styles, in declaration order.
    pub fn all() -> &'static [&'static BoxStyle] {
        ALL
    }

    /// Adapts the style to how a table is shown.
    ///
    /// With `safe`, styles using line-drawing glyphs fall back to ASCII:
    /// heavy and double headers to [`ASCII_DOUBLE_HEAD`], the rest to
    /// [`ASCII`]. Without a header, styles with a distinct header
    /// separator become their plain-headed counterpart so no header divider
    /// is drawn over missing header content. Styles that are their own
    /// counterpart are returned unchanged, customizations included.
    ///
    /// # Panics
    ///
    /// Panics when `show_header` is false and the style's name is not
    /// registered: every shipped style must have a header-less form.
    pub fn substitute(&self, show_header: bool, safe: bool) -> BoxStyle {
        let mut style = self.clone();

        if safe && !style.ascii {
            style = if HEAVY_OR_DOUBLE_HEAD.contains(&style.name) {
                ASCII_DOUBLE_HEAD
            } else {
                ASCII
            };
        }

        if !show_header {
            let plain = match HEADERLESS.get(style.name) {
                Some(plain) => *plain,
                None => panic!("box style '{}' has no header-less form", style.name),
            };
            if plain != style.name {
                style = match BoxStyle::by_name(plain) {
                    Some(registered) => registered.clone(),
                    None => panic!("box style '{}' is not registered", plain),
                };
            }
        }

        style
    }

    /// `(left, vertical, right)` glyphs for a band of content rows.
    pub fn band(&self, band: Band) -> (char, char, char) {
        match band {
            Band::Head => (self.head_left, self.head_vertical, self.head_right),
            Band::Mid => (self.mid_left, self.mid_vertical, self.mid_right),
            Band::Foot => (self.foot_left, self.foot_vertical, self.foot_right),
        }
    }

    /// The top edge for columns of the given widths.
    pub fn top(&self, widths: &[usize]) -> String {
        join(
            widths,
            Some(self.top_left),
            self.top,
            self.top_divider,
            Some(self.top_right),
        )
    }

    /// A separator line, with or without the outer edges.
    pub fn row(&self, widths: &[usize], level: RowLevel, edge: bool) -> String {
        let (left, fill, cross, right) = match level {
            RowLevel::Head => (
                self.head_row_left,
                self.head_row_horizontal,
                self.head_row_cross,
                self.head_row_right,
            ),
            RowLevel::Row => (
                self.row_left,
                self.row_horizontal,
                self.row_cross,
                self.row_right,
            ),
            RowLevel::Mid => (self.mid_left, ' ', self.mid_vertical, self.mid_right),
            RowLevel::Foot => (
                self.foot_row_left,
                self.foot_row_horizontal,
                self.foot_row_cross,
                self.foot_row_right,
            ),
        };
        let (left, right) = if edge {
            (Some(left), Some(right))
        } else {
            (None, None)
        };
        join(widths, left, fill, cross, right)
    }

    /// The bottom edge for columns of the given widths.
    pub fn bottom(&self, widths: &[usize]) -> String {
        join(
            widths,
            Some(self.bottom_left),
            self.bottom,
            self.bottom_divider,
            Some(self.bottom_right),
        )
    }
}

fn join(
    widths: &[usize],
    left: Option<char>,
    fill: char,
    divider: char,
    right: Option<char>,
) -> String {
    let mut line = String::new();
    line.extend(left);
    for (index, &width) in widths.iter().enumerate() {
        if index > 0 {
            line.push(divider);
        }
        line.extend(std::iter::repeat(fill).take(width));
    }
    line.extend(right);
    line
}

impl fmt::Display for BoxStyle {
    /// Draws a small sample grid: two columns, header, two rows, footer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = [3, 3];
        let (hl, hv, hr) = self.band(Band::Head);
        let (ml, mv, mr) = self.band(Band::Mid);
        let (fl, fv, fr) = self.band(Band::Foot);
        writeln!(f, "{}", self.top(&widths))?;
        writeln!(f, "{hl}   {hv}   {hr}")?;
        writeln!(f, "{}", self.row(&widths, RowLevel::Head, true))?;
        writeln!(f, "{ml}   {mv}   {mr}")?;
        writeln!(f, "{}", self.row(&widths, RowLevel::Row, true))?;
        writeln!(f, "{ml}   {mv}   {mr}")?;
        writeln!(f, "{}", self.row(&widths, RowLevel::Foot, true))?;
        writeln!(f, "{fl}   {fv}   {fr}")?;
        write!(f, "{}", self.bottom(&widths))
    }
}

impl TryFrom<String> for BoxStyle {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        BoxStyle::by_name(&name)
            .cloned()
            .ok_or_else(|| format!("Unknown box style: {}", name))
    }
}

/// Styles deserialize from their registered name.
impl<'de> Deserialize<'de> for BoxStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        BoxStyle::try_from(name).map_err(de::Error::custom)
    }
}

pub const ASCII: BoxStyle = BoxStyle::new(
    "ascii",
    [
        ['+', '-', '-', '+'],
        ['|', ' ', '|', '|'],
        ['|', '-', '+', '|'],
        ['|', ' ', '|', '|'],
        ['|', '-', '+', '|'],
        ['|', '-', '+', '|'],
        ['|', ' ', '|', '|'],
        ['+', '-', '-', '+'],
    ],
    true,
);

pub const ASCII2: BoxStyle = BoxStyle::new(
    "ascii2",
    [
        ['+', '-', '+', '+'],
        ['|', ' ', '|', '|'],
        ['+', '-', '+', '+'],
        ['|', ' ', '|', '|'],
        ['+', '-', '+', '+'],
        ['+', '-', '+', '+'],
        ['|', ' ', '|', '|'],
        ['+', '-', '+', '+'],
    ],
    true,
);

pub const ASCII_DOUBLE_HEAD: BoxStyle = BoxStyle::new(
    "ascii_double_head",
    [
        ['+', '-', '+', '+'],
        ['|', ' ', '|', '|'],
        ['+', '=', '+', '+'],
        ['|', ' ', '|', '|'],
        ['+', '-', '+', '+'],
        ['+', '-', '+', '+'],
        ['|', ' ', '|', '|'],
        ['+', '-', '+', '+'],
    ],
    true,
);

pub const SQUARE: BoxStyle = BoxStyle::new(
    "square",
    [
        ['┌', '─', '┬', '┐'],
        ['│', ' ', '│', '│'],
        ['├', '─', '┼', '┤'],
        ['│', ' ', '│', '│'],
        ['├', '─', '┼', '┤'],
        ['├', '─', '┼', '┤'],
        ['│', ' ', '│', '│'],
        ['└', '─', '┴', '┘'],
    ],
    false,
);

pub const SQUARE_DOUBLE_HEAD: BoxStyle = BoxStyle::new(
    "square_double_head",
    [
        ['┌', '─', '┬', '┐'],
        ['│', ' ', '│', '│'],
        ['╞', '═', '╪', '╡'],
        ['│', ' ', '│', '│'],
        ['├', '─', '┼', '┤'],
        ['├', '─', '┼', '┤'],
        ['│', ' ', '│', '│'],
        ['└', '─', '┴', '┘'],
    ],
    false,
);

pub const MINIMAL: BoxStyle = BoxStyle::new(
    "minimal",
    [
        [' ', ' ', '╷', ' '],
        [' ', ' ', '│', ' '],
        ['╶', '─', '┼', '╴'],
        [' ', ' ', '│', ' '],
        ['╶', '─', '┼', '╴'],
        ['╶', '─', '┼', '╴'],
        [' ', ' ', '│', ' '],
        [' ', ' ', '╵', ' '],
    ],
    false,
);

pub const MINIMAL_HEAVY_HEAD: BoxStyle = BoxStyle::new(
    "minimal_heavy_head",
    [
        [' ', ' ', '╷', ' '],
        [' ', ' ', '│', ' '],
        ['╺', '━', '┿', '╸'],
        [' ', ' ', '│', ' '],
        ['╶', '─', '┼', '╴'],
        ['╶', '─', '┼', '╴'],
        [' ', ' ', '│', ' '],
        [' ', ' ', '╵', ' '],
    ],
    false,
);

pub const MINIMAL_DOUBLE_HEAD: BoxStyle = BoxStyle::new(
    "minimal_double_head",
    [
        [' ', ' ', '╷', ' '],
        [' ', ' ', '│', ' '],
        [' ', '═', '╪', ' '],
        [' ', ' ', '│', ' '],
        [' ', '─', '┼', ' '],
        [' ', '─', '┼', ' '],
        [' ', ' ', '│', ' '],
        [' ', ' ', '╵', ' '],
    ],
    false,
);

pub const SIMPLE: BoxStyle = BoxStyle::new(
    "simple",
    [
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '─', '─', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '─', '─', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
    ],
    false,
);

pub const SIMPLE_HEAD: BoxStyle = BoxStyle::new(
    "simple_head",
    [
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '─', '─', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
    ],
    false,
);

pub const SIMPLE_HEAVY: BoxStyle = BoxStyle::new(
    "simple_heavy",
    [
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '━', '━', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '━', '━', ' '],
        [' ', ' ', ' ', ' '],
        [' ', ' ', ' ', ' '],
    ],
    false,
);

pub const HORIZONTALS: BoxStyle = BoxStyle::new(
    "horizontals",
    [
        [' ', '─', '─', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '─', '─', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '─', '─', ' '],
        [' ', '─', '─', ' '],
        [' ', ' ', ' ', ' '],
        [' ', '─', '─', ' '],
    ],
    false,
);

pub const ROUNDED: BoxStyle = BoxStyle::new(
    "rounded",
    [
        ['╭', '─', '┬', '╮'],
        ['│', ' ', '│', '│'],
        ['├', '─', '┼', '┤'],
        ['│', ' ', '│', '│'],
        ['├', '─', '┼', '┤'],
        ['├', '─', '┼', '┤'],
        ['│', ' ', '│', '│'],
        ['╰', '─', '┴', '╯'],
    ],
    false,
);

pub const HEAVY: BoxStyle = BoxStyle::new(
    "heavy",
    [
        ['┏', '━', '┳', '┓'],
        ['┃', ' ', '┃', '┃'],
        ['┣', '━', '╋', '┫'],
        ['┃', ' ', '┃', '┃'],
        ['┣', '━', '╋', '┫'],
        ['┣', '━', '╋', '┫'],
        ['┃', ' ', '┃', '┃'],
        ['┗', '━', '┻', '┛'],
    ],
    false,
);

pub const HEAVY_EDGE: BoxStyle = BoxStyle::new(
    "heavy_edge",
    [
        ['┏', '━', '┯', '┓'],
        ['┃', ' ', '│', '┃'],
        ['┠', '─', '┼', '┨'],
        ['┃', ' ', '│', '┃'],
        ['┠', '─', '┼', '┨'],
        ['┠', '─', '┼', '┨'],
        ['┃', ' ', '│', '┃'],
        ['┗', '━', '┷', '┛'],
    ],
    false,
);

pub const HEAVY_HEAD: BoxStyle = BoxStyle::new(
    "heavy_head",
    [
        ['┏', '━', '┳', '┓'],
        ['┃', ' ', '┃', '┃'],
        ['┡', '━', '╇', '┩'],
        ['│', ' ', '│', '│'],
        ['├', '─', '┼', '┤'],
        ['├', '─', '┼', '┤'],
        ['│', ' ', '│', '│'],
        ['└', '─', '┴', '┘'],
    ],
    false,
);

pub const DOUBLE: BoxStyle = BoxStyle::new(
    "double",
    [
        ['╔', '═', '╦', '╗'],
        ['║', ' ', '║', '║'],
        ['╠', '═', '╬', '╣'],
        ['║', ' ', '║', '║'],
        ['╠', '═', '╬', '╣'],
        ['╠', '═', '╬', '╣'],
        ['║', ' ', '║', '║'],
        ['╚', '═', '╩', '╝'],
    ],
    false,
);

pub const DOUBLE_EDGE: BoxStyle = BoxStyle::new(
    "double_edge",
    [
        ['╔', '═', '╤', '╗'],
        ['║', ' ', '│', '║'],
        ['╟', '─', '┼', '╢'],
        ['║', ' ', '│', '║'],
        ['╟', '─', '┼', '╢'],
        ['╟', '─', '┼', '╢'],
        ['║', ' ', '│', '║'],
        ['╚', '═', '╧', '╝'],
    ],
    false,
);

pub const MARKDOWN: BoxStyle = BoxStyle::new(
    "markdown",
    [
        [' ', ' ', ' ', ' '],
        ['|', ' ', '|', '|'],
        ['|', '-', '|', '|'],
        ['|', ' ', '|', '|'],
        ['|', '-', '|', '|'],
        ['|', '-', '|', '|'],
        ['|', ' ', '|', '|'],
        [' ', ' ', ' ', ' '],
    ],
    true,
);

static ALL: &[&BoxStyle] = &[
    &ASCII,
    &ASCII2,
    &ASCII_DOUBLE_HEAD,
    &SQUARE,
    &SQUARE_DOUBLE_HEAD,
    &MINIMAL,
    &MINIMAL_HEAVY_HEAD,
    &MINIMAL_DOUBLE_HEAD,
    &SIMPLE,
    &SIMPLE_HEAD,
    &SIMPLE_HEAVY,
    &HORIZONTALS,
    &ROUNDED,
    &HEAVY,
    &HEAVY_EDGE,
    &HEAVY_HEAD,
    &DOUBLE,
    &DOUBLE_EDGE,
    &MARKDOWN,
];

static REGISTRY: Lazy<HashMap<&'static str, &'static BoxStyle>> =
    Lazy::new(|| ALL.iter().map(|style| (style.name, *style)).collect());

/// Styles whose ASCII fallback keeps a distinct header separator.
const HEAVY_OR_DOUBLE_HEAD: &[&str] = &[
    "heavy",
    "heavy_edge",
    "heavy_head",
    "double",
    "double_edge",
    "square_double_head",
    "minimal_heavy_head",
    "minimal_double_head",
    "simple_heavy",
];

/// Header-capable style name to the style drawn when the header is hidden.
static HEADERLESS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ascii", "ascii"),
        ("ascii2", "ascii2"),
        ("ascii_double_head", "ascii2"),
        ("square", "square"),
        ("square_double_head", "square"),
        ("minimal", "minimal"),
        ("minimal_heavy_head", "minimal"),
        ("minimal_double_head", "minimal"),
        ("simple", "simple"),
        ("simple_head", "simple_head"),
        ("simple_heavy", "simple_heavy"),
        ("horizontals", "horizontals"),
        ("rounded", "rounded"),
        ("heavy", "heavy"),
        ("heavy_edge", "heavy_edge"),
        ("heavy_head", "square"),
        ("double", "double"),
        ("double_edge", "double_edge"),
        ("markdown", "markdown"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_bottom() {
        assert_eq!(SQUARE.top(&[3, 3]), "┌───┬───┐");
        assert_eq!(SQUARE.bottom(&[3, 3]), "└───┴───┘");
        assert_eq!(HEAVY_HEAD.top(&[1]), "┏━┓");
    }

    #[test]
    fn test_row_levels() {
        assert_eq!(HEAVY_HEAD.row(&[2, 1], RowLevel::Head, true), "┡━━╇━┩");
        assert_eq!(HEAVY_HEAD.row(&[2, 1], RowLevel::Row, true), "├──┼─┤");
        assert_eq!(HEAVY_HEAD.row(&[2, 1], RowLevel::Mid, true), "│  │ │");
        assert_eq!(HEAVY_HEAD.row(&[2, 1], RowLevel::Foot, true), "├──┼─┤");
        assert_eq!(HEAVY_HEAD.row(&[2, 1], RowLevel::Row, false), "──┼─");
    }

    #[test]
    fn test_zero_width_columns() {
        assert_eq!(SQUARE.top(&[0, 0]), "┌┬┐");
        assert_eq!(SQUARE.top(&[]), "┌┐");
    }

    #[test]
    fn test_bands() {
        assert_eq!(HEAVY_HEAD.band(Band::Head), ('┃', '┃', '┃'));
        assert_eq!(HEAVY_HEAD.band(Band::Mid), ('│', '│', '│'));
        assert_eq!(MINIMAL.band(Band::Foot), (' ', '│', ' '));
    }

    #[test]
    fn test_every_registered_style_has_headerless_form() {
        for style in BoxStyle::all() {
            let plain = style.substitute(false, false);
            assert!(BoxStyle::by_name(plain.name()).is_some());
            assert_eq!(
                plain.band(Band::Head),
                plain.band(Band::Mid),
                "{} keeps distinct header verticals",
                style.name()
            );
        }
    }

    #[test]
    fn test_headerless_substitutions() {
        assert_eq!(HEAVY_HEAD.substitute(false, false), SQUARE);
        assert_eq!(SQUARE_DOUBLE_HEAD.substitute(false, false), SQUARE);
        assert_eq!(MINIMAL_DOUBLE_HEAD.substitute(false, false), MINIMAL);
        assert_eq!(MINIMAL_HEAVY_HEAD.substitute(false, false), MINIMAL);
        assert_eq!(ASCII_DOUBLE_HEAD.substitute(false, false), ASCII2);
        assert_eq!(ROUNDED.substitute(false, false), ROUNDED);
    }

    #[test]
    fn test_with_header_is_unchanged() {
        assert_eq!(HEAVY_HEAD.substitute(true, false), HEAVY_HEAD);
    }

    #[test]
    fn test_safe_falls_back_to_ascii() {
        assert_eq!(ROUNDED.substitute(true, true), ASCII);
        assert_eq!(HEAVY_HEAD.substitute(true, true), ASCII_DOUBLE_HEAD);
        assert_eq!(HEAVY_HEAD.substitute(false, true), ASCII2);
        assert_eq!(MARKDOWN.substitute(true, true), MARKDOWN);
    }

    #[test]
    fn test_customized_copy_survives_substitution() {
        let mut tagged = ASCII;
        tagged.top_left = 'a';
        let substituted = tagged.substitute(false, false);
        assert_eq!(substituted.top_left, 'a');
        assert_eq!(ASCII.top_left, '+');
    }

    #[test]
    #[should_panic(expected = "no header-less form")]
    fn test_unregistered_style_panics_without_header() {
        let custom = BoxStyle::new("custom", [['*'; 4]; 8], true);
        custom.substitute(false, false);
    }

    #[test]
    fn test_by_name_normalizes() {
        assert_eq!(BoxStyle::by_name("HEAVY-HEAD"), Some(&HEAVY_HEAD));
        assert!(BoxStyle::by_name("nope").is_none());
        assert_eq!(BoxStyle::names().count(), 19);
    }

    #[test]
    fn test_deserialize_by_name() {
        let style: BoxStyle = serde_yaml::from_str("rounded").unwrap();
        assert_eq!(style, ROUNDED);
        assert!(serde_yaml::from_str::<BoxStyle>("wobbly").is_err());
    }

    #[test]
    fn test_deserialize_from_borrowed_source() {
        #[derive(Deserialize)]
        struct Holder {
            frame: Option<BoxStyle>,
        }

        let source = String::from("frame: heavy_head");
        let holder: Holder = serde_yaml::from_str(&source).unwrap();
        drop(source);
        assert_eq!(holder.frame, Some(HEAVY_HEAD));

        let err = serde_yaml::from_str::<Holder>("frame: wobbly").err().unwrap();
        assert!(err.to_string().contains("Unknown box style: wobbly"));
    }

    #[test]
    fn test_display_sample() {
        let sample = SQUARE.to_string();
        assert!(sample.starts_with("┌───┬───┐\n│   │   │\n├───┼───┤"));
        assert!(sample.ends_with("└───┴───┘"));
    }
}
