//! Styles attached to runs of text.
//!
//! A [`Style`] is a set of optional attributes. Styles are layered with
//! [`Style::combine`]: `Some` values in the upper style replace the lower
//! ones, `None` values let the lower style show through. This is how a
//! table composes its own style, the column style, the cycling row style,
//! a per-row override and the spans inside a cell.
//!
//! Styles are written in the shorthand used throughout configuration:
//!
//! ```rust
//! use standout_grid::Style;
//!
//! let style: Style = "bold red on white".parse().unwrap();
//! assert_eq!(style.bold, Some(true));
//! assert!(style.bg.is_some());
//!
//! let plain: Style = "".parse().unwrap();
//! assert!(plain.is_empty());
//! ```
//!
//! Recognized words: `bold`/`b`, `dim`/`d`, `italic`/`i`, `underline`/`u`,
//! `blink`, `reverse`/`r`, `hidden`/`conceal`, `strike`/`s`/`strikethrough`,
//! any of them prefixed by `not` to switch it off, `on <color>` for the
//! background and any other word as the foreground color.

mod color;

pub use color::{rgb_to_ansi256, ColorDef};

use std::str::FromStr;

use serde::Deserialize;

use crate::error::StyleError;

/// Optional text attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<ColorDef>,
    /// Background color.
    pub bg: Option<ColorDef>,
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub blink: Option<bool>,
    /// Swap fg/bg colors.
    pub reverse: Option<bool>,
    pub hidden: Option<bool>,
    pub strikethrough: Option<bool>,
}

impl Style {
    /// Creates an empty style (all `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a shorthand style definition.
    pub fn parse(definition: &str) -> Result<Self, StyleError> {
        let mut style = Style::new();
        let mut words = definition.split_whitespace();

        while let Some(word) = words.next() {
            let lower = word.to_lowercase();
            match lower.as_str() {
                "none" => {}
                "on" => {
                    let color = words.next().ok_or(StyleError::MissingBackground)?;
                    style.bg = Some(parse_color(color)?);
                }
                "not" => {
                    let attribute = words.next();
                    let applied = attribute
                        .map(|name| style.set_attribute(&name.to_lowercase(), false))
                        .unwrap_or(false);
                    if !applied {
                        return Err(StyleError::ExpectedAttribute(
                            attribute.map(str::to_string),
                        ));
                    }
                }
                other => {
                    if !style.set_attribute(other, true) {
                        style.fg = Some(parse_color(word)?);
                    }
                }
            }
        }

        Ok(style)
    }

    /// Sets an attribute by name. Returns `false` for unknown names.
    fn set_attribute(&mut self, name: &str, value: bool) -> bool {
        let slot = match name {
            "bold" | "b" => &mut self.bold,
            "dim" | "d" => &mut self.dim,
            "italic" | "i" => &mut self.italic,
            "underline" | "u" => &mut self.underline,
            "blink" => &mut self.blink,
            "reverse" | "r" => &mut self.reverse,
            "hidden" | "conceal" => &mut self.hidden,
            "strike" | "s" | "strikethrough" => &mut self.strikethrough,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    pub fn fg(mut self, color: ColorDef) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: ColorDef) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self == &Style::default()
    }

    /// Layers `other` on top of `self`.
    ///
    /// `Some` values in `other` override, `None` values preserve `self`.
    pub fn combine(&self, other: &Style) -> Style {
        let (under, over) = (self, other);
        macro_rules! layered {
            ($($field:ident),*) => {
                Style {
                    $($field: over.$field.as_ref().or(under.$field.as_ref()).cloned()),*
                }
            };
        }
        layered!(fg, bg, bold, dim, italic, underline, blink, reverse, hidden, strikethrough)
    }

    /// A style carrying only this style's background color.
    pub fn background_style(&self) -> Style {
        Style {
            bg: self.bg.clone(),
            ..Style::default()
        }
    }

    /// The `console` style that draws this style.
    pub fn to_console(&self) -> console::Style {
        let attributes: [(Option<bool>, fn(console::Style) -> console::Style); 8] = [
            (self.bold, console::Style::bold),
            (self.dim, console::Style::dim),
            (self.italic, console::Style::italic),
            (self.underline, console::Style::underlined),
            (self.blink, console::Style::blink),
            (self.reverse, console::Style::reverse),
            (self.hidden, console::Style::hidden),
            (self.strikethrough, console::Style::strikethrough),
        ];

        let mut style = console::Style::new();
        if let Some(fg) = &self.fg {
            style = style.fg(fg.to_console_color());
        }
        if let Some(bg) = &self.bg {
            style = style.bg(bg.to_console_color());
        }
        attributes
            .into_iter()
            .filter(|(enabled, _)| *enabled == Some(true))
            .fold(style, |style, (_, apply)| apply(style))
    }
}

fn parse_color(word: &str) -> Result<ColorDef, StyleError> {
    ColorDef::parse_string(word).map_err(|reason| StyleError::InvalidColor {
        word: word.to_string(),
        reason,
    })
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse(s)
    }
}

impl TryFrom<String> for Style {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Style::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Color;

    #[test]
    fn test_parse_attributes_and_colors() {
        let style = Style::parse("bold italic red on blue").unwrap();
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.italic, Some(true));
        assert_eq!(style.fg, Some(ColorDef::Named(Color::Red)));
        assert_eq!(style.bg, Some(ColorDef::Named(Color::Blue)));
        assert_eq!(style.dim, None);
    }

    #[test]
    fn test_parse_short_names_and_not() {
        let style = Style::parse("b u not i").unwrap();
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.underline, Some(true));
        assert_eq!(style.italic, Some(false));
    }

    #[test]
    fn test_parse_empty_and_none() {
        assert!(Style::parse("").unwrap().is_empty());
        assert!(Style::parse("none").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Style::parse("on"), Err(StyleError::MissingBackground));
        assert!(matches!(
            Style::parse("bold purple"),
            Err(StyleError::InvalidColor { .. })
        ));
        assert_eq!(
            Style::parse("not red"),
            Err(StyleError::ExpectedAttribute(Some("red".into())))
        );
        assert_eq!(Style::parse("not"), Err(StyleError::ExpectedAttribute(None)));
    }

    #[test]
    fn test_combine_override_wins() {
        let base = Style::parse("red on white bold").unwrap();
        let over = Style::parse("blue not bold").unwrap();
        let merged = base.combine(&over);
        assert_eq!(merged.fg, Some(ColorDef::Named(Color::Blue)));
        assert_eq!(merged.bg, Some(ColorDef::Named(Color::White)));
        assert_eq!(merged.bold, Some(false));
    }

    #[test]
    fn test_combine_none_preserves() {
        let base = Style::parse("italic green").unwrap();
        assert_eq!(base.combine(&Style::new()), base);
        assert_eq!(Style::new().combine(&base), base);
    }

    #[test]
    fn test_background_style_keeps_only_bg() {
        let style = Style::parse("bold red on blue").unwrap();
        let bg = style.background_style();
        assert_eq!(bg.bg, Some(ColorDef::Named(Color::Blue)));
        assert_eq!(bg.fg, None);
        assert_eq!(bg.bold, None);
    }

    #[test]
    fn test_to_console_renders_attributes() {
        let style = Style::parse("bold red").unwrap();
        let rendered = style
            .to_console()
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert!(rendered.contains('x'));
        assert!(rendered.starts_with("\x1b["));
        assert_eq!(
            Style::new().to_console().force_styling(true).apply_to("x").to_string(),
            "x"
        );
    }

    #[test]
    fn test_deserialize_from_string() {
        let style: Style = serde_yaml::from_str("\"dim on red\"").unwrap();
        assert_eq!(style.dim, Some(true));
        assert!(serde_yaml::from_str::<Style>("\"on\"").is_err());
    }
}
