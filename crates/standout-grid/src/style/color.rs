//! Color values used by [`Style`](super::Style).
//!
//! A color word is one of:
//!
//! - one of the eight ANSI names (`red`, `cyan`, ...), `grey` being white
//! - `bright_` plus an ANSI name, drawn from palette slots 8-15
//! - a palette index, bare (`208`) or wrapped (`color(208)`)
//! - a hex triplet, `#ff6b35` or the short `#f63`
//!
//! ```rust
//! use standout_grid::style::ColorDef;
//!
//! assert_eq!(ColorDef::parse_string("color(208)"), Ok(ColorDef::Color256(208)));
//! assert_eq!(ColorDef::parse_string("bright_red"), Ok(ColorDef::Color256(9)));
//! assert!(ColorDef::parse_string("#12").is_err());
//! ```

use console::Color;

/// Base ANSI colors in palette order; `bright_` variants sit 8 slots on.
const ANSI: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// A color as written in a style definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    Named(Color),
    /// Slot in the xterm 256-color palette.
    Color256(u8),
    /// Downsampled to the 256-color cube when drawn.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses one color word.
    pub fn parse_string(word: &str) -> Result<Self, String> {
        let word = word.trim();
        let lower = word.to_ascii_lowercase();

        if let Some(digits) = lower.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(|| {
                format!("Invalid hex color: {} (expected #rgb or #rrggbb)", word)
            });
        }

        let index = lower
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
            .map(str::trim)
            .or_else(|| lower.bytes().all(|b| b.is_ascii_digit()).then_some(lower.as_str()))
            .filter(|digits| !digits.is_empty());
        if let Some(digits) = index {
            return digits
                .parse::<u8>()
                .map(ColorDef::Color256)
                .map_err(|_| format!("Palette index {} is outside 0-255", digits));
        }

        let (bright, base) = match lower.strip_prefix("bright_") {
            Some(base) => (true, base),
            None => (false, lower.as_str()),
        };
        let base = if base == "grey" || base == "gray" { "white" } else { base };
        let slot = ANSI
            .iter()
            .position(|(name, _)| *name == base)
            .ok_or_else(|| format!("Unknown color name: {}", word))?;

        Ok(if bright {
            ColorDef::Color256(slot as u8 + 8)
        } else {
            ColorDef::Named(ANSI[slot].1)
        })
    }

    /// The `console` color to draw with.
    pub fn to_console_color(&self) -> Color {
        match *self {
            ColorDef::Named(color) => color,
            ColorDef::Color256(index) => Color::Color256(index),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}

/// `rgb` or `rrggbb`, without the `#`.
fn parse_hex(digits: &str) -> Option<ColorDef> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match digits.len() {
        3 => Some(ColorDef::Rgb(
            channel(0..1)? * 0x11,
            channel(1..2)? * 0x11,
            channel(2..3)? * 0x11,
        )),
        6 => Some(ColorDef::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

/// Nearest xterm 256-color slot: the grey ramp for neutral colors, the
/// 6x6x6 cube otherwise.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let level = |channel: u8| (u16::from(channel) * 5 / 255) as u8;
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            grey => 232 + ((u16::from(grey) - 8) * 24 / 247) as u8,
        };
    }
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(word: &str) -> ColorDef {
        ColorDef::parse_string(word).unwrap()
    }

    #[test]
    fn test_ansi_names_ignore_case() {
        assert_eq!(parse("Magenta"), ColorDef::Named(Color::Magenta));
        assert_eq!(parse(" black "), ColorDef::Named(Color::Black));
        assert_eq!(parse("gray"), parse("white"));
    }

    #[test]
    fn test_bright_names_use_upper_palette() {
        assert_eq!(parse("bright_black"), ColorDef::Color256(8));
        assert_eq!(parse("BRIGHT_WHITE"), ColorDef::Color256(15));
        assert_eq!(parse("bright_grey"), ColorDef::Color256(15));
        assert!(ColorDef::parse_string("bright_teal").is_err());
    }

    #[test]
    fn test_palette_indexes() {
        assert_eq!(parse("color( 17 )"), ColorDef::Color256(17));
        assert_eq!(parse("0"), ColorDef::Color256(0));
        let err = ColorDef::parse_string("256").unwrap_err();
        assert!(err.contains("outside 0-255"));
        assert!(ColorDef::parse_string("color()").is_err());
    }

    #[test]
    fn test_hex_triplets() {
        assert_eq!(parse("#1E90FF"), ColorDef::Rgb(30, 144, 255));
        assert_eq!(parse("#0a0"), ColorDef::Rgb(0, 170, 0));
        assert!(ColorDef::parse_string("#abcd").is_err());
        assert!(ColorDef::parse_string("#zz0000").is_err());
        assert!(ColorDef::parse_string("#").is_err());
    }

    #[test]
    fn test_unknown_words() {
        let err = ColorDef::parse_string("chartreuse").unwrap_err();
        assert_eq!(err, "Unknown color name: chartreuse");
    }

    #[test]
    fn test_downsampling() {
        assert_eq!(rgb_to_ansi256((3, 3, 3)), 16);
        assert_eq!(rgb_to_ansi256((250, 250, 250)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 243);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        assert_eq!(ColorDef::Rgb(0, 255, 0).to_console_color(), Color::Color256(46));
        assert_eq!(ColorDef::Named(Color::Red).to_console_color(), Color::Red);
    }
}
