//! Automatic highlighting of literal values in plain strings.

use console::Color;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Text;
use crate::style::{ColorDef, Style};

const PATTERN: &str = r#"(?P<str>'[^']*'|"[^"]*")|(?P<true>\b(?:True|true)\b)|(?P<false>\b(?:False|false)\b)|(?P<none>\b(?:None|null)\b)|(?P<number>(?:\B-)?\b\d+(?:\.\d+)?(?:[eE][-+]?\d+)?\b)"#;

static LITERALS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(PATTERN).ok());

fn style_for(group: &str) -> Style {
    match group {
        "str" => Style::new().fg(ColorDef::Named(Color::Green)),
        "true" => Style::new().fg(ColorDef::Color256(10)).italic(),
        "false" => Style::new().fg(ColorDef::Color256(9)).italic(),
        "none" => Style::new().fg(ColorDef::Named(Color::Magenta)).italic(),
        _ => Style::new().fg(ColorDef::Named(Color::Cyan)).bold(),
    }
}

/// Adds spans for numbers, quoted strings, booleans and null values.
pub fn highlight(text: &mut Text) {
    let Some(regex) = LITERALS.as_ref() else {
        return;
    };
    let mut found = Vec::new();
    for captures in regex.captures_iter(text.plain()) {
        for group in ["str", "true", "false", "none", "number"] {
            if let Some(m) = captures.name(group) {
                found.push((m.start(), m.end(), style_for(group)));
                break;
            }
        }
    }
    for (start, end, style) in found {
        text.stylize_bytes(style, start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(s: &str) -> Vec<(String, Style)> {
        let mut text = Text::new(s);
        highlight(&mut text);
        text.spans()
            .iter()
            .map(|span| (s[span.start..span.end].to_string(), span.style.clone()))
            .collect()
    }

    #[test]
    fn test_numbers_are_bold_cyan() {
        let spans = highlighted("cost 275 and 1.5");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].0, "275");
        assert_eq!(spans[0].1.bold, Some(true));
        assert_eq!(spans[0].1.fg, Some(ColorDef::Named(Color::Cyan)));
        assert_eq!(spans[1].0, "1.5");
    }

    #[test]
    fn test_quoted_strings_and_keywords() {
        let spans = highlighted("'FOO' true None");
        let matched: Vec<&str> = spans.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(matched, vec!["'FOO'", "true", "None"]);
        assert_eq!(spans[1].1.italic, Some(true));
    }

    #[test]
    fn test_digits_inside_words_are_left_alone() {
        assert!(highlighted("abc123").is_empty());
        assert!(highlighted("plain words").is_empty());
    }
}
