//! Colors used to paint the flag.
//!
//! The stripe colors are fixed 24-bit values. Border and message colors can
//! be supplied by the user either as a raw terminal escape sequence or as a
//! `#RRGGBB` hex triplet.

use std::fmt;

use serde::Serialize;

/// Escape sequence that restores the terminal's default foreground color.
pub const RESET: &str = "\x1b[0m";

pub const BLUE: Color = Color::Rgb(91, 206, 250);
pub const PINK: Color = Color::Rgb(255, 105, 180);
pub const WHITE: Color = Color::Rgb(255, 255, 255);

pub const DEFAULT_BORDER_COLOR: Color = Color::Rgb(180, 180, 180);
pub const DEFAULT_MESSAGE_COLOR: Color = PINK;
pub const DATE_TEXT_COLOR: Color = WHITE;

/// A foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// 24-bit color, emitted as `ESC[38;2;R;G;Bm`.
    Rgb(u8, u8, u8),
    /// Escape sequence passed through verbatim.
    Escape(String),
}

impl Color {
    /// Interprets user input as a color.
    ///
    /// `#RRGGBB` becomes [`Color::Rgb`]; anything else is kept as a raw
    /// escape sequence.
    pub fn parse(value: &str) -> Color {
        parse_hex(value).unwrap_or_else(|| Color::Escape(value.to_string()))
    }

    /// The escape sequence that switches the terminal to this color.
    pub fn escape(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
            Color::Escape(sequence) => sequence.clone(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Escape(sequence) => write!(f, "{}", sequence.escape_default()),
        }
    }
}

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_escape() {
        assert_eq!(BLUE.escape(), "\x1b[38;2;91;206;250m");
        assert_eq!(PINK.escape(), "\x1b[38;2;255;105;180m");
        assert_eq!(WHITE.escape(), "\x1b[38;2;255;255;255m");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#B4B4B4"), Color::Rgb(180, 180, 180));
        assert_eq!(Color::parse("#ff69b4"), PINK);
    }

    #[test]
    fn test_parse_escape_passthrough() {
        let color = Color::parse("\x1b[31m");
        assert_eq!(color, Color::Escape("\x1b[31m".to_string()));
        assert_eq!(color.escape(), "\x1b[31m");
    }

    #[test]
    fn test_parse_malformed_hex_is_escape() {
        assert_eq!(Color::parse("#12345"), Color::Escape("#12345".to_string()));
        assert_eq!(Color::parse("#zzzzzz"), Color::Escape("#zzzzzz".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(DEFAULT_BORDER_COLOR.to_string(), "#b4b4b4");
        assert_eq!(Color::Escape("\x1b[1m".to_string()).to_string(), "\\u{1b}[1m");
    }

    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_string(&BLUE).unwrap();
        assert_eq!(json, r#"{"rgb":[91,206,250]}"#);
    }
}
