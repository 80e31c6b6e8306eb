//! CSS Color: hex color notation
//! Spec: <https://www.w3.org/TR/css-color-4/#hex-notation>

use core::fmt;

use crate::ParseError;
use cssparser::{Parser, Token};

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "#{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue
        )?;
        if self.alpha != u8::MAX {
            write!(formatter, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
///
/// Other color syntaxes (names, functional notation) are not style values here.
pub fn parse_hex_color(text: &str) -> Option<Color> {
    let digits = text.trim().strip_prefix('#')?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8)
        || !digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return None;
    }
    let parsed: csscolorparser::Color = text.trim().parse().ok()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Some(Color::rgba(red, green, blue, alpha))
}

/// Parse a hash token as a hex color.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a valid hex color.
pub fn parse_color(input: &mut Parser) -> Result<Color, ParseError> {
    match input.next() {
        Ok(Token::Hash(digits) | Token::IDHash(digits)) => {
            parse_hex_color(&format!("#{}", digits.as_ref())).ok_or(ParseError::UnexpectedToken)
        }
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_short_forms() {
        assert_eq!(parse_hex_color("#abc"), Some(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(
            parse_hex_color("#abcd"),
            Some(Color::rgba(0xaa, 0xbb, 0xcc, 0xdd))
        );
        assert_eq!(
            parse_hex_color("#11223344"),
            Some(Color::rgba(0x11, 0x22, 0x33, 0x44))
        );
    }

    #[test]
    fn rejects_non_hex_forms() {
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#ggg"), None);
    }

    #[test]
    fn formats_alpha_only_when_translucent() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Color::rgba(0, 0, 0, 0x80).to_string(), "#00000080");
    }
}
