//! Inline CSS text: the flat `name: value; name: value;` declaration list.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use core::fmt::Write as _;

/// A single CSS declaration parsed from inline CSS text.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value slice trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: to_ascii_lowercase(property.trim_matches(is_ascii_whitespace)),
            value: value.trim_matches(is_ascii_whitespace).to_owned(),
        }
    }
}

/// Parse inline CSS text into a list of declarations.
///
/// - Splits on semicolons (`;`) into declaration items.
/// - For each item, splits on the first colon (`:`) into property and value.
/// - Trims ASCII whitespace and lowercases the property name.
/// - Skips empty or invalid items (no colon, empty property, or empty value after trimming).
///
/// Duplicates are kept in source order; applying them in order makes the last one win.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let declaration = Declaration::new(raw_prop, raw_value);
        if declaration.property.is_empty() || declaration.value.is_empty() {
            continue;
        }
        out.push(declaration);
    }
    out
}

/// Serialize declarations as `name: value;` items joined by single spaces.
///
/// The output parses back to the same declarations with [`parse_style_attribute`].
pub fn serialize_style_attribute(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for declaration in declarations {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ignored = write!(out, "{}: {};", declaration.property, declaration.value);
    }
    out
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// Lowercase an ASCII identifier without allocating when already lowercase.
fn to_ascii_lowercase(text: &str) -> String {
    if text.chars().any(|character| character.is_ascii_uppercase()) {
        text.to_ascii_lowercase()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_items_at_first_colon() {
        let declarations = parse_style_attribute("Margin: 1px 2px ; ; bogus; width:auto;x:");
        assert_eq!(
            declarations,
            vec![
                Declaration::new("margin", "1px 2px"),
                Declaration::new("width", "auto"),
            ]
        );
    }

    #[test]
    fn serialization_round_trips() {
        let declarations = vec![
            Declaration::new("margin-top", "20px"),
            Declaration::new("flex", "1 1 0px"),
        ];
        let text = serialize_style_attribute(&declarations);
        assert_eq!(text, "margin-top: 20px; flex: 1 1 0px;");
        assert_eq!(parse_style_attribute(&text), declarations);
    }
}
