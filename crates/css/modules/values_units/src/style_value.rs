//! The resolved style datum and its kinds.

use core::fmt;

use crate::chapter_3_identifiers::{EnumType, Keyword, KeywordValue};
use crate::chapter_6_dimensions::LengthUnit;
use crate::chapter_9_colors::Color;

/// One resolved style value.
///
/// Equality is structural: values of different kinds never compare equal,
/// and `Length(1, Em)` differs from `Length(1, Pixel)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    None,
    Auto,
    Integer(i32),
    Enum(KeywordValue),
    /// Aspect ratio as a single `width / height` quotient.
    Ratio(f32),
    /// Percentage on the 0–100 scale.
    Percentage(f32),
    /// Dimensionless number.
    Number(f32),
    Length(f32, LengthUnit),
    Color(Color),
}

/// The kind of a [`StyleValue`], doubling as the acceptor used by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Auto,
    Integer,
    Enum(EnumType),
    Ratio,
    Percentage,
    Number,
    Length,
    Color,
}

impl StyleValue {
    pub const fn px(value: f32) -> Self {
        Self::Length(value, LengthUnit::Pixel)
    }

    pub fn keyword<K: Keyword>(keyword: K) -> Self {
        Self::Enum(KeywordValue::from(keyword))
    }

    pub const fn kind(&self) -> ValueKind {
        match *self {
            Self::None => ValueKind::None,
            Self::Auto => ValueKind::Auto,
            Self::Integer(_) => ValueKind::Integer,
            Self::Enum(keyword) => ValueKind::Enum(keyword.kind()),
            Self::Ratio(_) => ValueKind::Ratio,
            Self::Percentage(_) => ValueKind::Percentage,
            Self::Number(_) => ValueKind::Number,
            Self::Length(..) => ValueKind::Length,
            Self::Color(_) => ValueKind::Color,
        }
    }

    /// Typed keyword, when this is an `Enum` value of `K`'s enumeration.
    pub fn as_keyword<K: Keyword>(&self) -> Option<K> {
        match *self {
            Self::Enum(keyword) => keyword.to_keyword(),
            _ => None,
        }
    }

    /// Scalar payload of `Number`, `Ratio`, `Percentage` and `Integer` values.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Number(value) | Self::Ratio(value) | Self::Percentage(value) => Some(value),
            Self::Integer(value) => Some(value as f32),
            Self::None
            | Self::Auto
            | Self::Enum(_)
            | Self::Length(..)
            | Self::Color(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::None => formatter.write_str("none"),
            Self::Auto => formatter.write_str("auto"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Enum(keyword) => formatter.write_str(keyword.name()),
            Self::Ratio(value) | Self::Number(value) => write!(formatter, "{value}"),
            Self::Percentage(value) => write!(formatter, "{value}%"),
            Self::Length(value, unit) => write!(formatter, "{value}{}", unit.suffix()),
            Self::Color(color) => write!(formatter, "{color}"),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<KeywordValue> for StyleValue {
    fn from(keyword: KeywordValue) -> Self {
        Self::Enum(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter_3_identifiers::{AlignItems, FlexWrap};

    #[test]
    fn different_kinds_never_compare_equal() {
        assert_ne!(StyleValue::Number(1.0), StyleValue::Ratio(1.0));
        assert_ne!(StyleValue::Percentage(50.0), StyleValue::Number(50.0));
        assert_ne!(
            StyleValue::Length(1.0, LengthUnit::Em),
            StyleValue::Length(1.0, LengthUnit::Pixel)
        );
        assert_eq!(StyleValue::px(4.0), StyleValue::Length(4.0, LengthUnit::Pixel));
    }

    #[test]
    fn formats_each_kind() {
        assert_eq!(StyleValue::None.to_string(), "none");
        assert_eq!(StyleValue::Auto.to_string(), "auto");
        assert_eq!(StyleValue::Integer(-3).to_string(), "-3");
        assert_eq!(StyleValue::keyword(FlexWrap::WrapReverse).to_string(), "wrap-reverse");
        assert_eq!(StyleValue::Ratio(1.5).to_string(), "1.5");
        assert_eq!(StyleValue::Percentage(25.0).to_string(), "25%");
        assert_eq!(StyleValue::Length(2.5, LengthUnit::Em).to_string(), "2.5em");
        assert_eq!(StyleValue::px(10.0).to_string(), "10px");
        assert_eq!(StyleValue::Color(Color::rgb(1, 2, 3)).to_string(), "#010203");
    }

    #[test]
    fn keyword_accessor_checks_enumeration() {
        let value = StyleValue::keyword(AlignItems::Baseline);
        assert_eq!(value.as_keyword::<AlignItems>(), Some(AlignItems::Baseline));
        assert_eq!(value.as_keyword::<FlexWrap>(), None);
        assert_eq!(value.kind(), ValueKind::Enum(crate::EnumType::AlignItems));
    }
}
