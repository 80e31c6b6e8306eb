//! Conversion of raw caller input into [`StyleValue`]s.
//!
//! Parsing is total: every failure is reported as `None`, never as a panic
//! or an error the caller must propagate.

use crate::chapter_3_identifiers::{Keyword, KeywordValue, parse_keyword};
use crate::chapter_4_numbers::{parse_integer, parse_number, parse_ratio, ratio_from_number};
use crate::chapter_5_percentages::parse_percentage;
use crate::chapter_6_dimensions::{LengthUnit, parse_length};
use crate::chapter_9_colors::{Color, parse_color};
use crate::style_value::{StyleValue, ValueKind};
use crate::ParseError;
use cssparser::{Parser, ParserInput};

/// One slot of a pattern: the kinds it accepts, tried in order.
pub type Slot = &'static [ValueKind];

/// A fixed-arity input shape; its length is the number of arguments.
pub type Pattern = &'static [Slot];

/// Raw input handed to a property before validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValue<'input> {
    /// No value; a write made only of these removes the property.
    Unspecified,
    Str(&'input str),
    Int(i32),
    Float(f32),
    Keyword(KeywordValue),
    Value(StyleValue),
    Color(Color),
}

impl RawValue<'_> {
    pub fn keyword<K: Keyword>(keyword: K) -> Self {
        Self::Keyword(KeywordValue::from(keyword))
    }

    /// Whether this input carries no value at all.
    pub fn is_unspecified(&self) -> bool {
        match *self {
            Self::Unspecified => true,
            Self::Str(text) => text.trim().is_empty(),
            Self::Int(_) | Self::Float(_) | Self::Keyword(_) | Self::Value(_) | Self::Color(_) => {
                false
            }
        }
    }
}

impl<'input> From<&'input str> for RawValue<'input> {
    fn from(text: &'input str) -> Self {
        Self::Str(text)
    }
}

impl From<i32> for RawValue<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<StyleValue> for RawValue<'_> {
    fn from(value: StyleValue) -> Self {
        Self::Value(value)
    }
}

impl From<Color> for RawValue<'_> {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<KeywordValue> for RawValue<'_> {
    fn from(keyword: KeywordValue) -> Self {
        Self::Keyword(keyword)
    }
}

/// Convert `raw` into a value of `kind`, or `None` when it does not fit.
///
/// Lengths, percentages and ratios must be non-negative; numbers must be finite.
pub fn parse_value(raw: RawValue<'_>, kind: ValueKind) -> Option<StyleValue> {
    match raw {
        RawValue::Unspecified => None,
        RawValue::Str(text) => parse_text(text.trim(), kind),
        RawValue::Int(value) => from_integer(value, kind),
        RawValue::Float(value) => from_float(value, kind),
        RawValue::Keyword(keyword) => {
            (kind == ValueKind::Enum(keyword.kind())).then_some(StyleValue::Enum(keyword))
        }
        RawValue::Value(value) => (value.kind() == kind && in_range(&value)).then_some(value),
        RawValue::Color(color) => (kind == ValueKind::Color).then_some(StyleValue::Color(color)),
    }
}

/// Try each kind a slot accepts and keep the first that parses.
pub fn parse_with_slot(raw: RawValue<'_>, slot: &[ValueKind]) -> Option<StyleValue> {
    slot.iter().find_map(|kind| parse_value(raw, *kind))
}

/// Match an argument list against ordered patterns; the first full match wins.
///
/// A pattern matches when its arity equals the argument count and every
/// argument parses under the corresponding slot.
pub fn match_patterns(patterns: &[Pattern], arguments: &[RawValue<'_>]) -> Option<Vec<StyleValue>> {
    patterns
        .iter()
        .filter(|pattern| pattern.len() == arguments.len())
        .find_map(|pattern| {
            pattern
                .iter()
                .zip(arguments)
                .map(|(slot, raw)| parse_with_slot(*raw, slot))
                .collect::<Option<Vec<_>>>()
        })
}

/// Sign and finiteness rules for prebuilt values.
fn in_range(value: &StyleValue) -> bool {
    match *value {
        StyleValue::Ratio(scalar) | StyleValue::Percentage(scalar) | StyleValue::Length(scalar, _) => {
            scalar.is_finite() && scalar >= 0.0
        }
        StyleValue::Number(scalar) => scalar.is_finite(),
        StyleValue::None
        | StyleValue::Auto
        | StyleValue::Integer(_)
        | StyleValue::Enum(_)
        | StyleValue::Color(_) => true,
    }
}

fn from_integer(value: i32, kind: ValueKind) -> Option<StyleValue> {
    match kind {
        ValueKind::Integer => Some(StyleValue::Integer(value)),
        ValueKind::Ratio => (value >= 0).then(|| StyleValue::Ratio(value as f32)),
        ValueKind::Percentage => (value >= 0).then(|| StyleValue::Percentage(value as f32)),
        ValueKind::Number => Some(StyleValue::Number(value as f32)),
        ValueKind::Length => (value >= 0).then(|| StyleValue::px(value as f32)),
        ValueKind::None | ValueKind::Auto | ValueKind::Enum(_) | ValueKind::Color => None,
    }
}

fn from_float(value: f32, kind: ValueKind) -> Option<StyleValue> {
    if !value.is_finite() {
        return None;
    }
    match kind {
        ValueKind::Ratio => ratio_from_number(value).map(StyleValue::Ratio),
        ValueKind::Percentage => (value >= 0.0).then_some(StyleValue::Percentage(value)),
        ValueKind::Number => Some(StyleValue::Number(value)),
        ValueKind::Length => (value >= 0.0).then(|| StyleValue::Length(value, LengthUnit::Pixel)),
        ValueKind::None
        | ValueKind::Auto
        | ValueKind::Integer
        | ValueKind::Enum(_)
        | ValueKind::Color => None,
    }
}

fn parse_text(text: &str, kind: ValueKind) -> Option<StyleValue> {
    if text.is_empty() {
        return None;
    }
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value = parse_token(&mut parser, kind).ok()?;
    parser.expect_exhausted().ok()?;
    Some(value)
}

fn parse_token(parser: &mut Parser, kind: ValueKind) -> Result<StyleValue, ParseError> {
    match kind {
        ValueKind::None => parser
            .expect_ident_matching("none")
            .map(|()| StyleValue::None)
            .map_err(|_| ParseError::UnexpectedToken),
        ValueKind::Auto => parser
            .expect_ident_matching("auto")
            .map(|()| StyleValue::Auto)
            .map_err(|_| ParseError::UnexpectedToken),
        ValueKind::Integer => parse_integer(parser).map(StyleValue::Integer),
        ValueKind::Enum(enum_type) => parse_keyword(parser, enum_type).map(StyleValue::Enum),
        ValueKind::Ratio => parse_ratio(parser).map(StyleValue::Ratio),
        ValueKind::Percentage => parse_percentage(parser).map(StyleValue::Percentage),
        ValueKind::Number => parse_number(parser).map(StyleValue::Number),
        ValueKind::Length => {
            parse_length(parser).map(|(value, unit)| StyleValue::Length(value, unit))
        }
        ValueKind::Color => parse_color(parser).map(StyleValue::Color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter_3_identifiers::{AlignContent, EnumType, FlexDirection};

    const LENGTH_PERCENTAGE_AUTO: Slot = &[ValueKind::Length, ValueKind::Percentage, ValueKind::Auto];

    #[test]
    fn float_against_length_is_unit_less() {
        assert_eq!(
            parse_value(RawValue::Float(3.5), ValueKind::Length),
            Some(StyleValue::Length(3.5, LengthUnit::Pixel))
        );
        assert_eq!(
            parse_value(RawValue::Float(3.5), ValueKind::Percentage),
            Some(StyleValue::Percentage(3.5))
        );
        assert_eq!(parse_value(RawValue::Float(f32::NAN), ValueKind::Number), None);
        assert_eq!(parse_value(RawValue::Float(-1.0), ValueKind::Length), None);
        assert_eq!(parse_value(RawValue::Float(-1.0), ValueKind::Percentage), None);
        assert_eq!(parse_value(RawValue::Str("-1%"), ValueKind::Percentage), None);
        assert_eq!(parse_value(RawValue::Float(1.0), ValueKind::Integer), None);
    }

    #[test]
    fn integers_follow_sign_rules() {
        assert_eq!(
            parse_value(RawValue::Int(-2), ValueKind::Integer),
            Some(StyleValue::Integer(-2))
        );
        assert_eq!(parse_value(RawValue::Int(-2), ValueKind::Ratio), None);
        assert_eq!(parse_value(RawValue::Int(-2), ValueKind::Percentage), None);
        assert_eq!(parse_value(RawValue::Int(-2), ValueKind::Length), None);
    }

    #[test]
    fn strings_are_trimmed_and_fully_consumed() {
        assert_eq!(
            parse_value(RawValue::Str("  auto "), ValueKind::Auto),
            Some(StyleValue::Auto)
        );
        assert_eq!(parse_value(RawValue::Str("10px 2px"), ValueKind::Length), None);
        assert_eq!(parse_value(RawValue::Str("10.5"), ValueKind::Integer), None);
        assert_eq!(
            parse_value(RawValue::Str("16/9"), ValueKind::Ratio),
            Some(StyleValue::Ratio(16.0 / 9.0))
        );
        assert_eq!(parse_value(RawValue::Str("1/0"), ValueKind::Ratio), None);
        assert_eq!(
            parse_value(RawValue::Str("50%"), ValueKind::Percentage),
            Some(StyleValue::Percentage(50.0))
        );
        assert_eq!(
            parse_value(RawValue::Str("#0f08"), ValueKind::Color),
            Some(StyleValue::Color(Color::rgba(0, 0xff, 0, 0x88)))
        );
    }

    #[test]
    fn prebuilt_values_pass_only_matching_kinds() {
        let keyword = RawValue::keyword(FlexDirection::Column);
        assert_eq!(
            parse_value(keyword, ValueKind::Enum(EnumType::FlexDirection)),
            Some(StyleValue::keyword(FlexDirection::Column))
        );
        assert_eq!(parse_value(keyword, ValueKind::Enum(EnumType::FlexWrap)), None);
        let value = RawValue::Value(StyleValue::keyword(AlignContent::Center));
        assert_eq!(parse_value(value, ValueKind::Enum(EnumType::AlignItems)), None);
        assert_eq!(
            parse_value(RawValue::Value(StyleValue::Auto), ValueKind::Auto),
            Some(StyleValue::Auto)
        );
        assert_eq!(
            parse_value(RawValue::Value(StyleValue::Percentage(-5.0)), ValueKind::Percentage),
            None
        );
        assert_eq!(parse_value(RawValue::Value(StyleValue::px(-1.0)), ValueKind::Length), None);
    }

    #[test]
    fn slot_tries_kinds_in_order() {
        assert_eq!(
            parse_with_slot(RawValue::Str("auto"), LENGTH_PERCENTAGE_AUTO),
            Some(StyleValue::Auto)
        );
        assert_eq!(
            parse_with_slot(RawValue::Str("0"), LENGTH_PERCENTAGE_AUTO),
            Some(StyleValue::px(0.0))
        );
        assert_eq!(parse_with_slot(RawValue::Str("none"), LENGTH_PERCENTAGE_AUTO), None);
    }

    #[test]
    fn patterns_require_exact_arity() {
        let patterns: &[Pattern] = &[
            &[LENGTH_PERCENTAGE_AUTO],
            &[LENGTH_PERCENTAGE_AUTO, LENGTH_PERCENTAGE_AUTO],
        ];
        let two = [RawValue::Str("1px"), RawValue::Str("auto")];
        assert_eq!(
            match_patterns(patterns, &two),
            Some(vec![StyleValue::px(1.0), StyleValue::Auto])
        );
        let three = [RawValue::Str("1px"), RawValue::Str("2px"), RawValue::Str("3px")];
        assert_eq!(match_patterns(patterns, &three), None);
        assert_eq!(match_patterns(patterns, &[]), None);
    }

    #[test]
    fn blank_strings_are_unspecified() {
        assert!(RawValue::Str("  ").is_unspecified());
        assert!(RawValue::Unspecified.is_unspecified());
        assert!(!RawValue::Int(0).is_unspecified());
    }
}
