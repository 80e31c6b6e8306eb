//! CSS Values & Units Level 3: §4 Numbers (integers, numbers, ratios)
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Parse a CSS <integer> (§4.1). Real numbers such as `1.0` are rejected.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an integer.
pub fn parse_integer(input: &mut Parser) -> Result<i32, ParseError> {
    match input.next() {
        Ok(&Token::Number {
            int_value: Some(value),
            ..
        }) => Ok(value),
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<f32, ParseError> {
    match input.next() {
        Ok(&Token::Number { value, .. }) if value.is_finite() => Ok(value),
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a `<ratio>`: `w` or `w / h`, both non-negative, yielding `w / h`.
/// Spec: <https://www.w3.org/TR/css-values-4/#ratios>
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` on malformed input and
/// `ParseError::OutOfRange` for negative parts or a zero denominator.
pub fn parse_ratio(input: &mut Parser) -> Result<f32, ParseError> {
    let numerator = parse_number(input)?;
    let denominator = if input.try_parse(|parser| parser.expect_delim('/')).is_ok() {
        parse_number(input)?
    } else {
        1.0
    };
    if numerator < 0.0 || denominator <= 0.0 {
        return Err(ParseError::OutOfRange);
    }
    Ok(numerator / denominator)
}

/// Validate a numeric ratio given directly by a caller.
pub fn ratio_from_number(value: f32) -> Option<f32> {
    (value.is_finite() && value >= 0.0).then_some(value)
}
