//! CSS Values & Units Level 3: §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Parse a non-negative CSS <percentage> (§5.1), returned on the 0–100 scale.
///
/// The value is read from the source text before `%` so it matches what was
/// written, instead of round-tripping through the tokenizer's 0.0–1.0 fraction.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`
/// and `ParseError::OutOfRange` for negative or non-finite values.
pub fn parse_percentage(input: &mut Parser) -> Result<f32, ParseError> {
    let start = input.position();
    let fraction = match input.next() {
        Ok(&Token::Percentage { unit_value, .. }) => unit_value,
        Ok(_) | Err(_) => return Err(ParseError::UnexpectedToken),
    };
    let value = input
        .slice_from(start)
        .trim()
        .strip_suffix('%')
        .and_then(|number| number.parse::<f32>().ok())
        .unwrap_or(fraction * 100.0);
    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::OutOfRange);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<f32, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_percentage(&mut parser)
    }

    #[test]
    fn keeps_written_digits() {
        assert_eq!(parse("50%"), Ok(50.0));
        assert_eq!(parse("0.42857143%"), Ok(0.428_571_43));
        assert_eq!(parse(" 12.5%"), Ok(12.5));
    }

    #[test]
    fn rejects_negatives_and_other_tokens() {
        assert_eq!(parse("-10%"), Err(ParseError::OutOfRange));
        assert_eq!(parse("10px"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("auto"), Err(ParseError::UnexpectedToken));
    }
}
