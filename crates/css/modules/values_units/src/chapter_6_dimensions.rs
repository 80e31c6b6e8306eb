//! CSS Values & Units Level 3: §6 Dimensions (Lengths subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Supported subset of CSS <length> units.
///
/// `Pixel` doubles as the unit of unit-less lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Pixel,
    /// Advance width of the digit `0`.
    Ch,
    /// Current font size.
    Em,
    /// Height of the glyph `x`.
    Ex,
    /// Advance width of the ideograph `水`.
    Ic,
    /// Current line height.
    Lh,
}

impl LengthUnit {
    /// Canonical suffix used when formatting a length.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixel => "px",
            Self::Ch => "ch",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Ic => "ic",
            Self::Lh => "lh",
        }
    }

    /// Map a unit suffix (ASCII case-insensitive) to a unit.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" | "px" => Some(Self::Pixel),
            "ch" => Some(Self::Ch),
            "em" => Some(Self::Em),
            "ex" => Some(Self::Ex),
            "ic" => Some(Self::Ic),
            "lh" => Some(Self::Lh),
            _ => None,
        }
    }
}

/// Font metrics in scope when converting font-relative lengths to pixels.
pub trait FontRelativeMetrics {
    /// Resolved font size in pixels.
    fn font_size_px(&self) -> f32;
    /// Advance width of `0` in pixels.
    fn zero_advance_px(&self) -> f32;
    /// Height of `x` in pixels.
    fn x_height_px(&self) -> f32;
    /// Advance width of `水` in pixels.
    fn ideographic_advance_px(&self) -> f32;
    /// Resolved line height in pixels.
    fn line_height_px(&self) -> f32;
}

/// Compute the pixel value of a length using the metrics in scope.
pub fn compute_length_px<M: FontRelativeMetrics + ?Sized>(
    value: f32,
    unit: LengthUnit,
    metrics: &M,
) -> f32 {
    match unit {
        LengthUnit::Pixel => value,
        LengthUnit::Ch => value * metrics.zero_advance_px(),
        LengthUnit::Em => value * metrics.font_size_px(),
        LengthUnit::Ex => value * metrics.x_height_px(),
        LengthUnit::Ic => value * metrics.ideographic_advance_px(),
        LengthUnit::Lh => value * metrics.line_height_px(),
    }
}

/// Parse a non-negative CSS <length> (§6.2): a number with an optional unit suffix.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported
/// `<length>` and `ParseError::OutOfRange` for negative or non-finite values.
pub fn parse_length(input: &mut Parser) -> Result<(f32, LengthUnit), ParseError> {
    let (value, unit) = match input.next() {
        Ok(Token::Dimension { value, unit, .. }) => (
            *value,
            LengthUnit::from_suffix(unit.as_ref()).ok_or(ParseError::UnexpectedToken)?,
        ),
        Ok(&Token::Number { value, .. }) => (value, LengthUnit::Pixel),
        Ok(_) | Err(_) => return Err(ParseError::UnexpectedToken),
    };
    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::OutOfRange);
    }
    Ok((value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    struct Metrics;

    impl FontRelativeMetrics for Metrics {
        fn font_size_px(&self) -> f32 {
            20.0
        }
        fn zero_advance_px(&self) -> f32 {
            10.0
        }
        fn x_height_px(&self) -> f32 {
            9.0
        }
        fn ideographic_advance_px(&self) -> f32 {
            20.0
        }
        fn line_height_px(&self) -> f32 {
            30.0
        }
    }

    fn parse(text: &str) -> Result<(f32, LengthUnit), ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_length(&mut parser)
    }

    #[test]
    fn converts_every_unit() {
        let metrics = Metrics;
        assert!((compute_length_px(3.0, LengthUnit::Pixel, &metrics) - 3.0).abs() < f32::EPSILON);
        assert!((compute_length_px(2.0, LengthUnit::Ch, &metrics) - 20.0).abs() < f32::EPSILON);
        assert!((compute_length_px(2.0, LengthUnit::Em, &metrics) - 40.0).abs() < f32::EPSILON);
        assert!((compute_length_px(2.0, LengthUnit::Ex, &metrics) - 18.0).abs() < f32::EPSILON);
        assert!((compute_length_px(0.5, LengthUnit::Ic, &metrics) - 10.0).abs() < f32::EPSILON);
        assert!((compute_length_px(2.0, LengthUnit::Lh, &metrics) - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parses_suffixes_and_rejects_negatives() {
        assert_eq!(parse("12px"), Ok((12.0, LengthUnit::Pixel)));
        assert_eq!(parse("1.5EM"), Ok((1.5, LengthUnit::Em)));
        assert_eq!(parse("4"), Ok((4.0, LengthUnit::Pixel)));
        assert_eq!(parse("-4px"), Err(ParseError::OutOfRange));
        assert_eq!(parse("4vw"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("auto"), Err(ParseError::UnexpectedToken));
    }
}
