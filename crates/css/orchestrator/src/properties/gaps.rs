//! Gutters between flex lines and items.

use super::{DimensionField, LENGTH_PERCENTAGE, Operation, PropertyDefinition, dimensions};
use crate::style_model::BoxStyle;
use crate::text_style::ComputedTextStyle;
use css_values_units::StyleValue;

pub(super) static DEFINITIONS: &[PropertyDefinition] = &[
    PropertyDefinition {
        name: "gap",
        patterns: &[&[LENGTH_PERCENTAGE], &[LENGTH_PERCENTAGE, LENGTH_PERCENTAGE]],
        operation: Operation::Gap,
        affects: &["row-gap", "column-gap"],
    },
    PropertyDefinition {
        name: "row-gap",
        patterns: &[&[LENGTH_PERCENTAGE]],
        operation: Operation::Dimension(DimensionField::RowGap),
        affects: &[],
    },
    PropertyDefinition {
        name: "column-gap",
        patterns: &[&[LENGTH_PERCENTAGE]],
        operation: Operation::Dimension(DimensionField::ColumnGap),
        affects: &[],
    },
];

/// `gap: <row> [<column>]`; a single value sets both.
pub(super) fn install_gap(
    style: &mut BoxStyle,
    values: &[StyleValue],
    text: &ComputedTextStyle,
) -> bool {
    let (row, column) = match *values {
        [both] => (both, both),
        [row, column] => (row, column),
        _ => return false,
    };
    let (Some(row_gap), Some(column_gap)) = (
        dimensions::resolve(&row, text),
        dimensions::resolve(&column, text),
    ) else {
        return false;
    };
    dimensions::set(style, DimensionField::RowGap, row_gap)
        | dimensions::set(style, DimensionField::ColumnGap, column_gap)
}
