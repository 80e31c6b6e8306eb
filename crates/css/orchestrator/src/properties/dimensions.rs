//! Box size properties and the value-to-dimension conversion shared by all
//! length-valued properties.

use super::{
    DimensionField, LENGTH_PERCENTAGE, LENGTH_PERCENTAGE_AUTO, Operation, PropertyDefinition,
    assign,
};
use crate::style_model::{BoxStyle, Dimension};
use crate::text_style::ComputedTextStyle;
use css_values_units::{StyleValue, compute_length_px};

pub(super) static DEFINITIONS: &[PropertyDefinition] = &[
    size("width", DimensionField::Width, true),
    size("height", DimensionField::Height, true),
    size("min-width", DimensionField::MinWidth, false),
    size("min-height", DimensionField::MinHeight, false),
    size("max-width", DimensionField::MaxWidth, false),
    size("max-height", DimensionField::MaxHeight, false),
];

const fn size(name: &'static str, field: DimensionField, allows_auto: bool) -> PropertyDefinition {
    PropertyDefinition {
        name,
        patterns: if allows_auto {
            &[&[LENGTH_PERCENTAGE_AUTO]]
        } else {
            &[&[LENGTH_PERCENTAGE]]
        },
        operation: Operation::Dimension(field),
        affects: &[],
    }
}

/// Convert a value to an engine dimension; font-relative lengths use `text`.
pub(super) fn resolve(value: &StyleValue, text: &ComputedTextStyle) -> Option<Dimension> {
    match *value {
        StyleValue::Length(length, unit) => {
            Some(Dimension::Points(compute_length_px(length, unit, text)))
        }
        StyleValue::Percentage(percent) => Some(Dimension::Percent(percent)),
        StyleValue::Auto => Some(Dimension::Auto),
        StyleValue::None
        | StyleValue::Integer(_)
        | StyleValue::Enum(_)
        | StyleValue::Ratio(_)
        | StyleValue::Number(_)
        | StyleValue::Color(_) => None,
    }
}

pub(super) const fn get(style: &BoxStyle, field: DimensionField) -> Dimension {
    match field {
        DimensionField::Edge(edge_box, side) => style.edges(edge_box).get(side),
        DimensionField::Width => style.width,
        DimensionField::Height => style.height,
        DimensionField::MinWidth => style.min_width,
        DimensionField::MinHeight => style.min_height,
        DimensionField::MaxWidth => style.max_width,
        DimensionField::MaxHeight => style.max_height,
        DimensionField::FlexBasis => style.flex_basis,
        DimensionField::RowGap => style.row_gap,
        DimensionField::ColumnGap => style.column_gap,
    }
}

pub(super) fn set(style: &mut BoxStyle, field: DimensionField, value: Dimension) -> bool {
    let slot = match field {
        DimensionField::Edge(edge_box, side) => style.edges_mut(edge_box).get_mut(side),
        DimensionField::Width => &mut style.width,
        DimensionField::Height => &mut style.height,
        DimensionField::MinWidth => &mut style.min_width,
        DimensionField::MinHeight => &mut style.min_height,
        DimensionField::MaxWidth => &mut style.max_width,
        DimensionField::MaxHeight => &mut style.max_height,
        DimensionField::FlexBasis => &mut style.flex_basis,
        DimensionField::RowGap => &mut style.row_gap,
        DimensionField::ColumnGap => &mut style.column_gap,
    };
    assign(slot, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleEngineConfig;
    use crate::style_model::{EdgeBox, Side};
    use crate::text_style::FixedFontMetrics;
    use css_values_units::LengthUnit;

    #[test]
    fn resolves_font_relative_lengths_against_text_style() {
        let mut text =
            ComputedTextStyle::root(&StyleEngineConfig::default(), FixedFontMetrics::handle(16.0));
        text.font_size_px = 10.0;
        assert_eq!(
            resolve(&StyleValue::Length(3.0, LengthUnit::Em), &text),
            Some(Dimension::Points(30.0))
        );
        assert_eq!(
            resolve(&StyleValue::Percentage(40.0), &text),
            Some(Dimension::Percent(40.0))
        );
        assert_eq!(resolve(&StyleValue::Number(1.0), &text), None);
    }

    #[test]
    fn set_reports_changes_per_field() {
        let mut style = BoxStyle::default();
        let field = DimensionField::Edge(EdgeBox::Padding, Side::Left);
        assert!(set(&mut style, field, Dimension::Points(2.0)));
        assert!(!set(&mut style, field, Dimension::Points(2.0)));
        assert_eq!(get(&style, field), Dimension::Points(2.0));
        assert_eq!(style.padding.right, Dimension::Undefined);
    }
}
