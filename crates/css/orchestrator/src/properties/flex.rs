//! Flexbox properties: the `flex` and `flex-flow` shorthands, flex factors,
//! and the alignment keywords.

use super::{
    DimensionField, FactorField, KeywordField, LENGTH_PERCENTAGE_AUTO, NUMBER, Operation,
    PropertyDefinition, assign, dimensions, layout,
};
use crate::style_model::{BoxStyle, Dimension};
use crate::text_style::ComputedTextStyle;
use css_values_units::{EnumType, FlexDirection, FlexWrap, Slot, StyleValue, ValueKind};

const FLEX_GROW_OR_BASIS: Slot = &[
    ValueKind::Number,
    ValueKind::Length,
    ValueKind::Percentage,
    ValueKind::Auto,
];
const FLEX_DIRECTION: Slot = &[ValueKind::Enum(EnumType::FlexDirection)];
const FLEX_WRAP: Slot = &[ValueKind::Enum(EnumType::FlexWrap)];
const FLEX_DIRECTION_OR_WRAP: Slot = &[
    ValueKind::Enum(EnumType::FlexDirection),
    ValueKind::Enum(EnumType::FlexWrap),
];

pub(super) static DEFINITIONS: &[PropertyDefinition] = &[
    PropertyDefinition {
        name: "flex",
        patterns: &[
            &[FLEX_GROW_OR_BASIS],
            &[NUMBER, FLEX_GROW_OR_BASIS],
            &[NUMBER, NUMBER, LENGTH_PERCENTAGE_AUTO],
        ],
        operation: Operation::Flex,
        affects: &["flex-grow", "flex-shrink", "flex-basis"],
    },
    PropertyDefinition {
        name: "flex-grow",
        patterns: &[&[NUMBER]],
        operation: Operation::Factor(FactorField::FlexGrow),
        affects: &[],
    },
    PropertyDefinition {
        name: "flex-shrink",
        patterns: &[&[NUMBER]],
        operation: Operation::Factor(FactorField::FlexShrink),
        affects: &[],
    },
    PropertyDefinition {
        name: "flex-basis",
        patterns: &[&[LENGTH_PERCENTAGE_AUTO]],
        operation: Operation::Dimension(DimensionField::FlexBasis),
        affects: &[],
    },
    PropertyDefinition {
        name: "flex-flow",
        patterns: &[&[FLEX_DIRECTION_OR_WRAP], &[FLEX_DIRECTION, FLEX_WRAP]],
        operation: Operation::FlexFlow,
        affects: &["flex-direction", "flex-wrap"],
    },
    layout::keyword("flex-direction", KeywordField::FlexDirection),
    layout::keyword("flex-wrap", KeywordField::FlexWrap),
    layout::keyword("justify-content", KeywordField::JustifyContent),
    layout::keyword("align-content", KeywordField::AlignContent),
    layout::keyword("align-items", KeywordField::AlignItems),
    layout::keyword("align-self", KeywordField::AlignSelf),
];

pub(super) const fn factor(style: &BoxStyle, field: FactorField) -> f32 {
    match field {
        FactorField::FlexGrow => style.flex_grow,
        FactorField::FlexShrink => style.flex_shrink,
    }
}

pub(super) fn set_factor(style: &mut BoxStyle, field: FactorField, value: f32) -> bool {
    match field {
        FactorField::FlexGrow => assign(&mut style.flex_grow, value),
        FactorField::FlexShrink => assign(&mut style.flex_shrink, value),
    }
}

/// Resolve `flex` arguments into `(grow, shrink, basis)`.
///
/// A lone number is the grow factor with shrink 1 and a zero basis; a lone
/// basis grows and shrinks by 1. With two arguments the second is the shrink
/// factor when it is a number, otherwise the basis.
fn resolve_flex(values: &[StyleValue], text: &ComputedTextStyle) -> Option<(f32, f32, Dimension)> {
    let zero_basis = Dimension::Points(0.0);
    match *values {
        [StyleValue::Number(grow)] => Some((grow, 1.0, zero_basis)),
        [basis] => Some((1.0, 1.0, dimensions::resolve(&basis, text)?)),
        [StyleValue::Number(grow), StyleValue::Number(shrink)] => Some((grow, shrink, zero_basis)),
        [StyleValue::Number(grow), basis] => Some((grow, 1.0, dimensions::resolve(&basis, text)?)),
        [StyleValue::Number(grow), StyleValue::Number(shrink), basis] => {
            Some((grow, shrink, dimensions::resolve(&basis, text)?))
        }
        _ => None,
    }
}

pub(super) fn install_flex(
    style: &mut BoxStyle,
    values: &[StyleValue],
    text: &ComputedTextStyle,
) -> bool {
    let Some((grow, shrink, basis)) = resolve_flex(values, text) else {
        return false;
    };
    set_factor(style, FactorField::FlexGrow, grow)
        | set_factor(style, FactorField::FlexShrink, shrink)
        | dimensions::set(style, DimensionField::FlexBasis, basis)
}

pub(super) fn reset_flex(style: &mut BoxStyle, initial: &BoxStyle) -> bool {
    set_factor(style, FactorField::FlexGrow, initial.flex_grow)
        | set_factor(style, FactorField::FlexShrink, initial.flex_shrink)
        | dimensions::set(style, DimensionField::FlexBasis, initial.flex_basis)
}

pub(super) fn install_flex_flow(style: &mut BoxStyle, values: &[StyleValue]) -> bool {
    let mut changed = false;
    for value in values {
        if let Some(direction) = value.as_keyword::<FlexDirection>() {
            changed |= assign(&mut style.flex_direction, direction);
        } else if let Some(wrap) = value.as_keyword::<FlexWrap>() {
            changed |= assign(&mut style.flex_wrap, wrap);
        }
    }
    changed
}
