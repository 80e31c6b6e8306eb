//! Box-level keywords, aspect ratio and inset offsets.

use super::{KeywordField, Operation, PropertyDefinition, assign, edges};
use crate::style_model::{BoxStyle, EdgeBox, Side};
use css_values_units::{EnumType, StyleValue, ValueKind};

pub(super) static DEFINITIONS: &[PropertyDefinition] = &[
    keyword("display", KeywordField::Display),
    keyword("position", KeywordField::Position),
    keyword("direction", KeywordField::Direction),
    PropertyDefinition {
        name: "aspect-ratio",
        patterns: &[&[&[ValueKind::Ratio]]],
        operation: Operation::AspectRatio,
        affects: &[],
    },
    edges::side("top", EdgeBox::Inset, Side::Top),
    edges::side("right", EdgeBox::Inset, Side::Right),
    edges::side("bottom", EdgeBox::Inset, Side::Bottom),
    edges::side("left", EdgeBox::Inset, Side::Left),
];

/// A property taking exactly one member of the field's enumeration.
pub(super) const fn keyword(name: &'static str, field: KeywordField) -> PropertyDefinition {
    PropertyDefinition {
        name,
        patterns: match field {
            KeywordField::AlignContent => &[&[&[ValueKind::Enum(EnumType::AlignContent)]]],
            KeywordField::AlignItems => &[&[&[ValueKind::Enum(EnumType::AlignItems)]]],
            KeywordField::AlignSelf => &[&[&[ValueKind::Enum(EnumType::AlignSelf)]]],
            KeywordField::Direction => &[&[&[ValueKind::Enum(EnumType::Direction)]]],
            KeywordField::Display => &[&[&[ValueKind::Enum(EnumType::Display)]]],
            KeywordField::FlexDirection => &[&[&[ValueKind::Enum(EnumType::FlexDirection)]]],
            KeywordField::FlexWrap => &[&[&[ValueKind::Enum(EnumType::FlexWrap)]]],
            KeywordField::JustifyContent => &[&[&[ValueKind::Enum(EnumType::JustifyContent)]]],
            KeywordField::Position => &[&[&[ValueKind::Enum(EnumType::Position)]]],
        },
        operation: Operation::Keyword(field),
        affects: &[],
    }
}

/// Write a keyword into its field. Values of another enumeration are ignored.
pub(super) fn install_keyword(style: &mut BoxStyle, field: KeywordField, value: &StyleValue) -> bool {
    match field {
        KeywordField::AlignContent => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.align_content, keyword)),
        KeywordField::AlignItems => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.align_items, keyword)),
        KeywordField::AlignSelf => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.align_self, keyword)),
        KeywordField::Direction => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.direction, Some(keyword))),
        KeywordField::Display => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.display, keyword)),
        KeywordField::FlexDirection => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.flex_direction, keyword)),
        KeywordField::FlexWrap => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.flex_wrap, keyword)),
        KeywordField::JustifyContent => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.justify_content, keyword)),
        KeywordField::Position => value
            .as_keyword()
            .is_some_and(|keyword| assign(&mut style.position, keyword)),
    }
}

pub(super) fn reset_keyword(style: &mut BoxStyle, initial: &BoxStyle, field: KeywordField) -> bool {
    match field {
        KeywordField::AlignContent => assign(&mut style.align_content, initial.align_content),
        KeywordField::AlignItems => assign(&mut style.align_items, initial.align_items),
        KeywordField::AlignSelf => assign(&mut style.align_self, initial.align_self),
        KeywordField::Direction => assign(&mut style.direction, initial.direction),
        KeywordField::Display => assign(&mut style.display, initial.display),
        KeywordField::FlexDirection => assign(&mut style.flex_direction, initial.flex_direction),
        KeywordField::FlexWrap => assign(&mut style.flex_wrap, initial.flex_wrap),
        KeywordField::JustifyContent => {
            assign(&mut style.justify_content, initial.justify_content)
        }
        KeywordField::Position => assign(&mut style.position, initial.position),
    }
}

pub(super) fn install_aspect_ratio(style: &mut BoxStyle, value: &StyleValue) -> bool {
    match *value {
        StyleValue::Ratio(ratio) => assign(&mut style.aspect_ratio, Some(ratio)),
        _ => false,
    }
}
