//! Text-defining properties. They write the node's computed text style, which
//! its descendants inherit, instead of the box style.

use std::rc::Rc;

use super::{ApplyContext, NUMBER, Operation, PropertyDefinition, assign};
use crate::text_style::ComputedTextStyle;
use css_values_units::{EnumType, StyleValue, ValueKind, compute_length_px};

/// Application order of the text-defining properties; font-size goes first
/// because the other lengths of the node resolve against it.
pub(super) const ORDER: [&str; 3] = ["font-size", "line-height", "text-align"];

pub(super) static DEFINITIONS: &[PropertyDefinition] = &[
    PropertyDefinition {
        name: "font-size",
        patterns: &[&[&[ValueKind::Length, ValueKind::Percentage]]],
        operation: Operation::FontSize,
        affects: &[],
    },
    PropertyDefinition {
        name: "line-height",
        patterns: &[&[NUMBER]],
        operation: Operation::LineHeight,
        affects: &[],
    },
    PropertyDefinition {
        name: "text-align",
        patterns: &[&[&[ValueKind::Enum(EnumType::TextAlign)]]],
        operation: Operation::TextAlign,
        affects: &[],
    },
];

/// Lengths resolve against the parent's size in the node's own font;
/// percentages scale the parent's font size.
pub(super) fn install_font_size(context: &mut ApplyContext<'_>, value: &StyleValue) -> bool {
    let size = match *value {
        StyleValue::Length(length, unit) => {
            let basis = ComputedTextStyle {
                font: Rc::clone(&context.text.font),
                ..context.inherited.clone()
            };
            compute_length_px(length, unit, &basis)
        }
        StyleValue::Percentage(percent) => context.inherited.font_size_px * percent / 100.0,
        _ => return false,
    };
    assign(&mut context.text.font_size_px, size)
}

pub(super) fn install_line_height(context: &mut ApplyContext<'_>, value: &StyleValue) -> bool {
    value
        .as_f32()
        .is_some_and(|multiplier| assign(&mut context.text.line_height, multiplier))
}

pub(super) fn install_text_align(context: &mut ApplyContext<'_>, value: &StyleValue) -> bool {
    value
        .as_keyword()
        .is_some_and(|align| assign(&mut context.text.text_align, align))
}
