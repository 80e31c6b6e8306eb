//! Margin, padding, and border width properties.

use super::{
    DimensionField, LENGTH, LENGTH_PERCENTAGE, LENGTH_PERCENTAGE_AUTO, Operation,
    PropertyDefinition, assign, dimensions,
};
use crate::style_model::{BoxStyle, Dimension, EdgeBox, Edges, Side};
use crate::text_style::ComputedTextStyle;
use css_values_units::{Pattern, StyleValue};

/// The 1, 2, 3 and 4 argument forms of an edge shorthand.
macro_rules! quad_patterns {
    ($slot:expr) => {
        &[
            &[$slot],
            &[$slot, $slot],
            &[$slot, $slot, $slot],
            &[$slot, $slot, $slot, $slot],
        ]
    };
}

const MARGIN_PATTERNS: &[Pattern] = quad_patterns!(LENGTH_PERCENTAGE_AUTO);
const PADDING_PATTERNS: &[Pattern] = quad_patterns!(LENGTH_PERCENTAGE);
const BORDER_PATTERNS: &[Pattern] = quad_patterns!(LENGTH);

pub(super) static DEFINITIONS: &[PropertyDefinition] = &[
    PropertyDefinition {
        name: "margin",
        patterns: MARGIN_PATTERNS,
        operation: Operation::EdgeQuad(EdgeBox::Margin),
        affects: &["margin-top", "margin-right", "margin-bottom", "margin-left"],
    },
    side("margin-top", EdgeBox::Margin, Side::Top),
    side("margin-right", EdgeBox::Margin, Side::Right),
    side("margin-bottom", EdgeBox::Margin, Side::Bottom),
    side("margin-left", EdgeBox::Margin, Side::Left),
    PropertyDefinition {
        name: "padding",
        patterns: PADDING_PATTERNS,
        operation: Operation::EdgeQuad(EdgeBox::Padding),
        affects: &["padding-top", "padding-right", "padding-bottom", "padding-left"],
    },
    side("padding-top", EdgeBox::Padding, Side::Top),
    side("padding-right", EdgeBox::Padding, Side::Right),
    side("padding-bottom", EdgeBox::Padding, Side::Bottom),
    side("padding-left", EdgeBox::Padding, Side::Left),
    PropertyDefinition {
        name: "border-width",
        patterns: BORDER_PATTERNS,
        operation: Operation::EdgeQuad(EdgeBox::Border),
        affects: &[
            "border-top-width",
            "border-right-width",
            "border-bottom-width",
            "border-left-width",
        ],
    },
    side("border-top-width", EdgeBox::Border, Side::Top),
    side("border-right-width", EdgeBox::Border, Side::Right),
    side("border-bottom-width", EdgeBox::Border, Side::Bottom),
    side("border-left-width", EdgeBox::Border, Side::Left),
];

/// Longhand for one side of an edge quad.
pub(super) const fn side(name: &'static str, edge_box: EdgeBox, side: Side) -> PropertyDefinition {
    PropertyDefinition {
        name,
        patterns: match edge_box {
            EdgeBox::Margin => &[&[LENGTH_PERCENTAGE_AUTO]],
            EdgeBox::Border => &[&[LENGTH]],
            EdgeBox::Padding | EdgeBox::Inset => &[&[LENGTH_PERCENTAGE]],
        },
        operation: Operation::Dimension(DimensionField::Edge(edge_box, side)),
        affects: &[],
    }
}

/// Expand 1–4 values CSS-style: all; vertical horizontal; top horizontal bottom; top right bottom left.
pub(super) fn expand(values: &[Dimension]) -> Option<Edges> {
    match *values {
        [all] => Some(Edges::uniform(all)),
        [vertical, horizontal] => Some(Edges {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }),
        [top, horizontal, bottom] => Some(Edges {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        }),
        [top, right, bottom, left] => Some(Edges {
            top,
            right,
            bottom,
            left,
        }),
        _ => None,
    }
}

pub(super) fn install_quad(
    style: &mut BoxStyle,
    edge_box: EdgeBox,
    values: &[StyleValue],
    text: &ComputedTextStyle,
) -> bool {
    let Some(resolved) = values
        .iter()
        .map(|value| dimensions::resolve(value, text))
        .collect::<Option<Vec<_>>>()
    else {
        return false;
    };
    expand(&resolved).is_some_and(|edges| assign(style.edges_mut(edge_box), edges))
}
