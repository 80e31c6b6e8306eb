//! Native per-box style record consumed by the geometry engine.
//!
//! Field values are what the engine lays out with; property installation
//! writes them and property reset copies them back from the initial record.

use css_values_units::{
    AlignContent, AlignItems, AlignSelf, Direction, Display, FlexDirection, FlexWrap,
    JustifyContent, Position,
};

/// A length-like engine value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dimension {
    /// Not set; the engine treats it as its own default (usually zero).
    #[default]
    Undefined,
    /// Absolute pixels.
    Points(f32),
    /// Percentage of the containing block, 0–100.
    Percent(f32),
    Auto,
}

/// One side of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: Dimension,
    pub right: Dimension,
    pub bottom: Dimension,
    pub left: Dimension,
}

impl Edges {
    pub const fn uniform(value: Dimension) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn get(&self, side: Side) -> Dimension {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub const fn get_mut(&mut self, side: Side) -> &mut Dimension {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }
}

/// Which edge quad of a box a property targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBox {
    Margin,
    Padding,
    Border,
    /// Offsets of a positioned box (`top`, `right`, `bottom`, `left`).
    Inset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    /// `None` inherits the direction of the parent box.
    pub direction: Option<Direction>,
    pub display: Display,
    pub position: Position,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,
    /// Width divided by height; `None` when unconstrained.
    pub aspect_ratio: Option<f32>,
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub inset: Edges,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
    pub row_gap: Dimension,
    pub column_gap: Dimension,
}

impl BoxStyle {
    /// Initial record of a freshly created box.
    ///
    /// Web defaults lay out rows, stretch wrapped lines and let items shrink;
    /// otherwise boxes stack in columns, pack lines at the start and never shrink.
    pub const fn initial(use_web_defaults: bool) -> Self {
        Self {
            direction: None,
            display: Display::Flex,
            position: Position::Relative,
            flex_direction: if use_web_defaults {
                FlexDirection::Row
            } else {
                FlexDirection::Column
            },
            flex_wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::FlexStart,
            align_content: if use_web_defaults {
                AlignContent::Stretch
            } else {
                AlignContent::FlexStart
            },
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            flex_grow: 0.0,
            flex_shrink: if use_web_defaults { 1.0 } else { 0.0 },
            flex_basis: Dimension::Auto,
            aspect_ratio: None,
            margin: Edges::uniform(Dimension::Undefined),
            padding: Edges::uniform(Dimension::Undefined),
            border: Edges::uniform(Dimension::Undefined),
            inset: Edges::uniform(Dimension::Undefined),
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Undefined,
            min_height: Dimension::Undefined,
            max_width: Dimension::Undefined,
            max_height: Dimension::Undefined,
            row_gap: Dimension::Undefined,
            column_gap: Dimension::Undefined,
        }
    }

    pub const fn edges(&self, edge_box: EdgeBox) -> &Edges {
        match edge_box {
            EdgeBox::Margin => &self.margin,
            EdgeBox::Padding => &self.padding,
            EdgeBox::Border => &self.border,
            EdgeBox::Inset => &self.inset,
        }
    }

    pub const fn edges_mut(&mut self, edge_box: EdgeBox) -> &mut Edges {
        match edge_box {
            EdgeBox::Margin => &mut self.margin,
            EdgeBox::Padding => &mut self.padding,
            EdgeBox::Border => &mut self.border,
            EdgeBox::Inset => &mut self.inset,
        }
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::initial(true)
    }
}
