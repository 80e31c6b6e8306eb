use crate::layout_model::BoxId;
use crate::properties::PropertyId;
use crate::text_style::{ComputedTextStyle, FontHandle};
use css_cascade::PropertyTable;

/// Per-node style state kept in the tree arena.
#[derive(Debug)]
pub(crate) struct StyleNode {
    pub table: PropertyTable<PropertyId>,
    /// Resolved inherited text style as of the last flush.
    pub text_style: ComputedTextStyle,
    pub layout_box: BoxId,
    /// Local font replacing the inherited one.
    pub font: Option<FontHandle>,
    /// Set while the node sits in the tree's dirty set.
    pub scheduled: bool,
}

impl StyleNode {
    pub fn new(layout_box: BoxId, text_style: ComputedTextStyle) -> Self {
        Self {
            table: PropertyTable::new(),
            text_style,
            layout_box,
            font: None,
            scheduled: false,
        }
    }
}
