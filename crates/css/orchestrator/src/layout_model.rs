//! Interface to the geometry engine that owns per-node boxes.
//!
//! The style engine never lays anything out. It only writes resolved values
//! into each box's [`BoxStyle`] and tells the engine which boxes changed.

use crate::style_model::BoxStyle;

/// Handle of a box owned by a [`LayoutEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxId(pub u32);

pub trait LayoutEngine {
    /// Allocate a box whose style is the initial record.
    fn create_box(&mut self) -> BoxId;

    /// Release a box. Unknown handles are ignored.
    fn remove_box(&mut self, id: BoxId);

    fn style(&self, id: BoxId) -> Option<&BoxStyle>;

    fn style_mut(&mut self, id: BoxId) -> Option<&mut BoxStyle>;

    /// Probe record holding the value of every field that was never set.
    fn initial_style(&self) -> &BoxStyle;

    /// Note that `id`'s style changed and its layout must be recomputed.
    fn mark_dirty(&mut self, id: BoxId);
}
