//! Style engine orchestrator.
//!
//! Owns the property definition registry, the style tree with its per-node
//! property tables, and the flush that installs resolved values into a
//! [`LayoutEngine`]. Geometry itself is computed elsewhere.

pub mod config;
pub mod layout;
pub mod layout_model;
pub mod properties;
mod style;
pub mod style_model;
pub mod text_style;

pub use config::StyleEngineConfig;
pub use css_cascade::{PropertyEvent, StyleGroup};
pub use css_values_units::{RawValue, StyleValue};
pub use indextree::NodeId;
pub use layout::BoxStore;
pub use layout_model::{BoxId, LayoutEngine};
pub use properties::{PropertyDefinition, PropertyId};
pub use style::StyleTree;
pub use style_model::{BoxStyle, Dimension, EdgeBox, Edges, Side};
pub use text_style::{ComputedTextStyle, FixedFontMetrics, FontHandle, FontMetrics};
