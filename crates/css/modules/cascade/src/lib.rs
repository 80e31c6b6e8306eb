//! Cascade groups and the per-node property table.
//!
//! Declarations live in one of three [`StyleGroup`]s. Lookups scan groups from
//! highest to lowest priority; inside a group the most recently written entry
//! is applied last and therefore wins.

#![forbid(unsafe_code)]

pub mod property_table;

pub use property_table::{PropertyEntry, PropertyTable};

/// Priority group of a declaration. Later variants win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleGroup {
    /// Engine or widget defaults.
    Preset,
    /// Reusable rule sets.
    StyleSheet,
    /// Per-node overrides.
    Inline,
}

impl StyleGroup {
    /// Application order: lowest priority first.
    pub const APPLICATION_ORDER: [Self; 3] = [Self::Preset, Self::StyleSheet, Self::Inline];

    /// Lookup order: highest priority first.
    pub const CASCADE_ORDER: [Self; 3] = [Self::Inline, Self::StyleSheet, Self::Preset];
}

/// Change pending on an entry since the last flush.
///
/// Writes and clears coalesce so that a flush only sees the net effect:
/// a create followed by a clear is no change at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PropertyEvent {
    #[default]
    None,
    Created,
    Updated,
    Removed,
}

impl PropertyEvent {
    /// Event after a value is written. `had_value` tells whether the entry held
    /// a value before the write.
    pub const fn on_write(self, had_value: bool) -> Self {
        match self {
            Self::None => {
                if had_value {
                    Self::Updated
                } else {
                    Self::Created
                }
            }
            Self::Created => Self::Created,
            Self::Updated | Self::Removed => Self::Updated,
        }
    }

    /// Event after the entry's value is cleared.
    pub const fn on_clear(self) -> Self {
        match self {
            Self::Created => Self::None,
            Self::None | Self::Updated | Self::Removed => Self::Removed,
        }
    }
}
