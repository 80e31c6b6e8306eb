//! Typed style values and the value parser.
//!
//! A [`StyleValue`] is one resolved datum of a style property. The parser in
//! [`value_parser`] turns raw caller input (text tokens, numbers, keywords,
//! colors, or pre-built values) into a [`StyleValue`] constrained by a
//! [`ValueKind`], and matches whole argument lists against the ordered
//! [`Pattern`]s a property declares.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring CSS Values & Units for the data types we support.
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_9_colors;
pub mod style_value;
pub mod value_parser;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{
    AlignContent, AlignItems, AlignSelf, Direction, Display, EnumType, FlexDirection, FlexWrap,
    JustifyContent, Keyword, KeywordValue, Position, TextAlign,
};
pub use chapter_6_dimensions::{FontRelativeMetrics, LengthUnit, compute_length_px};
pub use chapter_9_colors::{Color, parse_hex_color};
pub use style_value::{StyleValue, ValueKind};
pub use value_parser::{Pattern, RawValue, Slot, match_patterns, parse_value, parse_with_slot};

/// Token-level parse error used by the per-chapter helpers.
///
/// The public parser collapses every failure to "no value produced".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// The token matched but its value is outside the accepted range.
    OutOfRange,
}
