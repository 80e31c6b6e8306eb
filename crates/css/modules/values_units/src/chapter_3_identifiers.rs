//! Keyword identifiers for the closed enumerations accepted by style properties.
//! Spec: <https://www.w3.org/TR/css-values-3/#keywords>
//!
//! Every enumeration has a fixed name table; a member's ordinal is its index
//! in that table. Names compare ASCII case-insensitively.

use core::fmt;

use crate::ParseError;
use cssparser::{Parser, Token};

/// Identifies one closed keyword enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumType {
    AlignContent,
    AlignItems,
    AlignSelf,
    Direction,
    Display,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    Position,
    TextAlign,
}

impl EnumType {
    /// Registered member names, indexed by ordinal.
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::AlignContent => AlignContent::NAMES,
            Self::AlignItems => AlignItems::NAMES,
            Self::AlignSelf => AlignSelf::NAMES,
            Self::Direction => Direction::NAMES,
            Self::Display => Display::NAMES,
            Self::FlexDirection => FlexDirection::NAMES,
            Self::FlexWrap => FlexWrap::NAMES,
            Self::JustifyContent => JustifyContent::NAMES,
            Self::Position => Position::NAMES,
            Self::TextAlign => TextAlign::NAMES,
        }
    }

    /// Look up the ordinal of `name` in this enumeration's name table.
    pub fn ordinal_of(self, name: &str) -> Option<u8> {
        self.names()
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .and_then(|index| u8::try_from(index).ok())
    }

    /// Member name for `ordinal`, if it is in range.
    pub fn member_name(self, ordinal: u8) -> Option<&'static str> {
        self.names().get(usize::from(ordinal)).copied()
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

/// A validated `(enumeration, ordinal)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeywordValue {
    kind: EnumType,
    ordinal: u8,
}

impl KeywordValue {
    /// Build a keyword value, rejecting ordinals outside the name table.
    pub fn new(kind: EnumType, ordinal: u8) -> Option<Self> {
        kind.member_name(ordinal)?;
        Some(Self { kind, ordinal })
    }

    /// Resolve a member by name.
    pub fn from_name(kind: EnumType, name: &str) -> Option<Self> {
        kind.ordinal_of(name)
            .map(|ordinal| Self { kind, ordinal })
    }

    pub const fn kind(self) -> EnumType {
        self.kind
    }

    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }

    /// Registered name of this member.
    pub fn name(self) -> &'static str {
        self.kind.member_name(self.ordinal).unwrap_or_default()
    }

    /// Convert into the typed enumeration `K` when the enumeration matches.
    pub fn to_keyword<K: Keyword>(self) -> Option<K> {
        if self.kind == K::TYPE {
            K::from_ordinal(self.ordinal)
        } else {
            None
        }
    }
}

impl<K: Keyword> From<K> for KeywordValue {
    fn from(keyword: K) -> Self {
        Self {
            kind: K::TYPE,
            ordinal: keyword.ordinal(),
        }
    }
}

/// A typed Rust enumeration backed by one [`EnumType`] name table.
pub trait Keyword: Copy {
    /// The enumeration this type represents.
    const TYPE: EnumType;

    fn ordinal(self) -> u8;

    fn from_ordinal(ordinal: u8) -> Option<Self>;

    /// Registered name of this member.
    fn name(self) -> &'static str {
        Self::TYPE.member_name(self.ordinal()).unwrap_or_default()
    }
}

/// Declare a keyword enumeration together with its name table.
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Member names, indexed by ordinal.
            pub const NAMES: &'static [&'static str] = &[$($text),+];
            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];
        }

        impl Keyword for $name {
            const TYPE: EnumType = EnumType::$name;

            fn ordinal(self) -> u8 {
                self as u8
            }

            fn from_ordinal(ordinal: u8) -> Option<Self> {
                Self::MEMBERS.get(usize::from(ordinal)).copied()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(self.name())
            }
        }
    };
}

keyword_enum! {
    /// `align-content` keywords.
    AlignContent {
        Center => "center",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Start => "start",
        End => "end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// `align-items` keywords.
    AlignItems {
        Center => "center",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Start => "start",
        End => "end",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

keyword_enum! {
    /// `align-self` keywords; `auto` defers to the parent's `align-items`.
    AlignSelf {
        Auto => "auto",
        Center => "center",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Start => "start",
        End => "end",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

keyword_enum! {
    Direction {
        Ltr => "ltr",
        Rtl => "rtl",
    }
}

keyword_enum! {
    Display {
        Flex => "flex",
        None => "none",
    }
}

keyword_enum! {
    FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_enum! {
    FlexWrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    JustifyContent {
        Center => "center",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

keyword_enum! {
    Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
    }
}

keyword_enum! {
    /// Inherited text alignment.
    TextAlign {
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
    }
}

/// Parse an identifier token naming a member of `kind`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier
/// registered in the enumeration's name table.
pub fn parse_keyword(input: &mut Parser, kind: EnumType) -> Result<KeywordValue, ParseError> {
    match input.next() {
        Ok(Token::Ident(text)) => {
            KeywordValue::from_name(kind, text.as_ref()).ok_or(ParseError::UnexpectedToken)
        }
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_name_tables() {
        assert_eq!(AlignContent::Stretch.ordinal(), 8);
        assert_eq!(EnumType::AlignContent.ordinal_of("stretch"), Some(8));
        assert_eq!(EnumType::JustifyContent.member_name(3), Some("flex-start"));
        assert_eq!(
            AlignSelf::from_ordinal(0).map(Keyword::name),
            Some("auto")
        );
        assert_eq!(Position::from_ordinal(3), None);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            KeywordValue::from_name(EnumType::FlexWrap, "Wrap-Reverse")
                .and_then(KeywordValue::to_keyword::<FlexWrap>),
            Some(FlexWrap::WrapReverse)
        );
    }

    #[test]
    fn keyword_values_reject_out_of_range_ordinals() {
        assert!(KeywordValue::new(EnumType::Direction, 2).is_none());
        let value = KeywordValue::new(EnumType::Direction, 1);
        assert_eq!(value.map(KeywordValue::name), Some("rtl"));
        assert_eq!(
            value.and_then(KeywordValue::to_keyword::<Display>),
            None,
            "a keyword of another enumeration must not convert"
        );
    }
}
