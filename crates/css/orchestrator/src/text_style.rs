//! Inherited text style and the font metrics behind font-relative lengths.

use core::fmt;
use std::rc::Rc;

use crate::config::StyleEngineConfig;
use css_values_units::{FontRelativeMetrics, TextAlign};

/// Natural metrics of a font at its native size.
pub trait FontMetrics: fmt::Debug {
    /// Size in pixels the other metrics are measured at.
    fn native_size_px(&self) -> f32;

    /// Horizontal advance of `character`.
    fn advance(&self, character: char) -> f32;

    /// Ink height of `character`.
    fn glyph_height(&self, character: char) -> f32;

    /// Distance between consecutive baselines.
    fn line_height(&self) -> f32;
}

/// Shared font handle. Handles compare by identity.
pub type FontHandle = Rc<dyn FontMetrics>;

/// Deterministic metrics used when the host supplies no font.
///
/// Narrow glyphs advance half an em, wide glyphs a full em; `x` is half an em tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedFontMetrics {
    pub size_px: f32,
}

impl FixedFontMetrics {
    pub const fn new(size_px: f32) -> Self {
        Self { size_px }
    }

    pub fn handle(size_px: f32) -> FontHandle {
        Rc::new(Self::new(size_px))
    }
}

impl FontMetrics for FixedFontMetrics {
    fn native_size_px(&self) -> f32 {
        self.size_px
    }

    fn advance(&self, character: char) -> f32 {
        if is_wide(character) {
            self.size_px
        } else {
            self.size_px * 0.5
        }
    }

    fn glyph_height(&self, character: char) -> f32 {
        if is_wide(character) {
            self.size_px
        } else {
            self.size_px * 0.5
        }
    }

    fn line_height(&self) -> f32 {
        self.size_px * 1.2
    }
}

/// East Asian wide ranges starting at CJK Radicals.
const fn is_wide(character: char) -> bool {
    matches!(character, '\u{2E80}'..='\u{A4CF}' | '\u{AC00}'..='\u{D7A3}' | '\u{F900}'..='\u{FAFF}' | '\u{FF00}'..='\u{FF60}')
}

/// Resolved text-defining values of a node.
#[derive(Clone, Debug)]
pub struct ComputedTextStyle {
    pub font: FontHandle,
    pub font_size_px: f32,
    /// Line-height multiplier of the font size.
    pub line_height: f32,
    pub text_align: TextAlign,
}

impl ComputedTextStyle {
    /// Text style a parentless node inherits.
    pub fn root(config: &StyleEngineConfig, font: FontHandle) -> Self {
        Self {
            font,
            font_size_px: config.default_font_size_px,
            line_height: config.default_line_height,
            text_align: config.default_text_align,
        }
    }

    /// Factor from the font's native metrics to this style's pixel size.
    pub fn rendering_scale(&self) -> f32 {
        let native = self.font.native_size_px();
        if native > 0.0 {
            self.font_size_px / native
        } else {
            1.0
        }
    }

    /// Line height in pixels for text layout.
    pub fn line_height_px(&self) -> f32 {
        self.font.line_height() * self.rendering_scale() * self.line_height
    }
}

impl PartialEq for ComputedTextStyle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.font, &other.font)
            && self.font_size_px.to_bits() == other.font_size_px.to_bits()
            && self.line_height.to_bits() == other.line_height.to_bits()
            && self.text_align == other.text_align
    }
}

impl FontRelativeMetrics for ComputedTextStyle {
    fn font_size_px(&self) -> f32 {
        self.font_size_px
    }

    fn zero_advance_px(&self) -> f32 {
        self.font.advance('0') * self.rendering_scale()
    }

    fn x_height_px(&self) -> f32 {
        self.font.glyph_height('x') * self.rendering_scale()
    }

    fn ideographic_advance_px(&self) -> f32 {
        self.font.advance('水') * self.rendering_scale()
    }

    fn line_height_px(&self) -> f32 {
        Self::line_height_px(self)
    }
}
