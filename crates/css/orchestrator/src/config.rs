//! Configuration for the style engine.
//!
//! Controls the geometry engine's initial values and the root text style every
//! tree inherits from. Configuration can be loaded from environment variables
//! or constructed programmatically.

use std::env;

use css_values_units::{EnumType, KeywordValue, TextAlign};

/// Runtime configuration for a style tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleEngineConfig {
    /// Use web flexbox defaults (row direction, stretch content, shrink 1)
    pub use_web_defaults: bool,
    /// Font size of a root node, in pixels
    pub default_font_size_px: f32,
    /// Line-height multiplier of a root node
    pub default_line_height: f32,
    /// Text alignment of a root node
    pub default_text_align: TextAlign,
}

impl StyleEngineConfig {
    /// Construct a new `StyleEngineConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `use_web_defaults` - Whether the geometry engine starts from web flexbox defaults
    /// * `default_font_size_px` - Root font size in pixels (non-positive falls back to 16)
    /// * `default_line_height` - Root line-height multiplier (non-positive falls back to 1.2)
    /// * `default_text_align` - Root text alignment
    ///
    /// # Returns
    ///
    /// A new `StyleEngineConfig` instance with the specified settings
    #[inline]
    #[must_use]
    pub const fn new(
        use_web_defaults: bool,
        default_font_size_px: f32,
        default_line_height: f32,
        default_text_align: TextAlign,
    ) -> Self {
        let font_size = if default_font_size_px > 0.0 {
            default_font_size_px
        } else {
            DEFAULT_FONT_SIZE_PX
        };
        let line_height = if default_line_height > 0.0 {
            default_line_height
        } else {
            DEFAULT_LINE_HEIGHT
        };
        Self {
            use_web_defaults,
            default_font_size_px: font_size,
            default_line_height: line_height,
            default_text_align,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `STYLE_WEB_DEFAULTS`: Set to "0" to use non-web defaults (default: enabled)
    /// - `STYLE_FONT_SIZE`: Root font size in pixels (default: 16)
    /// - `STYLE_LINE_HEIGHT`: Root line-height multiplier (default: 1.2)
    /// - `STYLE_TEXT_ALIGN`: Root text alignment keyword (default: start)
    ///
    /// Malformed values are logged and replaced by their defaults.
    ///
    /// # Returns
    ///
    /// A new `StyleEngineConfig` instance populated from environment variables
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let use_web_defaults = env::var("STYLE_WEB_DEFAULTS").ok().as_deref() != Some("0");
        let font_size = read_positive("STYLE_FONT_SIZE").unwrap_or(DEFAULT_FONT_SIZE_PX);
        let line_height = read_positive("STYLE_LINE_HEIGHT").unwrap_or(DEFAULT_LINE_HEIGHT);
        let text_align = env::var("STYLE_TEXT_ALIGN")
            .ok()
            .and_then(|name| {
                let parsed = KeywordValue::from_name(EnumType::TextAlign, name.trim())
                    .and_then(KeywordValue::to_keyword::<TextAlign>);
                if parsed.is_none() {
                    log::warn!(target: "style.config", "ignoring STYLE_TEXT_ALIGN={name:?}");
                }
                parsed
            })
            .unwrap_or(TextAlign::Start);
        Self::new(use_web_defaults, font_size, line_height, text_align)
    }
}

impl Default for StyleEngineConfig {
    #[inline]
    fn default() -> Self {
        Self::new(true, DEFAULT_FONT_SIZE_PX, DEFAULT_LINE_HEIGHT, TextAlign::Start)
    }
}

/// Root font size when none is configured.
const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Root line-height multiplier when none is configured.
const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// Read a positive finite number from `variable`, warning when it is malformed.
fn read_positive(variable: &str) -> Option<f32> {
    let raw = env::var(variable).ok()?;
    let parsed = raw
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0);
    if parsed.is_none() {
        log::warn!(target: "style.config", "ignoring {variable}={raw:?}");
    }
    parsed
}
