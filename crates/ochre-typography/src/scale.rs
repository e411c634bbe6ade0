//! Font scaling
//!
//! Moderate scaling against a 375dp reference width: sizes grow with the
//! screen, damped to half the raw ratio so tablets don't shout. Results
//! snap to 0.5dp.

use ochre_a11y::{is_large_text, required_contrast, Level};
use serde::{Deserialize, Serialize};

/// Reference device width the base sizes were designed at.
pub const REFERENCE_WIDTH_DP: f64 = 375.0;

/// Damping applied to the raw width ratio.
const MODERATE_FACTOR: f64 = 0.5;

/// Scale a base font size for a screen width.
pub fn scale_font(size_dp: f64, width_dp: f64) -> f64 {
    let raw = size_dp * width_dp / REFERENCE_WIDTH_DP;
    let moderated = size_dp + (raw - size_dp) * MODERATE_FACTOR;
    (moderated * 2.0).round() / 2.0
}

/// Named sizes used by the component layer, in dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    pub caption: f64,
    pub body: f64,
    pub subtitle: f64,
    pub title: f64,
    pub headline: f64,
    pub display: f64,
}

/// Base scale at the reference width.
pub const BASE_SCALE: TypeScale = TypeScale {
    caption: 12.0,
    body: 16.0,
    subtitle: 18.0,
    title: 22.0,
    headline: 28.0,
    display: 36.0,
};

impl TypeScale {
    /// Recompute the scale for a screen width. Pure; callers rerun this
    /// on every dimension change instead of memoizing.
    pub fn for_width(width_dp: f64) -> Self {
        Self {
            caption: scale_font(BASE_SCALE.caption, width_dp),
            body: scale_font(BASE_SCALE.body, width_dp),
            subtitle: scale_font(BASE_SCALE.subtitle, width_dp),
            title: scale_font(BASE_SCALE.title, width_dp),
            headline: scale_font(BASE_SCALE.headline, width_dp),
            display: scale_font(BASE_SCALE.display, width_dp),
        }
    }
}

impl Default for TypeScale {
    fn default() -> Self {
        BASE_SCALE
    }
}

/// A concrete text style, bridging sizing into the contrast policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size_dp: f64,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size_dp: f64, bold: bool) -> Self {
        Self { size_dp, bold }
    }

    /// WCAG large-text classification.
    pub fn is_large(self) -> bool {
        is_large_text(self.size_dp, self.bold)
    }

    /// Contrast ratio this style must meet at the given level.
    pub fn required_contrast(self, level: Level) -> f64 {
        required_contrast(self.size_dp, self.bold, level)
    }
}
