//! Accessible-color suggestion
//!
//! Greedy channel-stepping search for a readable variant of a color
//! against a fixed background. The search policy is part of the
//! observable contract: callers snapshot suggested colors, so the exact
//! path (step size, per-step clamp, direction rule, fallback) must stay
//! stable.

use ochre_color::{contrast_ratio, Rgb, BLACK, WHITE};

/// Default target ratio (AA, normal text).
pub const DEFAULT_TARGET: f64 = 4.5;

/// Per-iteration channel step.
const STEP: u8 = 5;

/// Iteration budget before falling back to pure white/black.
const MAX_STEPS: u32 = 100;

/// Find a variant of `foreground` that reaches `target` contrast
/// against `background`.
///
/// Lightens when the background is dark (luminance < 0.5), darkens
/// otherwise. All three channels move together by ±5, saturating at the
/// channel bounds on every step. The ratio is checked before each step,
/// so an already-passing input is returned unchanged.
pub fn suggest_accessible(foreground: Rgb, background: Rgb, target: f64) -> Rgb {
    let lighten = background.luminance() < 0.5;

    let mut current = foreground;
    for _ in 0..MAX_STEPS {
        if contrast_ratio(current, background) >= target {
            return current;
        }
        current = step(current, lighten);
    }

    if contrast_ratio(current, background) >= target {
        return current;
    }

    // Even the saturated endpoint missed the target.
    tracing::debug!(
        foreground = %foreground,
        background = %background,
        target,
        "suggestion budget exhausted, falling back to extreme"
    );
    if lighten { WHITE } else { BLACK }
}

fn step(color: Rgb, lighten: bool) -> Rgb {
    let adjust = |c: u8| {
        if lighten {
            c.saturating_add(STEP)
        } else {
            c.saturating_sub(STEP)
        }
    };
    Rgb::new(adjust(color.r), adjust(color.g), adjust(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::check_contrast;

    #[test]
    fn test_passing_input_returned_unchanged() {
        let fg = BLACK;
        assert_eq!(suggest_accessible(fg, WHITE, DEFAULT_TARGET), fg);
    }

    #[test]
    fn test_darkens_on_light_background() {
        let fg = Rgb::new(0xaa, 0xaa, 0xaa);
        let suggested = suggest_accessible(fg, WHITE, DEFAULT_TARGET);
        assert!(contrast_ratio(suggested, WHITE) >= DEFAULT_TARGET);
        assert!(suggested.r <= fg.r && suggested.g <= fg.g && suggested.b <= fg.b);
    }

    #[test]
    fn test_lightens_on_dark_background() {
        let bg = Rgb::new(0x10, 0x10, 0x18);
        let fg = Rgb::new(0x40, 0x40, 0x40);
        let suggested = suggest_accessible(fg, bg, DEFAULT_TARGET);
        assert!(contrast_ratio(suggested, bg) >= DEFAULT_TARGET);
        assert!(suggested.r >= fg.r && suggested.g >= fg.g && suggested.b >= fg.b);
    }

    #[test]
    fn test_idempotent_once_passing() {
        let fg = Rgb::new(0x88, 0x99, 0xaa);
        let first = suggest_accessible(fg, WHITE, DEFAULT_TARGET);
        let second = suggest_accessible(first, WHITE, DEFAULT_TARGET);
        assert_eq!(first, second);
        assert!(contrast_ratio(second, WHITE) >= DEFAULT_TARGET);
    }

    #[test]
    fn test_unreachable_target_falls_back_to_extreme() {
        // 21.0 is only reachable for pure black on pure white.
        let fg = Rgb::new(0x80, 0x80, 0x80);
        assert_eq!(suggest_accessible(fg, WHITE, 21.0), BLACK);
        assert_eq!(suggest_accessible(fg, BLACK, 21.0), WHITE);
    }

    #[test]
    fn test_channels_saturate_per_step() {
        // An off-white start must clamp at 255 without wrapping.
        let fg = Rgb::new(0xfe, 0x01, 0xfe);
        let bg = BLACK;
        let suggested = suggest_accessible(fg, bg, DEFAULT_TARGET);
        assert!(check_contrast(suggested, bg).aa);
    }
}
