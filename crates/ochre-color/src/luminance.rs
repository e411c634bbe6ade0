//! WCAG 2.1 photometry
//!
//! Relative luminance and contrast ratio over sRGB triples.

use crate::Rgb;

/// Linearize an sRGB channel normalized to [0,1].
/// v <= 0.03928: v/12.92, else ((v+0.055)/1.055)^2.4
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// WCAG 2.1 relative luminance, in [0,1].
    /// L = 0.2126 R + 0.7152 G + 0.0722 B over linearized channels.
    pub fn luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

/// WCAG contrast ratio between two colors, in [1,21].
/// (lighter + 0.05) / (darker + 0.05); symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
