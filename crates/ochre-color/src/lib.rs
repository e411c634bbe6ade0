//! Ochre Color Model
//!
//! Parsing and photometry for the sRGB colors used across the UI
//! foundation: hex and `rgb()`/`rgba()` notation in, WCAG relative
//! luminance and contrast ratios out.

mod luminance;
mod parse;

pub use luminance::contrast_ratio;

/// An sRGB color with 8-bit channels.
///
/// Values are immutable and cheap to copy; alpha is not modeled
/// (an `rgba()` input has its alpha validated and discarded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not 3/6-digit hex or `rgb()`/`rgba()` notation.
    #[error("unsupported color format: {0:?}")]
    UnsupportedFormat(String),

    /// A channel or alpha component failed to parse or is out of range.
    #[error("invalid component {component:?} in color {input:?}")]
    InvalidComponent { input: String, component: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for s in ["#000000", "#ffffff", "#767676", "#1e293b", "#a6e3a1"] {
            let c = Rgb::parse(s).unwrap();
            assert_eq!(Rgb::parse(&c.to_hex()), Ok(c));
            assert_eq!(c.to_hex(), s);
        }
    }

    #[test]
    fn test_display_matches_hex() {
        let c = Rgb::new(18, 52, 86);
        assert_eq!(c.to_string(), c.to_hex());
        assert_eq!(c.to_hex(), "#123456");
    }
}
