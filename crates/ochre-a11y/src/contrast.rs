//! Contrast classification
//!
//! Fixed WCAG thresholds and the large-text policy that selects between
//! them. The [`ContrastReport`] flags are computed for every threshold
//! regardless of actual text size; callers pick the flag that matches
//! their own size/weight classification.

use ochre_color::{contrast_ratio, Rgb};
use serde::{Deserialize, Serialize};

/// AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Bold text is large at 18.67dp (14pt), regular at 24dp (18pt).
pub const LARGE_BOLD_MIN_DP: f64 = 18.67;
pub const LARGE_REGULAR_MIN_DP: f64 = 24.0;

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Level {
    /// Parse from the wire form used in settings ("AA" / "AAA").
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AA" => Some(Self::Aa),
            "AAA" => Some(Self::Aaa),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

/// Compliance of one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// Contrast ratio, in [1,21].
    pub ratio: f64,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    /// Flag for a given level and size class.
    pub fn passes(self, level: Level, large: bool) -> bool {
        match (level, large) {
            (Level::Aa, false) => self.aa,
            (Level::Aa, true) => self.aa_large,
            (Level::Aaa, false) => self.aaa,
            (Level::Aaa, true) => self.aaa_large,
        }
    }
}

/// Classify a pair against all four WCAG thresholds.
pub fn check_contrast(foreground: Rgb, background: Rgb) -> ContrastReport {
    let ratio = contrast_ratio(foreground, background);
    ContrastReport {
        ratio,
        aa: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// WCAG large-text classification for a font size in dp.
pub fn is_large_text(size_dp: f64, bold: bool) -> bool {
    if bold {
        size_dp >= LARGE_BOLD_MIN_DP
    } else {
        size_dp >= LARGE_REGULAR_MIN_DP
    }
}

/// The single ratio threshold that applies to text of this size and
/// weight at the given level.
pub fn required_contrast(size_dp: f64, bold: bool, level: Level) -> f64 {
    match (level, is_large_text(size_dp, bold)) {
        (Level::Aa, true) => AA_LARGE,
        (Level::Aa, false) => AA_NORMAL,
        (Level::Aaa, true) => AAA_LARGE,
        (Level::Aaa, false) => AAA_NORMAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ochre_color::{BLACK, WHITE};

    #[test]
    fn test_check_contrast_reference_gray() {
        let report = check_contrast(Rgb::new(0x76, 0x76, 0x76), WHITE);
        assert!((report.ratio - 4.54).abs() < 0.01);
        assert!(report.aa);
        assert!(report.aa_large);
        assert!(!report.aaa);
        assert!(report.aaa_large);
    }

    #[test]
    fn test_check_contrast_extremes() {
        let max = check_contrast(BLACK, WHITE);
        assert!(max.aa && max.aa_large && max.aaa && max.aaa_large);

        let min = check_contrast(WHITE, WHITE);
        assert_eq!(min.ratio, 1.0);
        assert!(!min.aa && !min.aa_large && !min.aaa && !min.aaa_large);
    }

    #[test]
    fn test_large_text_boundaries() {
        assert!(is_large_text(24.0, false));
        assert!(!is_large_text(23.9, false));
        assert!(is_large_text(18.67, true));
        assert!(!is_large_text(18.0, true));
    }

    #[test]
    fn test_required_contrast() {
        assert_eq!(required_contrast(16.0, false, Level::Aa), 4.5);
        assert_eq!(required_contrast(28.0, false, Level::Aa), 3.0);
        assert_eq!(required_contrast(28.0, false, Level::Aaa), 4.5);
        assert_eq!(required_contrast(16.0, false, Level::Aaa), 7.0);
        assert_eq!(required_contrast(20.0, true, Level::Aa), 3.0);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("AA"), Some(Level::Aa));
        assert_eq!(Level::parse("aaa"), Some(Level::Aaa));
        assert_eq!(Level::parse("AAAA"), None);
        assert_eq!(Level::Aa.as_str(), "AA");
    }

    #[test]
    fn test_report_passes_selector() {
        let report = check_contrast(Rgb::new(0x76, 0x76, 0x76), WHITE);
        assert!(report.passes(Level::Aa, false));
        assert!(report.passes(Level::Aaa, true));
        assert!(!report.passes(Level::Aaa, false));
    }
}
