//! Breakpoint classification
//!
//! Width thresholds in density-independent pixels.

use serde::{Deserialize, Serialize};

/// Widths below this are compact phones.
pub const COMPACT_MAX_DP: f64 = 360.0;
/// Tablet threshold.
pub const EXPANDED_MIN_DP: f64 = 768.0;
/// Large tablet / desktop threshold.
pub const WIDE_MIN_DP: f64 = 1024.0;

/// Screen width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Compact,
    Medium,
    Expanded,
    Wide,
}

impl Breakpoint {
    /// Classify a screen width in dp.
    pub fn from_width(width_dp: f64) -> Self {
        if width_dp < COMPACT_MAX_DP {
            Self::Compact
        } else if width_dp < EXPANDED_MIN_DP {
            Self::Medium
        } else if width_dp < WIDE_MIN_DP {
            Self::Expanded
        } else {
            Self::Wide
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Medium => "medium",
            Self::Expanded => "expanded",
            Self::Wide => "wide",
        }
    }

    /// Tablet-class and above.
    pub fn is_tablet(self) -> bool {
        self >= Self::Expanded
    }
}
