//! Ochre Accessibility
//!
//! WCAG 2.1 contrast compliance for the UI foundation.
//!
//! Features:
//! - Contrast classification against the AA/AAA thresholds
//! - Large-text and required-ratio policy
//! - Greedy accessible-color suggestion
//! - Batch audits over palette pairs
//!
//! Every operation here is a synchronous pure function; the only failure
//! mode is a malformed color string, surfaced as [`ColorError`].

pub mod audit;
pub mod contrast;
pub mod suggest;

pub use audit::{audit_pairs, AuditEntry, AuditPair, AuditReport};
pub use contrast::{check_contrast, is_large_text, required_contrast, ContrastReport, Level};
pub use suggest::{suggest_accessible, DEFAULT_TARGET};

pub use ochre_color::{contrast_ratio, ColorError, Rgb};
