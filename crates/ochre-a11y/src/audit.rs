//! Batch contrast audits
//!
//! Runs the compliance check over a list of foreground/background pairs
//! and attaches a suggested replacement to every pair that misses AA.

use ochre_color::{ColorError, Rgb};
use serde::{Deserialize, Serialize};

use crate::contrast::check_contrast;
use crate::suggest::{suggest_accessible, DEFAULT_TARGET};

/// One pair to audit, as it appears in palette files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPair {
    #[serde(alias = "fg")]
    pub foreground: String,
    #[serde(alias = "bg")]
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuditPair {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            name: None,
        }
    }

    pub fn named(
        name: impl Into<String>,
        foreground: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            name: Some(name.into()),
        }
    }
}

/// Audit outcome for one pair. Colors are normalized to lowercase hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub foreground: String,
    pub background: String,
    pub contrast: crate::ContrastReport,
    /// Present iff the pair fails AA normal-text contrast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Aggregate audit outcome. `passed + failed == entries.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub passed: usize,
    pub failed: usize,
    pub entries: Vec<AuditEntry>,
}

/// Audit every pair, preserving input order.
///
/// Pass/fail counts are against AA normal text; failing pairs carry a
/// suggestion at the default target. The first malformed color string
/// aborts the audit.
pub fn audit_pairs(pairs: &[AuditPair]) -> Result<AuditReport, ColorError> {
    let mut entries = Vec::with_capacity(pairs.len());
    let mut passed = 0;
    let mut failed = 0;

    for pair in pairs {
        let fg = Rgb::parse(&pair.foreground)?;
        let bg = Rgb::parse(&pair.background)?;
        let contrast = check_contrast(fg, bg);

        let suggestion = if contrast.aa {
            passed += 1;
            None
        } else {
            failed += 1;
            Some(suggest_accessible(fg, bg, DEFAULT_TARGET).to_hex())
        };

        entries.push(AuditEntry {
            name: pair.name.clone(),
            foreground: fg.to_hex(),
            background: bg.to_hex(),
            contrast,
            suggestion,
        });
    }

    tracing::debug!(total = entries.len(), passed, failed, "audit complete");
    Ok(AuditReport { passed, failed, entries })
}
