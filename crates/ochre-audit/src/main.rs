//! ochre-audit - Contrast audit runner
//!
//! Usage:
//!   ochre-audit [--json] [pairs.json]
//!
//! With a file argument, audits the JSON pair list it contains. Without
//! one, audits the built-in role palettes. Exits 1 when any pair fails
//! AA.

use anyhow::{bail, Context, Result};
use ochre_a11y::{audit_pairs, AuditPair, AuditReport};
use ochre_theme::{Palette, Role};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut json_output = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                println!("usage: ochre-audit [--json] [pairs.json]");
                return Ok(());
            }
            _ if arg.starts_with('-') => bail!("unknown flag: {arg}"),
            _ if path.is_none() => path = Some(arg),
            _ => bail!("at most one pairs file may be given"),
        }
    }

    let pairs = match &path {
        Some(path) => load_pairs(path)?,
        None => builtin_pairs(),
    };
    tracing::info!(pairs = pairs.len(), "running contrast audit");

    let report = audit_pairs(&pairs).context("audit failed")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn load_pairs(path: &str) -> Result<Vec<AuditPair>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&data).with_context(|| format!("invalid pair list in {path}"))
}

/// Audit every role palette's shipped pairs.
fn builtin_pairs() -> Vec<AuditPair> {
    let mut pairs = Vec::new();
    for role in Role::ALL {
        for (name, fg, bg) in Palette::for_role(role).contrast_pairs() {
            pairs.push(AuditPair::named(
                format!("{}/{name}", role.as_str()),
                fg.to_hex(),
                bg.to_hex(),
            ));
        }
    }
    pairs
}

fn print_report(report: &AuditReport) {
    for entry in &report.entries {
        let name = entry.name.as_deref().unwrap_or("(unnamed)");
        let verdict = if entry.contrast.aa {
            if entry.contrast.aaa { "AAA" } else { "AA" }
        } else if entry.contrast.aa_large {
            "AA-large only"
        } else {
            "FAIL"
        };
        print!(
            "{name}: {} on {} = {:.2} [{verdict}]",
            entry.foreground, entry.background, entry.contrast.ratio
        );
        match &entry.suggestion {
            Some(suggestion) => println!("  suggest {suggestion}"),
            None => println!(),
        }
    }
    println!();
    println!(
        "{} passed, {} failed of {} pairs",
        report.passed,
        report.failed,
        report.entries.len()
    );
}
