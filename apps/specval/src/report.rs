//! Persisted Markdown report built from a run's findings.

use crate::error::{Result, SpecvalError};
use crate::models::Findings;
use std::fs;
use std::path::Path;

pub const REPORT_TITLE: &str = "# LegalOps Specifications Validation Report";

/// Render the report text. `generated_at` is the project root the run
/// was executed from.
pub fn render_report(findings: &Findings, generated_at: &Path) -> String {
    let mut lines: Vec<String> = vec![
        REPORT_TITLE.to_string(),
        format!("Generated: {}", generated_at.display()),
        String::new(),
    ];

    if !findings.errors().is_empty() {
        lines.push("## Errors".to_string());
        lines.extend(findings.errors().iter().map(|e| format!("- {}", e)));
        lines.push(String::new());
    }

    if !findings.warnings().is_empty() {
        lines.push("## Warnings".to_string());
        lines.extend(findings.warnings().iter().map(|w| format!("- {}", w)));
        lines.push(String::new());
    }

    if findings.is_empty() {
        lines.push("## Status: ✅ All specifications are valid!".to_string());
    }

    lines.join("\n")
}

/// Write the report, replacing any previous one.
pub fn write_report(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| SpecvalError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
