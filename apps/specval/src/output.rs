//! Console rendering for a validation run.
//!
//! Supports `human` (default) and `json` outputs. Human output narrates each
//! file as it is checked and ends with a summary and the finding lists; the
//! JSON form is the whole `RunResult` printed once at the end.

use crate::checks::Category;
use crate::models::{Finding, RunResult};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

const RULE: &str = "==================================================";

fn use_colors(output: &str) -> bool {
    output != "json" && crate::utils::colors_enabled()
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Api => "📋",
        Category::System => "🏗️ ",
        Category::Compliance => "⚖️ ",
    }
}

/// Print the run banner (human output only).
pub fn print_banner(output: &str) {
    if output == "json" {
        return;
    }
    println!("🔍 Validating LegalOps Specifications...");
    println!("{}", RULE);
}

/// Narrate one file: the heading line before the check, the marker after.
pub fn print_file(output: &str, category: Category, path: &Path, valid: Option<bool>) {
    if output == "json" {
        return;
    }
    let color = use_colors(output);
    match valid {
        None => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            println!(
                "{} Validating {} spec: {}",
                category_icon(category),
                category.label(),
                name
            );
        }
        Some(true) if color => println!("  {}", "✅ Valid".green()),
        Some(true) => println!("  ✅ Valid"),
        Some(false) if color => println!("  {}", "❌ Invalid".red()),
        Some(false) => println!("  ❌ Invalid"),
    }
}

/// Print the end-of-run summary and finding lists.
pub fn print_summary(res: &RunResult, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_run_json(res)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            println!("\n{}", RULE);
            if color {
                println!("{}", "📊 Validation Summary:".bold());
            } else {
                println!("📊 Validation Summary:");
            }
            println!("  Total files: {}", res.summary.total_files);
            println!("  Valid files: {}", res.summary.valid_files);
            println!("  Invalid files: {}", res.summary.invalid_files());

            let errors = res.findings.errors();
            if !errors.is_empty() {
                let head = format!("\n❌ Errors ({}):", errors.len());
                if color {
                    println!("{}", head.red().bold());
                } else {
                    println!("{}", head);
                }
                print_list(errors);
            }
            let warnings = res.findings.warnings();
            if !warnings.is_empty() {
                let head = format!("\n⚠️  Warnings ({}):", warnings.len());
                if color {
                    println!("{}", head.yellow().bold());
                } else {
                    println!("{}", head);
                }
                print_list(warnings);
            }
        }
    }
}

fn print_list(items: &[Finding]) {
    for it in items {
        println!("  • {}", it);
    }
}

/// Final line pointing at the persisted report.
pub fn print_report_location(output: &str, path: &Path) {
    if output == "json" {
        return;
    }
    println!("\n📄 Validation report saved to: {}", path.display());
}

/// Compose the run JSON object (pure) for testing purposes.
pub fn compose_run_json(res: &RunResult) -> JsonVal {
    serde_json::json!({
        "files": res.files,
        "summary": {
            "total_files": res.summary.total_files,
            "valid_files": res.summary.valid_files,
            "invalid_files": res.summary.invalid_files(),
        },
        "errors": res.findings.errors(),
        "warnings": res.findings.warnings(),
        "success": res.success(),
    })
}
