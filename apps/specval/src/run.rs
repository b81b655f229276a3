//! Validation run: discovers documents per category and dispatches checks.
//!
//! Produces a `RunResult` holding per-file outcomes, the tally, and every
//! finding recorded along the way. Files are checked one at a time.

use crate::checks::{check_file, Category};
use crate::config::Rules;
use crate::models::{FileOutcome, Findings, RunResult, RunTally};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Run every category under `specs_dir`.
///
/// `on_file` is invoked before (`None`) and after (`Some(valid)`) each file
/// is checked so callers can narrate progress while the run is going.
pub fn run_validation(
    specs_dir: &Path,
    rules: &Rules,
    mut on_file: impl FnMut(Category, &Path, Option<bool>),
) -> RunResult {
    let mut findings = Findings::new();
    let mut tally = RunTally::default();
    let mut files = Vec::new();

    for category in Category::ALL {
        let dir = specs_dir.join(category.dir());
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "category directory absent, skipping");
            continue;
        }
        for path in discover(&dir, category.patterns(rules)) {
            on_file(category, &path, None);
            let valid = check_file(category, &path, rules, &mut findings);
            tally.record(valid);
            debug!(file = %path.display(), valid, "checked");
            on_file(category, &path, Some(valid));
            files.push(FileOutcome {
                category: category.label(),
                file: path.display().to_string(),
                valid,
            });
        }
    }

    info!(
        total = tally.total_files,
        valid = tally.valid_files,
        errors = findings.errors().len(),
        warnings = findings.warnings().len(),
        "validation finished"
    );
    RunResult {
        files,
        summary: tally,
        findings,
    }
}

/// Files in `dir` matching any of `patterns`, sorted and deduplicated.
fn discover(dir: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let base = Pattern::escape(&dir.to_string_lossy());
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let full = format!("{}/{}", base, pat);
        match glob(&full) {
            Ok(paths) => targets.extend(paths.flatten().filter(|p| p.is_file())),
            Err(e) => warn!(pattern = %pat, error = %e, "invalid file pattern ignored"),
        }
    }
    targets.sort();
    targets.dedup();
    targets
}
