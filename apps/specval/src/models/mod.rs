//! Shared data models for findings, run tallies, and parsed documents.

pub mod value;

use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single recorded error or warning, located at a file path.
pub struct Finding {
    pub severity: Severity,
    pub location: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

#[derive(Serialize, Debug, Default)]
/// Append-only collector handed to every checker during a run.
///
/// Errors and warnings keep insertion order and are never deduplicated.
pub struct Findings {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, path: &Path, message: impl Into<String>) {
        self.errors.push(Finding {
            severity: Severity::Error,
            location: path.display().to_string(),
            message: message.into(),
        });
    }

    pub fn warning(&mut self, path: &Path, message: impl Into<String>) {
        self.warnings.push(Finding {
            severity: Severity::Warning,
            location: path.display().to_string(),
            message: message.into(),
        });
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Running file counts. Both counters only ever increase.
pub struct RunTally {
    pub total_files: usize,
    pub valid_files: usize,
}

impl RunTally {
    pub fn record(&mut self, valid: bool) {
        self.total_files += 1;
        if valid {
            self.valid_files += 1;
        }
    }

    pub fn invalid_files(&self) -> usize {
        self.total_files - self.valid_files
    }
}

#[derive(Serialize, Debug, Clone)]
/// Per-file outcome as narrated on the console.
pub struct FileOutcome {
    pub category: &'static str,
    pub file: String,
    pub valid: bool,
}

#[derive(Serialize, Debug, Default)]
/// Result of a full validation run.
pub struct RunResult {
    pub files: Vec<FileOutcome>,
    pub summary: RunTally,
    pub findings: Findings,
}

impl RunResult {
    /// A run succeeds iff no error was recorded; warnings and per-file
    /// validity do not enter into it.
    pub fn success(&self) -> bool {
        self.findings.errors().is_empty()
    }
}
