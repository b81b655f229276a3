//! Per-document checks.
//!
//! Each checker appends to a shared `Findings` and returns whether the file
//! counts as valid. Structured checks can fail a file; narrative checks only
//! fail on unreadable input.

pub mod narrative;
pub mod structured;

use crate::config::Rules;
use crate::models::Findings;
use std::path::Path;

/// The three fixed document categories, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Api,
    System,
    Compliance,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Api, Category::System, Category::Compliance];

    /// Subdirectory of the specs root.
    pub fn dir(self) -> &'static str {
        match self {
            Category::Api => "api",
            Category::System => "system",
            Category::Compliance => "compliance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Api => "API",
            Category::System => "system",
            Category::Compliance => "compliance",
        }
    }

    pub fn patterns(self, rules: &Rules) -> &[String] {
        match self {
            Category::Api => &rules.api.patterns,
            Category::System => &rules.system.patterns,
            Category::Compliance => &rules.compliance.patterns,
        }
    }
}

/// Run the checker bound to `category` on one file.
pub fn check_file(category: Category, path: &Path, rules: &Rules, findings: &mut Findings) -> bool {
    match category {
        Category::Api => structured::validate(path, &rules.api, findings),
        Category::System => narrative::validate(path, &rules.system, findings),
        Category::Compliance => narrative::validate(path, &rules.compliance, findings),
    }
}
