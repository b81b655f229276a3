//! Section, link, and image checks for Markdown documents.

use crate::config::NarrativeRules;
use crate::models::Findings;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

fn is_external(target: &str) -> bool {
    target.starts_with("http")
}

/// Validate one narrative document, appending findings.
///
/// Returns `false` only when the file cannot be read as UTF-8 text. Section,
/// link and image problems are recorded but never make the file invalid.
pub fn validate(path: &Path, rules: &NarrativeRules, findings: &mut Findings) -> bool {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            findings.error(path, format!("Error validating Markdown spec - {}", e));
            return false;
        }
    };
    let base = path.parent().unwrap_or(Path::new(""));

    for section in &rules.required_sections {
        if !content.contains(section.as_str()) {
            findings.warning(path, format!("Missing recommended section '{}'", section));
        }
    }

    // An image with alt text also matches the link pattern; both passes run.
    for cap in LINK_RE.captures_iter(&content) {
        let target = &cap[2];
        if is_external(target) {
            findings.warning(
                path,
                format!("External link '{}' - verify accessibility", target),
            );
        } else if !target.starts_with('#') && !base.join(target).exists() {
            debug!(file = %path.display(), link = target, "broken link");
            findings.error(path, format!("Broken internal link '{}'", target));
        }
    }

    for cap in IMAGE_RE.captures_iter(&content) {
        let target = &cap[2];
        if !is_external(target) && !base.join(target).exists() {
            findings.error(path, format!("Missing image '{}'", target));
        }
    }

    true
}
