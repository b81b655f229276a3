//! Structural checks for API description documents (YAML or JSON).

use crate::config::StructuredRules;
use crate::error::Result;
use crate::models::value::{truthy, Value};
use crate::models::Findings;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Validate one structured document, appending findings.
///
/// Returns `false` only on a fatal failure: the file could not be read or
/// parsed, or a required top-level field is absent. Missing `info.title` /
/// `info.version` are recorded as errors but leave the file valid.
pub fn validate(path: &Path, rules: &StructuredRules, findings: &mut Findings) -> bool {
    let doc = match parse(path) {
        Ok(v) => v,
        Err(e) => {
            findings.error(path, format!("Error validating API spec - {}", e));
            return false;
        }
    };

    for field in &rules.required_fields {
        if !doc.has(field) {
            debug!(file = %path.display(), field = %field, "required field missing");
            findings.error(path, format!("Missing required field '{}'", field));
            return false;
        }
    }

    // Unquoted `openapi: 3.0` parses as a number; compare its text.
    let version_ok = doc
        .get("openapi")
        .and_then(Value::as_text)
        .is_some_and(|v| v.starts_with(rules.version_prefix.as_str()));
    if !version_ok {
        findings.warning(
            path,
            format!("OpenAPI version should be {}.x", rules.version_prefix),
        );
    }

    let info = doc.get_mapping("info");
    if !truthy(info.and_then(|m| m.get("title"))) {
        findings.error(path, "Missing API title");
    }
    if !truthy(info.and_then(|m| m.get("version"))) {
        findings.error(path, "Missing API version");
    }

    if !truthy(doc.get("paths")) {
        findings.warning(path, "No API paths defined");
    }

    true
}

/// Parse by extension: `.yaml`/`.yml` as YAML, anything else as JSON.
fn parse(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        Ok(serde_yaml::from_str::<serde_yaml::Value>(&data)?.into())
    } else {
        Ok(serde_json::from_str::<serde_json::Value>(&data)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn check(name: &str, body: &str) -> (bool, Findings, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let p = dir.path().join(name);
        fs::write(&p, body).unwrap();
        let mut f = Findings::new();
        let ok = validate(&p, &StructuredRules::default(), &mut f);
        (ok, f, p)
    }

    #[test]
    fn test_complete_document_has_no_findings() {
        let (ok, f, _) = check(
            "a.yaml",
            "openapi: 3.0.3\ninfo:\n  title: Cases\n  version: 1.0.0\npaths:\n  /cases:\n    get: {}\n",
        );
        assert!(ok);
        assert!(f.is_empty());
    }

    #[test]
    fn test_old_version_missing_info_version_empty_paths() {
        let (ok, f, p) = check(
            "a.yaml",
            "openapi: \"2.0\"\ninfo:\n  title: X\npaths: {}\n",
        );
        assert!(ok);
        let errors: Vec<String> = f.errors().iter().map(|e| e.to_string()).collect();
        let warnings: Vec<String> = f.warnings().iter().map(|w| w.to_string()).collect();
        assert_eq!(errors, vec![format!("{}: Missing API version", p.display())]);
        assert_eq!(
            warnings,
            vec![
                format!("{}: OpenAPI version should be 3.0.x", p.display()),
                format!("{}: No API paths defined", p.display()),
            ]
        );
    }

    #[test]
    fn test_missing_paths_is_fatal_and_alone() {
        let (ok, f, p) = check("a.yaml", "openapi: 3.0.0\ninfo:\n  title: X\n");
        assert!(!ok);
        assert_eq!(f.errors().len(), 1);
        assert_eq!(
            f.errors()[0].to_string(),
            format!("{}: Missing required field 'paths'", p.display())
        );
        assert!(f.warnings().is_empty());
    }

    #[test]
    fn test_required_field_check_short_circuits() {
        let (ok, f, _) = check("a.yaml", "description: nothing here\n");
        assert!(!ok);
        assert_eq!(f.errors().len(), 1);
        assert!(f.errors()[0].message.contains("'openapi'"));
    }

    #[test]
    fn test_parse_failure_is_fatal() {
        let (ok, f, p) = check("a.yaml", "openapi: [3.0\ninfo: {\n");
        assert!(!ok);
        assert_eq!(f.errors().len(), 1);
        assert!(f.errors()[0]
            .to_string()
            .starts_with(&format!("{}: Error validating API spec - ", p.display())));
    }

    #[test]
    fn test_json_document_by_extension() {
        let (ok, f, _) = check(
            "a.json",
            r#"{"openapi": "3.0.1", "info": {"version": "2"}, "paths": {"/x": {}}}"#,
        );
        assert!(ok);
        assert_eq!(f.errors().len(), 1);
        assert_eq!(f.errors()[0].message, "Missing API title");
        assert!(f.warnings().is_empty());
    }

    #[test]
    fn test_unquoted_numeric_version_matches_prefix() {
        let (ok, f, _) = check(
            "a.yaml",
            "openapi: 3.0\ninfo:\n  title: X\n  version: 1\npaths:\n  /x: {}\n",
        );
        assert!(ok);
        assert!(f.is_empty());

        let (_, f, _) = check(
            "b.yaml",
            "openapi: 2.0\ninfo:\n  title: X\n  version: 1\npaths:\n  /x: {}\n",
        );
        assert_eq!(f.warnings().len(), 1);
        assert_eq!(f.warnings()[0].message, "OpenAPI version should be 3.0.x");
    }

    #[test]
    fn test_empty_yaml_file_misses_first_field() {
        let (ok, f, _) = check("a.yml", "");
        assert!(!ok);
        assert_eq!(f.errors()[0].message, "Missing required field 'openapi'");
    }
}
