//! Project-root discovery and rule configuration.
//!
//! specval reads `spec-config.yaml|yml|toml` from the specs directory and
//! merges it with built-in defaults to produce per-category `Rules`.
//! Defaults:
//! - `api`: patterns `*.yaml`, required fields `openapi`, `info`, `paths`,
//!   version prefix `3.0`
//! - `system` / `compliance`: patterns `*.md`, required sections
//!   `# Overview`, `## Requirements`, `## Implementation`
//!
//! Overrides precedence: config file > defaults. A missing or malformed
//! config file never aborts a run; callers fall back to `SpecConfig::default()`.

use crate::error::{Result, SpecvalError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the documents, relative to the project root.
pub const SPECS_DIR: &str = "specs";
/// Report location, relative to the project root.
pub const REPORT_PATH: &str = "specs/validation-report.md";

const CONFIG_NAMES: [&str; 3] = ["spec-config.yaml", "spec-config.yml", "spec-config.toml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule parameters for the structured (API) category under `api:`.
pub struct StructuredCfg {
    pub patterns: Option<Vec<String>>,
    pub required_fields: Option<Vec<String>>,
    pub version_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule parameters for a narrative category under `system:` or `compliance:`.
pub struct NarrativeCfg {
    pub patterns: Option<Vec<String>>,
    pub required_sections: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `spec-config.yaml`.
pub struct SpecConfig {
    #[serde(default)]
    pub api: Option<StructuredCfg>,
    #[serde(default)]
    pub system: Option<NarrativeCfg>,
    #[serde(default)]
    pub compliance: Option<NarrativeCfg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved rules for structured documents.
pub struct StructuredRules {
    pub patterns: Vec<String>,
    pub required_fields: Vec<String>,
    pub version_prefix: String,
}

impl Default for StructuredRules {
    fn default() -> Self {
        Self {
            patterns: vec!["*.yaml".to_string()],
            required_fields: ["openapi", "info", "paths"].map(String::from).to_vec(),
            version_prefix: "3.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved rules for narrative documents.
pub struct NarrativeRules {
    pub patterns: Vec<String>,
    pub required_sections: Vec<String>,
}

impl Default for NarrativeRules {
    fn default() -> Self {
        Self {
            patterns: vec!["*.md".to_string()],
            required_sections: ["# Overview", "## Requirements", "## Implementation"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fully-resolved rules used by the run after applying defaults.
pub struct Rules {
    pub api: StructuredRules,
    pub system: NarrativeRules,
    pub compliance: NarrativeRules,
}

/// Walk upward from `start` to detect the project root.
///
/// The nearest ancestor holding a `specs/` directory wins; otherwise the
/// nearest one holding `.git`; otherwise `start` itself.
pub fn detect_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(SPECS_DIR).is_dir())
        .or_else(|| start.ancestors().find(|dir| dir.join(".git").exists()))
        .unwrap_or(start)
        .to_path_buf()
}

/// Load `SpecConfig` from the first `spec-config.*` present in `specs_dir`.
pub fn load_config(specs_dir: &Path) -> Result<SpecConfig> {
    for name in CONFIG_NAMES {
        let p = specs_dir.join(name);
        if !p.is_file() {
            continue;
        }
        let s = fs::read_to_string(&p)?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str(&s)?
        } else {
            // An empty YAML document means "no settings".
            serde_yaml::from_str::<Option<SpecConfig>>(&s)?.unwrap_or_default()
        };
        return Ok(cfg);
    }
    Err(SpecvalError::ConfigNotFound(specs_dir.join(CONFIG_NAMES[0])))
}

/// Resolve effective `Rules` by filling unset keys with defaults.
pub fn resolve_rules(cfg: &SpecConfig) -> Rules {
    let api_def = StructuredRules::default();
    let api = cfg.api.clone().unwrap_or_default();
    Rules {
        api: StructuredRules {
            patterns: api.patterns.unwrap_or(api_def.patterns),
            required_fields: api.required_fields.unwrap_or(api_def.required_fields),
            version_prefix: api.version_prefix.unwrap_or(api_def.version_prefix),
        },
        system: narrative_rules(cfg.system.as_ref()),
        compliance: narrative_rules(cfg.compliance.as_ref()),
    }
}

fn narrative_rules(cfg: Option<&NarrativeCfg>) -> NarrativeRules {
    let def = NarrativeRules::default();
    let Some(c) = cfg else {
        return def;
    };
    NarrativeRules {
        patterns: c.patterns.clone().unwrap_or(def.patterns),
        required_sections: c.required_sections.clone().unwrap_or(def.required_sections),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, SpecvalError::ConfigNotFound(_)));
        assert_eq!(resolve_rules(&SpecConfig::default()), Rules::default());
    }

    #[test]
    fn test_load_yaml_and_fill_defaults() {
        let dir = tempdir().unwrap();
        let mut f = fs::File::create(dir.path().join("spec-config.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r##"
api:
  version_prefix: "3.1"
compliance:
  required_sections: ["# Scope"]
project: legalops
            "##
        )
        .unwrap();

        let cfg = load_config(dir.path()).unwrap();
        let rules = resolve_rules(&cfg);
        assert_eq!(rules.api.version_prefix, "3.1");
        assert_eq!(rules.api.required_fields, vec!["openapi", "info", "paths"]);
        assert_eq!(rules.compliance.required_sections, vec!["# Scope"]);
        assert_eq!(rules.compliance.patterns, vec!["*.md"]);
        assert_eq!(rules.system, NarrativeRules::default());
    }

    #[test]
    fn test_load_toml() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("spec-config.toml"),
            "[api]\npatterns = [\"*.yaml\", \"*.json\"]\n",
        )
        .unwrap();
        let rules = resolve_rules(&load_config(dir.path()).unwrap());
        assert_eq!(rules.api.patterns, vec!["*.yaml", "*.json"]);
    }

    #[test]
    fn test_malformed_and_empty_yaml() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("spec-config.yaml"), "api: [unclosed\n").unwrap();
        assert!(matches!(
            load_config(dir.path()).unwrap_err(),
            SpecvalError::Yaml(_)
        ));

        fs::write(dir.path().join("spec-config.yaml"), "").unwrap();
        let cfg = load_config(dir.path()).unwrap();
        assert!(cfg.api.is_none());
    }

    #[test]
    fn test_detect_project_root_walks_up() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("specs/api")).unwrap();
        let nested = root.join("tools/bin");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_project_root(&nested), root.to_path_buf());
        assert_eq!(detect_project_root(root), root.to_path_buf());
    }

    #[test]
    fn test_specs_dir_preferred_over_nearer_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("specs")).unwrap();
        let vendored = root.join("vendor/lib");
        fs::create_dir_all(vendored.join(".git")).unwrap();
        let start = vendored.join("src");
        fs::create_dir_all(&start).unwrap();
        assert_eq!(detect_project_root(&start), root.to_path_buf());
    }

    #[test]
    fn test_git_used_when_no_specs_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let start = root.join("docs");
        fs::create_dir_all(&start).unwrap();
        assert_eq!(detect_project_root(&start), root.to_path_buf());
    }
}
