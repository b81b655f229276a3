//! Error types shared by config loading, document parsing, and report output.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for specval operations.
pub type Result<T> = std::result::Result<T, SpecvalError>;

#[derive(Error, Debug)]
pub enum SpecvalError {
    #[error("Configuration file {0} not found")]
    ConfigNotFound(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
