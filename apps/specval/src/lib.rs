//! specval core library.
//!
//! This crate exposes programmatic APIs for validating a `specs/` tree of
//! OpenAPI documents and Markdown design/compliance documents.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Project-root discovery and rule configuration.
//! - `checks`: Structured and narrative document checks.
//! - `run`: Per-category discovery and the validation run.
//! - `report`: Persisted Markdown report.
//! - `models`: Findings, tallies, and the structured document tree.
//! - `output`: Human/JSON console printers.
//! - `error`: Crate error type.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod run;
pub mod utils;
