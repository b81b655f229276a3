//! specval CLI binary entry point.
//! Moves to the project root, runs every category, prints results, and
//! writes the report.

use clap::Parser;
use specval::cli::Cli;
use specval::config::{self, REPORT_PATH, SPECS_DIR};
use specval::error::SpecvalError;
use specval::utils::{error_prefix, note_prefix};
use specval::{output, report, run};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SPECVAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed; keep going either way.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn fail(msg: impl std::fmt::Display) -> ExitCode {
    eprintln!("{} {}", error_prefix(), msg);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let out = cli.output.unwrap_or_else(|| "human".to_string());

    let start = match cli.repo_root {
        Some(r) => PathBuf::from(r),
        None => match std::env::current_dir() {
            Ok(d) => d,
            Err(e) => return fail(e),
        },
    };
    let start = match start.canonicalize() {
        Ok(p) => p,
        Err(e) => return fail(format!("{}: {}", start.display(), e)),
    };
    let root = config::detect_project_root(&start);
    // Document links are resolved relative to the project root.
    if let Err(e) = std::env::set_current_dir(&root) {
        return fail(format!("cannot enter {}: {}", root.display(), e));
    }
    tracing::debug!(root = %root.display(), "project root");

    let specs_dir = Path::new(SPECS_DIR);
    let cfg = match config::load_config(specs_dir) {
        Ok(c) => c,
        Err(SpecvalError::ConfigNotFound(p)) => {
            eprintln!(
                "{} Configuration file {} not found; using defaults.",
                note_prefix(),
                p.display()
            );
            Default::default()
        }
        Err(e) => {
            eprintln!(
                "{} Error loading configuration: {}; using defaults.",
                error_prefix(),
                e
            );
            Default::default()
        }
    };
    let rules = config::resolve_rules(&cfg);

    output::print_banner(&out);
    let result = run::run_validation(specs_dir, &rules, |category, path, valid| {
        output::print_file(&out, category, path, valid)
    });
    output::print_summary(&result, &out);

    let report_path = Path::new(REPORT_PATH);
    let text = report::render_report(&result.findings, &root);
    if let Err(e) = report::write_report(report_path, &text) {
        return fail(e);
    }
    output::print_report_location(&out, report_path);

    if result.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
