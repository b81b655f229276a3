//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "specval",
    version,
    about = "Validate API and narrative specification documents",
    long_about = "specval checks every document under specs/api (OpenAPI YAML), specs/system and specs/compliance (Markdown), prints a summary and writes specs/validation-report.md.\n\nExit status is 0 when no error was recorded, 1 otherwise. Warnings never fail a run.",
    after_help = "Examples:\n  specval\n  specval --repo-root ../legalops\n  specval --output json"
)]
/// Top-level CLI options. Running with no arguments is the normal case.
pub struct Cli {
    #[arg(
        long,
        help = "Where to start looking for the project root (default: current dir)"
    )]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
