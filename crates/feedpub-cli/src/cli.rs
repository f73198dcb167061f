//! CLI argument definitions for feedpub.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `verify` | Validate feed registries against the uploader config rules |
//! | `export` | Run the export pipeline if all provider API keys are present |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Validate checked-in price feed configurations and trigger exports.
#[derive(Debug, Parser)]
#[command(
    name = "feedpub",
    version,
    about = "Price feed configuration validator and export trigger"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify feed registries against the uploader config rules.
    Verify(VerifyArgs),
    /// Run the export pipeline if all provider API keys are present.
    Export,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Built-in registry set to verify.
    #[arg(long, value_enum, default_value_t = RegistrySelector::All)]
    pub which: RegistrySelector,

    /// Verify a registry JSON file instead of the built-ins.
    #[arg(long, conflicts_with = "which")]
    pub registry: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Ndjson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegistrySelector {
    Production,
    Test,
    All,
}
