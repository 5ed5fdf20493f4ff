//! CLI argument definitions for the asset audit tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use audit_summary::{DEFAULT_ENDPOINT, DEFAULT_MODEL, SummarySettings};

#[derive(Parser)]
#[command(
    name = "asset-audit",
    version,
    about = "Physical asset inventory audit - scan, reconcile, report",
    long_about = "Audit physical assets against an expected list.\n\n\
                  Import a CSV asset list, scan barcodes (camera decoder, handheld\n\
                  scanner or typed codes), confirm matches and unlisted items, and\n\
                  export a spreadsheet-ready report with an optional AI summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include barcodes and notes in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse an asset list and print it without starting an audit.
    Inspect(InspectArgs),

    /// Run an interactive audit, reading scans and commands from stdin.
    Audit(AuditArgs),

    /// Reconcile a file of recorded scans against an asset list.
    Reconcile(ReconcileArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV asset list (name, barcode, location, serial number).
    #[arg(value_name = "ASSET_LIST")]
    pub asset_list: PathBuf,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// CSV asset list (name, barcode, location, serial number).
    #[arg(value_name = "ASSET_LIST")]
    pub asset_list: PathBuf,

    /// Directory for the exported report (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub summary: SummaryArgs,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// CSV asset list (name, barcode, location, serial number).
    #[arg(value_name = "ASSET_LIST")]
    pub asset_list: PathBuf,

    /// Recorded scans, one code per line, optionally followed by `,<RFC 3339 time>`.
    #[arg(long = "scans", value_name = "FILE")]
    pub scans: PathBuf,

    /// Directory for the exported report (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub summary: SummaryArgs,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Generate an AI summary of the audit after export.
    #[arg(long = "summary")]
    pub enabled: bool,

    /// API key for the summary model (falls back to GEMINI_API_KEY or API_KEY).
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "GEMINI_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Model used for the summary.
    #[arg(long = "model", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the summary API.
    #[arg(long = "summary-endpoint", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl SummaryArgs {
    /// Settings from flags, with the API key falling back to the environment.
    pub fn settings(&self) -> SummarySettings {
        let from_env = SummarySettings::from_env();
        let api_key = self.api_key.clone().or(from_env.api_key.clone());
        from_env
            .with_api_key(api_key)
            .with_model(self.model.clone())
            .with_endpoint(self.endpoint.clone())
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
