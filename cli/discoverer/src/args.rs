//! CLI argument definitions for rf-discoverer.

use clap::{Parser, ValueEnum};
use rf_cli_common::LogLevel;
use std::path::PathBuf;

/// Ref admission scan over a metadata snapshot.
///
/// Reads branches, pull requests and commit dates from a JSON snapshot,
/// applies the age and title filters, and writes admitted refs to stdout
/// (JSONL by default, one ref per line).
///
/// ## Examples
///
/// Drop refs without commits in the last 30 days:
///   rf-discoverer --snapshot repo.json --retention-days 30
///
/// Only build release pull requests:
///   rf-discoverer --snapshot repo.json --title-regex '^\[RELEASE\].*'
#[derive(Parser, Debug)]
#[command(name = "rf-discoverer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the metadata snapshot (JSON)
    #[arg(short, long, env = "RF_SNAPSHOT")]
    pub snapshot: PathBuf,

    // === Filter Options ===
    /// Retention window in days (blank, invalid or 0 disables the age filter)
    #[arg(long, env = "RF_RETENTION_DAYS", default_value = "")]
    pub retention_days: String,

    /// Pull request title pattern, matched against the whole title ('.*' disables)
    #[arg(long, env = "RF_TITLE_REGEX", default_value = rf_discoverer::MATCH_ALL_PATTERN)]
    pub title_regex: String,

    // === Discovery Options ===
    /// Maximum number of refs to output (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub max_refs: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    pub output_format: OutputFormatArg,

    /// Echo filter diagnostics to stderr in addition to the log
    #[arg(long)]
    pub verbose_diagnostics: bool,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// JSON Lines (one JSON object per line)
    Jsonl,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormatArg> for rf_discoverer::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Jsonl => rf_discoverer::OutputFormat::Jsonl,
            OutputFormatArg::Json => rf_discoverer::OutputFormat::Json,
        }
    }
}
