//! Stdout output implementation for admitted refs.

use rf_error::{RfError, Result};
use rf_types::CandidateRef;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::Output;

/// Output format for stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON Lines format - one JSON object per line (default)
    #[default]
    Jsonl,

    /// Pretty-printed JSON
    Json,
}

/// Stdout output implementation.
///
/// JSONL output suits piping to tools like `jq` or counting with `wc -l`.
#[derive(Debug)]
pub struct StdoutOutput {
    format: OutputFormat,
}

impl StdoutOutput {
    /// Create a new StdoutOutput with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Create a new StdoutOutput with JSONL format (default).
    pub fn jsonl() -> Self {
        Self::new(OutputFormat::Jsonl)
    }

    /// Create a new StdoutOutput with pretty-printed JSON format.
    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    /// Render a ref in the configured format.
    pub fn render(&self, head: &CandidateRef) -> Result<String> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(head),
            OutputFormat::Jsonl => serde_json::to_string(head),
        };
        rendered.map_err(|e| RfError::Output(format!("JSON serialization failed: {e}")))
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::jsonl()
    }
}

impl Output for StdoutOutput {
    fn output(&self, head: &CandidateRef) -> Result<()> {
        let rendered = self.render(head)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}")
            .map_err(|e| RfError::Output(format!("Failed to write to stdout: {e}")))
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout()
            .flush()
            .map_err(|e| RfError::Output(format!("Failed to flush stdout: {e}")))
    }
}
