//! Statistics for discovery runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected during a discovery run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryStats {
    /// When discovery started
    pub started_at: Option<DateTime<Utc>>,

    /// When discovery completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Total number of refs evaluated
    pub refs_discovered: usize,

    /// Number of refs excluded by filters
    pub refs_filtered: usize,

    /// Number of refs output (admitted)
    pub refs_output: usize,

    /// Errors encountered during discovery
    pub errors: Vec<String>,
}

impl DiscoveryStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark discovery as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record an admitted ref that was output.
    pub fn record_output(&mut self) {
        self.refs_discovered += 1;
        self.refs_output += 1;
    }

    /// Record a ref excluded by a filter.
    pub fn record_filtered(&mut self) {
        self.refs_discovered += 1;
        self.refs_filtered += 1;
    }

    /// Record an error.
    pub fn record_error(&mut self, error: impl ToString) {
        self.errors.push(error.to_string());
    }

    /// Get the duration of the discovery run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Check if any errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
