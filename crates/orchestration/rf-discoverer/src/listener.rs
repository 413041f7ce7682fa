//! Scan listener implementations.

use rf_traits::ScanListener;
use tracing::info;

/// Forwards diagnostic lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl ScanListener for TracingListener {
    fn log(&self, line: &str) {
        info!(target: "rf_discoverer::scan", "{line}");
    }
}

/// Writes diagnostic lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrListener;

impl ScanListener for StderrListener {
    fn log(&self, line: &str) {
        eprintln!("    {line}");
    }
}
