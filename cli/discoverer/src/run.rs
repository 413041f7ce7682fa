//! Main execution logic for the rf-discoverer CLI.

use rf_discoverer::{
    CancelFlag, Discoverer, DiscoveryConfig, DiscoveryStats, FilterConfig, SnapshotProvider,
    StderrListener, StdoutOutput, TracingListener,
};
use rf_error::Result;
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{info, warn};

use crate::args::Cli;

/// Route SIGINT/SIGTERM to the cancellation flag.
///
/// Registration is best-effort; failures are logged but not fatal.
pub fn register_signals(cancel: &CancelFlag) {
    for signal in [SIGINT, SIGTERM] {
        if let Err(e) = signal_hook::flag::register(signal, cancel.as_atomic()) {
            warn!(signal, error = %e, "Failed to register signal handler");
        }
    }
}

/// Build the filter configuration from CLI arguments.
pub fn filter_config(args: &Cli) -> FilterConfig {
    FilterConfig::new()
        .with_retention_days(args.retention_days.as_str())
        .with_title_regex(args.title_regex.as_str())
}

/// Execute one scan with the provided arguments.
pub fn execute(args: &Cli, cancel: CancelFlag) -> Result<DiscoveryStats> {
    let provider = SnapshotProvider::from_path(&args.snapshot)?;

    let config = filter_config(args);
    let retention = config.retention_policy();
    if !retention.is_enabled() && !args.retention_days.is_empty() {
        warn!(
            value = %args.retention_days,
            "Retention days is not a positive integer, age filter disabled"
        );
    }
    let filter = config.build_filter()?;

    info!(
        snapshot = %args.snapshot.display(),
        retention_days = retention.retention_days(),
        title_regex = %args.title_regex,
        "Starting ref scan"
    );

    let output = StdoutOutput::new(args.output_format.into());
    let discovery = DiscoveryConfig::new().with_max_refs(args.max_refs);

    let discoverer = Discoverer::new(provider, output, filter, discovery).with_cancel_flag(cancel);
    let discoverer = if args.verbose_diagnostics {
        discoverer.with_listener(Box::new(StderrListener))
    } else {
        discoverer.with_listener(Box::new(TracingListener))
    };

    discoverer.discover()
}
