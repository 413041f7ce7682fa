//! Main Discoverer implementation.

use rf_error::Result;
use rf_traits::{RefMetadataProvider, ScanListener};
use rf_types::CandidateRef;
use tracing::{debug, warn};

use crate::config::DiscoveryConfig;
use crate::filter::AdmitsRef;
use crate::listener::TracingListener;
use crate::output::Output;
use crate::request::{CancelFlag, ScanRequest};
use crate::stats::DiscoveryStats;

/// Enumerate candidate refs from a provider.
///
/// Yields one branch ref per branch, then one `PR-<number>` ref per pull
/// request, in provider order.
pub fn candidate_refs(provider: &dyn RefMetadataProvider) -> Result<Vec<CandidateRef>> {
    let branches = provider.branches()?;
    let pulls = provider.pull_requests()?;

    let mut candidates = Vec::with_capacity(branches.len() + pulls.len());
    candidates.extend(branches.into_iter().map(|b| CandidateRef::branch(b.name)));
    candidates.extend(pulls.into_iter().map(|pr| CandidateRef::pull_request(pr.number)));
    Ok(candidates)
}

/// The discoverer that coordinates ref enumeration, filtering, and output.
///
/// Generic over the provider, output and filter so the same scan logic runs
/// against a live service or a snapshot, with any filter combination.
pub struct Discoverer<P: RefMetadataProvider, O: Output, F: AdmitsRef> {
    provider: P,
    output: O,
    filter: F,
    config: DiscoveryConfig,
    listener: Box<dyn ScanListener>,
    cancel: CancelFlag,
}

impl<P: RefMetadataProvider, O: Output, F: AdmitsRef> Discoverer<P, O, F> {
    /// Create a new Discoverer.
    ///
    /// Diagnostics go to [`TracingListener`] until replaced with
    /// [`with_listener`](Self::with_listener).
    pub fn new(provider: P, output: O, filter: F, config: DiscoveryConfig) -> Self {
        Self {
            provider,
            output,
            filter,
            config,
            listener: Box::new(TracingListener),
            cancel: CancelFlag::new(),
        }
    }

    /// Set the listener receiving diagnostic lines.
    pub fn with_listener(mut self, listener: Box<dyn ScanListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Share a cancellation flag with the caller.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Get the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Run the discovery process.
    ///
    /// Evaluates every candidate ref against the filter and outputs the
    /// admitted ones. Filter failures and cancellation abort the scan and
    /// are returned as errors. Output failures are recorded in the stats and
    /// the scan moves on to the next ref.
    pub fn discover(&self) -> Result<DiscoveryStats> {
        let mut stats = DiscoveryStats::new();

        debug!(
            filter = %self.filter.description(),
            max_refs = self.config.max_refs,
            "Starting discovery"
        );

        let request = ScanRequest::new(&self.provider, self.listener.as_ref())
            .with_cancel_flag(self.cancel.clone());

        for head in candidate_refs(&self.provider)? {
            request.ensure_active()?;

            if self.filter.should_exclude(&request, &head)? {
                stats.record_filtered();
                debug!(head = %head.name, kind = %head.kind, "Filtered out");
                continue;
            }

            if let Err(e) = self.output.output(&head) {
                warn!(head = %head.name, error = %e, "Failed to output ref");
                stats.refs_discovered += 1;
                stats.record_error(format!("Output failed for {}: {}", head.name, e));
                continue;
            }

            stats.record_output();
            debug!(head = %head.name, kind = %head.kind, "Admitted ref");

            if self.config.max_refs > 0 && stats.refs_output >= self.config.max_refs {
                debug!(max_refs = self.config.max_refs, "Reached max refs limit");
                break;
            }
        }

        if let Err(e) = self.output.flush() {
            warn!(error = %e, "Failed to flush output");
            stats.record_error(format!("Flush failed: {}", e));
        }

        stats.complete();

        debug!(
            refs_discovered = stats.refs_discovered,
            refs_output = stats.refs_output,
            refs_filtered = stats.refs_filtered,
            errors = stats.error_count(),
            "Discovery completed"
        );

        Ok(stats)
    }
}
