//! Age-based filtering of candidate refs.

use chrono::{DateTime, Utc};
use rf_error::Result;
use rf_types::CandidateRef;
use tracing::debug;

use super::AdmitsRef;
use crate::config::RetentionPolicy;
use crate::request::ScanRequest;

/// A filter that excludes refs whose head commit is older than a retention window.
///
/// The threshold is computed once, when the filter is built, so every ref of
/// a scan is judged against the same instant. A ref is excluded only if its
/// commit is strictly older than the threshold.
///
/// Refs are looked up by name among branches first, then among pull requests
/// by head ref name. Refs unknown to the provider are admitted.
#[derive(Debug, Clone)]
pub struct AgeFilter {
    policy: RetentionPolicy,
    threshold: DateTime<Utc>,
}

impl AgeFilter {
    /// Create an age filter with a threshold relative to the current time.
    pub fn new(policy: RetentionPolicy) -> Self {
        Self::with_reference_time(policy, Utc::now())
    }

    /// Create an age filter with a threshold relative to `now`.
    pub fn with_reference_time(policy: RetentionPolicy, now: DateTime<Utc>) -> Self {
        Self {
            policy,
            threshold: policy.threshold(now),
        }
    }

    /// Get the retention policy.
    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Get the age threshold.
    pub fn threshold(&self) -> DateTime<Utc> {
        self.threshold
    }

    /// Check if a commit time falls before the threshold.
    pub fn is_stale(&self, committed_at: DateTime<Utc>) -> bool {
        committed_at < self.threshold
    }
}

impl AdmitsRef for AgeFilter {
    fn should_exclude(&self, request: &ScanRequest<'_>, head: &CandidateRef) -> Result<bool> {
        if !self.policy.is_enabled() {
            return Ok(false);
        }

        request.ensure_active()?;
        let provider = request.provider();

        let head_sha = if let Some(branch) = provider.find_branch(&head.name)? {
            branch.head_sha
        } else if let Some(pr) = provider.find_pull_request_by_head_ref(&head.name)? {
            pr.head_sha
        } else {
            debug!(head = %head.name, "No metadata for ref, admitting");
            return Ok(false);
        };

        request.ensure_active()?;
        let committed_at = provider.commit_timestamp(&head_sha)?;
        let stale = self.is_stale(committed_at);

        debug!(
            head = %head.name,
            sha = %head_sha,
            committed_at = %committed_at,
            threshold = %self.threshold,
            stale,
            "Evaluated ref age"
        );

        Ok(stale)
    }

    fn description(&self) -> String {
        format!("age(retention_days={})", self.policy.retention_days())
    }
}
