//! Test collaborators and sample data.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rf_discoverer::{CancelFlag, Output, RefMetadataProvider, ScanListener, SnapshotProvider};
use rf_error::{MetadataError, RfError, Result};
use rf_types::{BranchInfo, CandidateRef, PullRequestInfo};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fixed scan start time used by the sample repository.
pub fn scan_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A repository with fresh and stale branches and a mix of pull request titles.
///
/// | ref          | head commit age | title                  |
/// |--------------|-----------------|------------------------|
/// | main         | 1 day           |                        |
/// | release/1.x  | 29 days         |                        |
/// | legacy       | 31 days         |                        |
/// | archive      | 400 days        |                        |
/// | PR-41        | 2 days          | [RELEASE] 1.4.0        |
/// | PR-42        | 3 days          | Fix login bug          |
/// | PR-43        | 90 days         | WIP: fix bug           |
pub fn sample_repository() -> SnapshotProvider {
    let now = scan_time();
    SnapshotProvider::new()
        .with_branch("main", "c-main", now - TimeDelta::days(1))
        .with_branch("release/1.x", "c-release", now - TimeDelta::days(29))
        .with_branch("legacy", "c-legacy", now - TimeDelta::days(31))
        .with_branch("archive", "c-archive", now - TimeDelta::days(400))
        .with_pull_request(
            PullRequestInfo::new(41, "[RELEASE] 1.4.0", "release/1.4", "c-41")
                .with_html_url("https://example.com/org/repo/pull/41"),
            now - TimeDelta::days(2),
        )
        .with_pull_request(
            PullRequestInfo::new(42, "Fix login bug", "fix/login", "c-42"),
            now - TimeDelta::days(3),
        )
        .with_pull_request(
            PullRequestInfo::new(43, "WIP: fix bug", "wip/bug", "c-43"),
            now - TimeDelta::days(90),
        )
}

/// Output that keeps admitted refs in memory.
#[derive(Default, Clone)]
pub struct CollectingOutput {
    refs: Arc<Mutex<Vec<CandidateRef>>>,
}

impl CollectingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<String> {
        self.refs
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }
}

impl Output for CollectingOutput {
    fn output(&self, head: &CandidateRef) -> Result<()> {
        self.refs.lock().unwrap().push(head.clone());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Listener that keeps diagnostic lines in memory.
#[derive(Default, Clone)]
pub struct RecordingListener {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ScanListener for RecordingListener {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Provider wrapper that counts commit lookups and can fail or cancel on one.
pub struct CountingProvider {
    inner: SnapshotProvider,
    lookups: Arc<AtomicUsize>,
    fail_sha: Option<String>,
    cancel_after: Option<(usize, CancelFlag)>,
}

impl CountingProvider {
    pub fn new(inner: SnapshotProvider) -> Self {
        Self {
            inner,
            lookups: Arc::new(AtomicUsize::new(0)),
            fail_sha: None,
            cancel_after: None,
        }
    }

    /// Fail lookups of `sha` with a transient error.
    pub fn failing_on(mut self, sha: impl Into<String>) -> Self {
        self.fail_sha = Some(sha.into());
        self
    }

    /// Trip `cancel` once `count` lookups have completed.
    pub fn cancelling_after(mut self, count: usize, cancel: CancelFlag) -> Self {
        self.cancel_after = Some((count, cancel));
        self
    }

    pub fn lookup_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.lookups)
    }
}

impl RefMetadataProvider for CountingProvider {
    fn branches(&self) -> Result<Vec<BranchInfo>> {
        self.inner.branches()
    }

    fn pull_requests(&self) -> Result<Vec<PullRequestInfo>> {
        self.inner.pull_requests()
    }

    fn commit_timestamp(&self, sha: &str) -> Result<DateTime<Utc>> {
        let done = self.lookups.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_sha.as_deref() == Some(sha) {
            return Err(RfError::Metadata(MetadataError::CommitLookup {
                sha: sha.to_string(),
                message: "502 Bad Gateway".to_string(),
            }));
        }
        if let Some((count, cancel)) = &self.cancel_after {
            if done >= *count {
                cancel.cancel();
            }
        }

        self.inner.commit_timestamp(sha)
    }
}
