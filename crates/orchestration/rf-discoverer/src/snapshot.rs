//! In-memory metadata provider loaded from a JSON snapshot.

use chrono::{DateTime, Utc};
use rf_error::{MetadataError, RfError, Result};
use rf_traits::RefMetadataProvider;
use rf_types::{BranchInfo, PullRequestInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A metadata provider backed by a fixed snapshot.
///
/// The JSON form looks like:
///
/// ```json
/// {
///   "branches": [{ "name": "main", "head_sha": "a1" }],
///   "pull_requests": [
///     { "number": 42, "title": "Fix login bug", "head_ref": "fix/login", "head_sha": "b2" }
///   ],
///   "commits": { "a1": "2024-05-01T10:00:00Z", "b2": "2024-05-20T08:30:00Z" }
/// }
/// ```
///
/// Commit lookups for SHAs missing from `commits` fail with
/// [`MetadataError::CommitNotFound`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotProvider {
    #[serde(default)]
    branches: Vec<BranchInfo>,

    #[serde(default)]
    pull_requests: Vec<PullRequestInfo>,

    #[serde(default)]
    commits: HashMap<String, DateTime<Utc>>,
}

impl SnapshotProvider {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RfError::Config(format!("Invalid metadata snapshot: {e}")))
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RfError::Config(format!("Failed to read snapshot {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Add a branch and its head commit date.
    pub fn with_branch(
        mut self,
        name: impl Into<String>,
        head_sha: impl Into<String>,
        committed_at: DateTime<Utc>,
    ) -> Self {
        let branch = BranchInfo::new(name, head_sha);
        self.commits.insert(branch.head_sha.clone(), committed_at);
        self.branches.push(branch);
        self
    }

    /// Add a branch without recording its commit.
    pub fn with_branch_info(mut self, branch: BranchInfo) -> Self {
        self.branches.push(branch);
        self
    }

    /// Add a pull request and its head commit date.
    pub fn with_pull_request(mut self, pr: PullRequestInfo, committed_at: DateTime<Utc>) -> Self {
        self.commits.insert(pr.head_sha.clone(), committed_at);
        self.pull_requests.push(pr);
        self
    }

    /// Record a commit date.
    pub fn with_commit(mut self, sha: impl Into<String>, committed_at: DateTime<Utc>) -> Self {
        self.commits.insert(sha.into(), committed_at);
        self
    }
}

impl RefMetadataProvider for SnapshotProvider {
    fn branches(&self) -> Result<Vec<BranchInfo>> {
        Ok(self.branches.clone())
    }

    fn pull_requests(&self) -> Result<Vec<PullRequestInfo>> {
        Ok(self.pull_requests.clone())
    }

    fn commit_timestamp(&self, sha: &str) -> Result<DateTime<Utc>> {
        self.commits
            .get(sha)
            .copied()
            .ok_or_else(|| RfError::Metadata(MetadataError::CommitNotFound(sha.to_string())))
    }
}
