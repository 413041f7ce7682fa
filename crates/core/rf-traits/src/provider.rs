//! Ref metadata provider trait.

use chrono::{DateTime, Utc};
use rf_error::Result;
use rf_types::{BranchInfo, PullRequestInfo};

/// Trait for reading ref metadata from a code-hosting service.
///
/// A provider is a read-only view refreshed once per scan. Filters never
/// mutate it. Every call may block on I/O and may fail; failures surface as
/// [`rf_error::MetadataError`] wrapped in [`rf_error::RfError`].
///
/// # Lookups
///
/// The `find_*` helpers scan the listed records linearly. Providers backed
/// by large repositories can override them with an indexed lookup; the
/// results must stay the same.
pub trait RefMetadataProvider: Send + Sync {
    /// Lists the known branches.
    fn branches(&self) -> Result<Vec<BranchInfo>>;

    /// Lists the known pull requests.
    fn pull_requests(&self) -> Result<Vec<PullRequestInfo>>;

    /// Fetches the commit date of the commit with the given SHA.
    fn commit_timestamp(&self, sha: &str) -> Result<DateTime<Utc>>;

    /// Finds a branch by exact name.
    fn find_branch(&self, name: &str) -> Result<Option<BranchInfo>> {
        Ok(self.branches()?.into_iter().find(|b| b.name == name))
    }

    /// Finds a pull request whose head ref name equals `head_ref`.
    fn find_pull_request_by_head_ref(&self, head_ref: &str) -> Result<Option<PullRequestInfo>> {
        Ok(self
            .pull_requests()?
            .into_iter()
            .find(|pr| pr.head_ref == head_ref))
    }

    /// Finds a pull request by number.
    fn find_pull_request(&self, number: u64) -> Result<Option<PullRequestInfo>> {
        Ok(self
            .pull_requests()?
            .into_iter()
            .find(|pr| pr.number == number))
    }
}
