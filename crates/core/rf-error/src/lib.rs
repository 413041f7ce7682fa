//! Error types and classification for refilter.
//!
//! This crate provides:
//! - [`RfError`] - Top-level error enum for filter construction and scans
//! - [`MetadataError`] - Failures talking to the ref metadata provider
//! - [`ErrorCategory`] for deciding whether a failed scan is worth retrying

use thiserror::Error;

/// Top-level error type for refilter.
#[derive(Error, Debug)]
pub enum RfError {
    /// Metadata provider errors (listing refs, commit lookups)
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Configuration errors (invalid title pattern, bad snapshot file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output sink errors
    #[error("Output error: {0}")]
    Output(String),

    /// The scan was cancelled before it finished
    #[error("Scan cancelled")]
    Cancelled,

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors raised while reading ref metadata.
///
/// A metadata failure is never turned into an admit or exclude decision;
/// it aborts the scan that triggered it.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Failed to list branches
    #[error("Listing branches failed: {0}")]
    ListBranches(String),

    /// Failed to list pull requests
    #[error("Listing pull requests failed: {0}")]
    ListPullRequests(String),

    /// The commit is unknown to the provider
    #[error("Commit not found: {0}")]
    CommitNotFound(String),

    /// The commit lookup itself failed
    #[error("Commit lookup failed for {sha}: {message}")]
    CommitLookup { sha: String, message: String },
}

/// Error classification for retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transient error - rerunning the scan may succeed
    ///
    /// Examples: provider timeout, rate limiting
    Transient,

    /// Permanent error - rerunning with the same inputs fails again
    ///
    /// Examples: invalid pattern, commit missing from the provider
    Permanent,

    /// The scan was interrupted on request
    Cancelled,
}

/// Classifies an error to determine whether a rerun makes sense.
pub fn classify_error(error: &RfError) -> ErrorCategory {
    match error {
        RfError::Metadata(e) => classify_metadata_error(e),
        RfError::Config(_) => ErrorCategory::Permanent,
        RfError::Output(_) => ErrorCategory::Transient,
        RfError::Cancelled => ErrorCategory::Cancelled,
        RfError::Other(_) => ErrorCategory::Transient,
    }
}

fn classify_metadata_error(error: &MetadataError) -> ErrorCategory {
    match error {
        MetadataError::ListBranches(_) => ErrorCategory::Transient,
        MetadataError::ListPullRequests(_) => ErrorCategory::Transient,
        MetadataError::CommitNotFound(_) => ErrorCategory::Permanent,
        MetadataError::CommitLookup { .. } => ErrorCategory::Transient,
    }
}

/// Result type alias using RfError.
pub type Result<T> = std::result::Result<T, RfError>;
