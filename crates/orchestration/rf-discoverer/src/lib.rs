//! rf-discoverer - ref admission filters for code-hosting discovery scans.
//!
//! This crate decides which branches and pull requests a discovery scan
//! keeps. It provides:
//!
//! - [`AgeFilter`] - excludes refs whose head commit predates a retention window
//! - [`TitleFilter`] - excludes pull requests whose title does not fully match a pattern
//! - [`CompositeFilter`] - excludes a ref if any member filter excludes it
//! - [`Discoverer`] - runs one scan over a [`RefMetadataProvider`] and writes admitted refs
//! - [`SnapshotProvider`] - an in-memory provider loaded from a JSON snapshot
//!
//! # Example
//!
//! ```
//! use chrono::{TimeDelta, Utc};
//! use rf_discoverer::{FilterConfig, ScanRequest, SnapshotProvider, AdmitsRef};
//! use rf_traits::NullListener;
//! use rf_types::CandidateRef;
//!
//! let now = Utc::now();
//! let provider = SnapshotProvider::new()
//!     .with_branch("stale", "aaa", now - TimeDelta::days(45))
//!     .with_branch("fresh", "bbb", now - TimeDelta::days(2));
//!
//! let filter = FilterConfig::new()
//!     .with_retention_days("30")
//!     .build_filter_at(now)
//!     .unwrap();
//!
//! let request = ScanRequest::new(&provider, &NullListener);
//! assert!(filter.should_exclude(&request, &CandidateRef::branch("stale")).unwrap());
//! assert!(!filter.should_exclude(&request, &CandidateRef::branch("fresh")).unwrap());
//! ```

pub mod config;
pub mod discoverer;
pub mod filter;
pub mod listener;
pub mod output;
pub mod request;
pub mod snapshot;
pub mod stats;

pub use config::{
    DiscoveryConfig, FilterConfig, MATCH_ALL_PATTERN, RetentionPolicy, TitlePolicy,
};
pub use discoverer::{Discoverer, candidate_refs};
pub use filter::{AdmitsRef, AgeFilter, CompositeFilter, TitleFilter};
pub use listener::{StderrListener, TracingListener};
pub use output::{Output, OutputFormat, StdoutOutput};
pub use request::{CancelFlag, ScanRequest};
pub use rf_traits::{RefMetadataProvider, ScanListener};
pub use snapshot::SnapshotProvider;
pub use stats::DiscoveryStats;
