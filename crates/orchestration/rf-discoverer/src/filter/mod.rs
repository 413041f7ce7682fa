//! Admission filters for candidate refs.
//!
//! Every filter implements [`AdmitsRef`]. Filters are independent; a scan
//! excludes a ref if any filter excludes it, which [`CompositeFilter`]
//! expresses as AND logic over admit decisions.
//!
//! # Examples
//!
//! ```
//! use rf_discoverer::filter::{AgeFilter, CompositeFilter, TitleFilter};
//! use rf_discoverer::{RetentionPolicy, TitlePolicy};
//!
//! let composite = CompositeFilter::new()
//!     .with_filter(Box::new(AgeFilter::new(RetentionPolicy::new(30))))
//!     .with_filter(Box::new(TitleFilter::new(TitlePolicy::new("^\\[RELEASE\\].*").unwrap())));
//!
//! assert_eq!(composite.len(), 2);
//! ```

mod age;
mod composite;
mod title;

pub use age::AgeFilter;
pub use composite::CompositeFilter;
pub use title::TitleFilter;

use rf_error::Result;
use rf_types::CandidateRef;

use crate::request::ScanRequest;

/// Trait for deciding whether a candidate ref is kept by a scan.
///
/// Implementations must not mutate shared state; the same filter is reused
/// for every ref of a scan and may be shared across threads.
pub trait AdmitsRef: Send + Sync {
    /// Check if a ref should be excluded from the scan.
    ///
    /// Returns `Ok(true)` to exclude, `Ok(false)` to admit. Metadata
    /// failures and cancellation are returned as errors, never folded into
    /// a decision.
    fn should_exclude(&self, request: &ScanRequest<'_>, head: &CandidateRef) -> Result<bool>;

    /// Get a human-readable description of this filter.
    ///
    /// Used for logging and debugging purposes.
    fn description(&self) -> String;
}
