//! Output implementations for admitted refs.
//!
//! This module provides the [`Output`] trait and [`StdoutOutput`], which
//! writes admitted refs to stdout in JSON or JSONL format.

mod stdout;

pub use stdout::{OutputFormat, StdoutOutput};

use rf_error::Result;
use rf_types::CandidateRef;

/// Trait for outputting admitted refs.
///
/// Implementations handle delivery of refs that passed every filter to the
/// next stage, whether that's stdout for piping or an in-memory collector.
pub trait Output: Send + Sync {
    /// Output a single admitted ref.
    fn output(&self, head: &CandidateRef) -> Result<()>;

    /// Flush any buffered output.
    ///
    /// Called after all refs have been output.
    fn flush(&self) -> Result<()>;
}
