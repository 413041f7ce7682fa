//! Collaborator traits for refilter.
//!
//! This crate defines the seams between the filters and their host:
//! - [`RefMetadataProvider`] - Read-only view of branches, pull requests and commits
//! - [`ScanListener`] - Per-scan sink for human-readable diagnostic lines

pub mod listener;
pub mod provider;

pub use listener::*;
pub use provider::*;
