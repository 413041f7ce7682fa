//! Common utilities for integration tests.
//!
//! Provides in-memory collaborators for driving full scans: a collecting
//! output, a recording listener, a provider that counts and fails on
//! request, and a sample repository snapshot.

pub mod fixtures;

pub use fixtures::{
    CollectingOutput, CountingProvider, RecordingListener, sample_repository, scan_time,
};
