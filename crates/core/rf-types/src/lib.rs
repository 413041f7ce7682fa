//! Core types for refilter.
//!
//! This crate provides the foundational types shared by filters and providers:
//! - [`CandidateRef`] - A branch or pull-request head considered by a scan
//! - [`BranchInfo`] / [`PullRequestInfo`] - Metadata reported by a provider

pub mod head;
pub mod metadata;

pub use head::*;
pub use metadata::*;
