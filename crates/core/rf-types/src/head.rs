//! Candidate ref types evaluated during a discovery scan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used for pull-request ref names (`PR-42`).
pub const PULL_REQUEST_PREFIX: &str = "PR-";

/// Kind of a candidate ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    /// A plain branch
    Branch,

    /// A pull request head
    PullRequest,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch => write!(f, "branch"),
            Self::PullRequest => write!(f, "pull_request"),
        }
    }
}

/// A named head considered as a candidate for building.
///
/// `number` is only set for pull-request refs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateRef {
    /// Branch name or `PR-<number>`
    pub name: String,

    /// Whether this is a branch or a pull request
    pub kind: RefKind,

    /// Pull request number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
}

impl CandidateRef {
    /// Create a branch ref.
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RefKind::Branch,
            number: None,
        }
    }

    /// Create a pull-request ref named `PR-<number>`.
    pub fn pull_request(number: u64) -> Self {
        Self {
            name: format!("{PULL_REQUEST_PREFIX}{number}"),
            kind: RefKind::PullRequest,
            number: Some(number),
        }
    }

    /// Returns true for pull-request refs.
    pub fn is_pull_request(&self) -> bool {
        self.kind == RefKind::PullRequest
    }
}

impl fmt::Display for CandidateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
