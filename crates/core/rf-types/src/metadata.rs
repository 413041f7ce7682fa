//! Metadata records reported by a ref metadata provider.

use serde::{Deserialize, Serialize};

/// A branch known to the code-hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    /// Branch name
    pub name: String,

    /// SHA of the branch head commit
    pub head_sha: String,
}

impl BranchInfo {
    /// Create a new branch record.
    pub fn new(name: impl Into<String>, head_sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            head_sha: head_sha.into(),
        }
    }
}

/// A pull request known to the code-hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// Pull request number
    pub number: u64,

    /// Pull request title
    pub title: String,

    /// Name of the source branch
    pub head_ref: String,

    /// SHA of the head commit
    pub head_sha: String,

    /// Browser URL of the pull request, when the provider knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl PullRequestInfo {
    /// Create a new pull request record without an HTML URL.
    pub fn new(
        number: u64,
        title: impl Into<String>,
        head_ref: impl Into<String>,
        head_sha: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            head_ref: head_ref.into(),
            head_sha: head_sha.into(),
            html_url: None,
        }
    }

    /// Set the browser URL.
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = Some(url.into());
        self
    }
}
