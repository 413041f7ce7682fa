//! Title-based filtering of pull requests.

use rf_error::Result;
use rf_types::{CandidateRef, PullRequestInfo};
use tracing::info;

use super::AdmitsRef;
use crate::config::TitlePolicy;
use crate::request::ScanRequest;

/// A filter that excludes pull requests whose title does not fully match a pattern.
///
/// Branch refs are never excluded. With the match-all policy no metadata is
/// read at all. Pull requests unknown to the provider are admitted.
///
/// Each evaluated pull request produces one diagnostic line on the scan
/// listener saying whether it will be built.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    policy: TitlePolicy,
}

impl TitleFilter {
    /// Create a title filter from a compiled policy.
    pub fn new(policy: TitlePolicy) -> Self {
        Self { policy }
    }

    /// Get the title policy.
    pub fn policy(&self) -> &TitlePolicy {
        &self.policy
    }
}

impl AdmitsRef for TitleFilter {
    fn should_exclude(&self, request: &ScanRequest<'_>, head: &CandidateRef) -> Result<bool> {
        if !head.is_pull_request() || self.policy.is_match_all() {
            return Ok(false);
        }
        let Some(number) = head.number else {
            return Ok(false);
        };

        request.ensure_active()?;
        let Some(pr) = request.provider().find_pull_request(number)? else {
            return Ok(false);
        };

        let matched = self.policy.matches_title(&pr.title);
        let link = pr_link(&pr);

        if matched {
            request.log(&format!("Will build PR {link}. Title matched: {}", pr.title));
        } else {
            request.log(&format!(
                "Won't build PR {link}. Title did not match: {}",
                pr.title
            ));
        }
        info!(
            number = pr.number,
            title = %pr.title,
            pattern = %self.policy.pattern(),
            matched,
            "Evaluated pull request title"
        );

        Ok(!matched)
    }

    fn description(&self) -> String {
        format!("title('{}')", self.policy.pattern())
    }
}

fn pr_link(pr: &PullRequestInfo) -> String {
    match &pr.html_url {
        Some(url) => format!("#{} ({url})", pr.number),
        None => format!("#{}", pr.number),
    }
}
