//! Configuration types for filters and discovery runs.
//!
//! Raw configuration arrives as free-form strings. [`RetentionPolicy`] and
//! [`TitlePolicy`] are the validated forms the filters are built from.

use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use rf_error::{RfError, Result};
use serde::{Deserialize, Serialize};

use crate::filter::{AgeFilter, CompositeFilter, TitleFilter};

/// Title pattern that disables title filtering.
pub const MATCH_ALL_PATTERN: &str = ".*";

/// Retention window for the age filter.
///
/// Zero disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    retention_days: u32,
}

impl RetentionPolicy {
    /// Create a policy with the given window in days.
    pub fn new(retention_days: u32) -> Self {
        Self { retention_days }
    }

    /// Parse a configured retention value.
    ///
    /// Blank, unparsable, negative and out-of-range input all yield a
    /// disabled policy. This never fails.
    pub fn parse(input: &str) -> Self {
        let retention_days = input
            .parse::<i32>()
            .ok()
            .and_then(|days| u32::try_from(days).ok())
            .unwrap_or(0);
        Self { retention_days }
    }

    /// Get the retention window in days.
    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }

    /// Check if the policy filters anything.
    pub fn is_enabled(&self) -> bool {
        self.retention_days > 0
    }

    /// Compute the age threshold relative to `now`.
    ///
    /// Windows reaching past the earliest representable instant clamp to it.
    pub fn threshold(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        TimeDelta::try_days(i64::from(self.retention_days))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Compiled title pattern for the title filter.
///
/// Titles must match the whole pattern, not a substring of it.
#[derive(Debug, Clone)]
pub struct TitlePolicy {
    pattern: String,
    // None for the match-all sentinel
    anchored: Option<Regex>,
}

impl TitlePolicy {
    /// Compile a configured title pattern.
    ///
    /// A blank pattern or [`MATCH_ALL_PATTERN`] yields the match-all policy.
    ///
    /// # Returns
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() || pattern == MATCH_ALL_PATTERN {
            return Ok(Self::match_all());
        }

        // Validate the pattern as written; wrapping it could hide unbalanced groups.
        Regex::new(pattern)
            .map_err(|e| RfError::Config(format!("Invalid title pattern '{pattern}': {e}")))?;
        let anchored = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| RfError::Config(format!("Invalid title pattern '{pattern}': {e}")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            anchored: Some(anchored),
        })
    }

    /// The policy that admits every title.
    pub fn match_all() -> Self {
        Self {
            pattern: MATCH_ALL_PATTERN.to_string(),
            anchored: None,
        }
    }

    /// Check if this is the match-all policy.
    pub fn is_match_all(&self) -> bool {
        self.anchored.is_none()
    }

    /// Check if a title fully matches the pattern.
    pub fn matches_title(&self, title: &str) -> bool {
        match &self.anchored {
            Some(re) => re.is_match(title),
            None => true,
        }
    }

    /// Get the configured pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for TitlePolicy {
    fn default() -> Self {
        Self::match_all()
    }
}

/// Raw filter configuration as supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Retention window in days (free-form; invalid input disables the filter)
    #[serde(default)]
    pub retention_days: String,

    /// Pull request title pattern
    #[serde(default = "default_title_regex")]
    pub title_regex: String,
}

fn default_title_regex() -> String {
    MATCH_ALL_PATTERN.to_string()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            retention_days: String::new(),
            title_regex: default_title_regex(),
        }
    }
}

impl FilterConfig {
    /// Create a configuration with both filters disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retention window.
    pub fn with_retention_days(mut self, retention_days: impl Into<String>) -> Self {
        self.retention_days = retention_days.into();
        self
    }

    /// Set the title pattern.
    pub fn with_title_regex(mut self, title_regex: impl Into<String>) -> Self {
        self.title_regex = title_regex.into();
        self
    }

    /// Parse the retention window.
    pub fn retention_policy(&self) -> RetentionPolicy {
        RetentionPolicy::parse(&self.retention_days)
    }

    /// Compile the title pattern.
    pub fn title_policy(&self) -> Result<TitlePolicy> {
        TitlePolicy::new(&self.title_regex)
    }

    /// Build the composite filter for a scan starting now.
    pub fn build_filter(&self) -> Result<CompositeFilter> {
        self.build_filter_at(Utc::now())
    }

    /// Build the composite filter for a scan starting at `now`.
    ///
    /// Disabled filters are left out of the composite entirely.
    pub fn build_filter_at(&self, now: DateTime<Utc>) -> Result<CompositeFilter> {
        let mut composite = CompositeFilter::new();

        let retention = self.retention_policy();
        if retention.is_enabled() {
            composite.add_filter(Box::new(AgeFilter::with_reference_time(retention, now)));
        }

        let title = self.title_policy()?;
        if !title.is_match_all() {
            composite.add_filter(Box::new(TitleFilter::new(title)));
        }

        Ok(composite)
    }
}

/// Configuration for a discovery run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Maximum number of refs to output (0 = unlimited)
    pub max_refs: usize,
}

impl DiscoveryConfig {
    /// Create a new discovery configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of refs to output.
    pub fn with_max_refs(mut self, max_refs: usize) -> Self {
        self.max_refs = max_refs;
        self
    }
}
