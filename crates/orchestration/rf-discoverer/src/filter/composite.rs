//! Composite filter for combining multiple filters.

use rf_error::Result;
use rf_types::CandidateRef;

use super::AdmitsRef;
use crate::request::ScanRequest;

/// A composite filter that combines multiple filters with AND logic.
///
/// A ref is admitted only if every member admits it. Evaluation stops at the
/// first exclusion or the first error. An empty composite admits everything.
pub struct CompositeFilter {
    filters: Vec<Box<dyn AdmitsRef>>,
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeFilter {
    /// Create a new empty composite filter.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn AdmitsRef>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter to the composite.
    pub fn add_filter(&mut self, filter: Box<dyn AdmitsRef>) {
        self.filters.push(filter);
    }

    /// Get the number of filters in the composite.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the composite has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Get descriptions of all filters.
    pub fn filter_descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl AdmitsRef for CompositeFilter {
    fn should_exclude(&self, request: &ScanRequest<'_>, head: &CandidateRef) -> Result<bool> {
        for filter in &self.filters {
            request.ensure_active()?;
            if filter.should_exclude(request, head)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn description(&self) -> String {
        if self.filters.is_empty() {
            "composite(empty)".to_string()
        } else {
            format!("composite({})", self.filter_descriptions().join(" AND "))
        }
    }
}

// Box<dyn AdmitsRef> doesn't implement Debug
impl std::fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filter_descriptions())
            .finish()
    }
}
