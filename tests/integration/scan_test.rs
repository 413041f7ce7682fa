//! Full discovery scans over the sample repository.

use integration_tests::{
    CollectingOutput, CountingProvider, RecordingListener, sample_repository, scan_time,
};
use rf_discoverer::{CancelFlag, Discoverer, DiscoveryConfig, FilterConfig};
use rf_error::{ErrorCategory, MetadataError, RfError, classify_error};
use std::sync::atomic::Ordering;

fn filter(retention_days: &str, title_regex: &str) -> rf_discoverer::CompositeFilter {
    FilterConfig::new()
        .with_retention_days(retention_days)
        .with_title_regex(title_regex)
        .build_filter_at(scan_time())
        .unwrap()
}

#[test]
fn test_scan_without_filters_admits_everything() {
    let output = CollectingOutput::new();
    let provider = CountingProvider::new(sample_repository());
    let lookups = provider.lookup_counter();

    let stats = Discoverer::new(provider, output.clone(), filter("", ".*"), DiscoveryConfig::new())
        .discover()
        .unwrap();

    assert_eq!(stats.refs_output, 7);
    assert_eq!(stats.refs_filtered, 0);
    assert_eq!(lookups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_scan_with_age_and_title_filters() {
    let output = CollectingOutput::new();
    let listener = RecordingListener::new();

    let stats = Discoverer::new(
        sample_repository(),
        output.clone(),
        filter("30", r"^\[RELEASE\].*"),
        DiscoveryConfig::new(),
    )
    .with_listener(Box::new(listener.clone()))
    .discover()
    .unwrap();

    assert_eq!(output.names(), vec!["main", "release/1.x", "PR-41"]);
    assert_eq!(stats.refs_discovered, 7);
    assert_eq!(stats.refs_filtered, 4);
    assert!(!stats.has_errors());
    assert_eq!(listener.lines().len(), 3);
}

#[test]
fn test_scan_fetches_only_matching_commits() {
    let provider = CountingProvider::new(sample_repository());
    let lookups = provider.lookup_counter();

    Discoverer::new(
        provider,
        CollectingOutput::new(),
        filter("30", ".*"),
        DiscoveryConfig::new(),
    )
    .discover()
    .unwrap();

    // One lookup per branch; pull request refs match no branch or head ref name
    assert_eq!(lookups.load(Ordering::SeqCst), 4);
}

#[test]
fn test_scan_aborts_on_lookup_failure() {
    let output = CollectingOutput::new();
    let provider = CountingProvider::new(sample_repository()).failing_on("c-legacy");

    let result = Discoverer::new(provider, output.clone(), filter("30", ".*"), DiscoveryConfig::new())
        .discover();

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        RfError::Metadata(MetadataError::CommitLookup { ref sha, .. }) if sha == "c-legacy"
    ));
    assert_eq!(classify_error(&error), ErrorCategory::Transient);
    assert_eq!(output.names(), vec!["main", "release/1.x"]);
}

#[test]
fn test_scan_cancellation_stops_promptly() {
    let cancel = CancelFlag::new();
    let output = CollectingOutput::new();
    let provider = CountingProvider::new(sample_repository()).cancelling_after(1, cancel.clone());
    let lookups = provider.lookup_counter();

    let result = Discoverer::new(provider, output.clone(), filter("30", ".*"), DiscoveryConfig::new())
        .with_cancel_flag(cancel)
        .discover();

    assert!(matches!(result, Err(RfError::Cancelled)));
    assert_eq!(lookups.load(Ordering::SeqCst), 1);
    assert_eq!(output.names(), vec!["main"]);
}

#[test]
fn test_scan_respects_max_refs() {
    let output = CollectingOutput::new();

    let stats = Discoverer::new(
        sample_repository(),
        output.clone(),
        filter("30", ".*"),
        DiscoveryConfig::new().with_max_refs(2),
    )
    .discover()
    .unwrap();

    assert_eq!(stats.refs_output, 2);
    assert_eq!(output.names(), vec!["main", "release/1.x"]);
}
