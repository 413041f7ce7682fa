//! Filter decisions built from raw configuration, evaluated ref by ref.

use chrono::TimeDelta;
use integration_tests::{RecordingListener, sample_repository, scan_time};
use rf_discoverer::{AdmitsRef, FilterConfig, ScanRequest, SnapshotProvider};
use rf_traits::NullListener;
use rf_types::{CandidateRef, PullRequestInfo};

fn excluded(config: &FilterConfig, provider: &SnapshotProvider, head: &CandidateRef) -> bool {
    let filter = config.build_filter_at(scan_time()).unwrap();
    let request = ScanRequest::new(provider, &NullListener);
    filter.should_exclude(&request, head).unwrap()
}

#[test]
fn test_unparsable_retention_admits_year_old_branch() {
    let config = FilterConfig::new().with_retention_days("abc");
    assert_eq!(config.retention_policy().retention_days(), 0);

    assert!(!excluded(
        &config,
        &sample_repository(),
        &CandidateRef::branch("archive")
    ));
}

#[test]
fn test_thirty_day_retention() {
    let config = FilterConfig::new().with_retention_days("30");
    let repo = sample_repository();

    assert!(excluded(&config, &repo, &CandidateRef::branch("legacy")));
    assert!(!excluded(&config, &repo, &CandidateRef::branch("release/1.x")));
    assert!(!excluded(&config, &repo, &CandidateRef::branch("unknown")));
}

#[test]
fn test_retention_boundary_admitted() {
    let repo = SnapshotProvider::new().with_branch(
        "edge",
        "c-edge",
        scan_time() - TimeDelta::days(30),
    );
    let config = FilterConfig::new().with_retention_days("30");

    assert!(!excluded(&config, &repo, &CandidateRef::branch("edge")));
}

#[test]
fn test_title_patterns() {
    let repo = sample_repository();
    let wip = CandidateRef::pull_request(43);

    let release_only = FilterConfig::new().with_title_regex(r"^\[RELEASE\].*$");
    assert!(excluded(&release_only, &repo, &wip));

    let wip_or_release = FilterConfig::new().with_title_regex(r"^(WIP:.*|\[RELEASE\].*)$");
    assert!(!excluded(&wip_or_release, &repo, &wip));
}

#[test]
fn test_title_full_match_scenario() {
    let repo = sample_repository();
    let pr = CandidateRef::pull_request(42);

    assert!(!excluded(
        &FilterConfig::new().with_title_regex("^Fix.*"),
        &repo,
        &pr
    ));
    assert!(excluded(
        &FilterConfig::new().with_title_regex("^Fix$"),
        &repo,
        &pr
    ));
}

#[test]
fn test_title_filter_never_touches_branches() {
    let config = FilterConfig::new().with_title_regex("^never$");
    let repo = sample_repository();

    for name in ["main", "legacy", "archive"] {
        assert!(!excluded(&config, &repo, &CandidateRef::branch(name)));
    }
}

#[test]
fn test_match_all_admits_odd_titles() {
    let now = scan_time();
    let repo = SnapshotProvider::new()
        .with_pull_request(PullRequestInfo::new(1, "", "a", "s1"), now)
        .with_pull_request(PullRequestInfo::new(2, "(?:[*+]$^", "b", "s2"), now);
    let config = FilterConfig::new().with_title_regex(".*");

    assert!(!excluded(&config, &repo, &CandidateRef::pull_request(1)));
    assert!(!excluded(&config, &repo, &CandidateRef::pull_request(2)));
}

#[test]
fn test_title_diagnostics_reach_listener() {
    let repo = sample_repository();
    let listener = RecordingListener::new();
    let filter = FilterConfig::new()
        .with_title_regex(r"^\[RELEASE\].*")
        .build_filter_at(scan_time())
        .unwrap();
    let request = ScanRequest::new(&repo, &listener);

    for number in [41, 42] {
        filter
            .should_exclude(&request, &CandidateRef::pull_request(number))
            .unwrap();
    }

    let lines = listener.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Will build PR #41 (https://example.com/org/repo/pull/41)"));
    assert!(lines[1].starts_with("Won't build PR #42"));
    assert!(lines[1].ends_with("Fix login bug"));
}

#[test]
fn test_invalid_title_pattern_fails_construction() {
    let result = FilterConfig::new()
        .with_retention_days("30")
        .with_title_regex("[RELEASE")
        .build_filter();

    assert!(result.is_err());
}
