//! Index construction from collected units.

use super::common::{content_dir, fixed_time, make_unit, sample_units, EXAMPLES_JSON, MOCKING_MD};
use docsearch::build::SkipReason;
use docsearch::{
    build_from_collector, build_index, search, FilterKind, ItemKind, ManifestCollector,
    ManualClock, StaticCollector,
};

#[test]
fn test_build_is_idempotent() {
    let clock = ManualClock::new(fixed_time());
    let first = build_index(sample_units(), &clock);
    let second = build_index(sample_units(), &clock);

    assert_eq!(first.index, second.index);
    let ids: Vec<_> = first.index.items.iter().map(|i| i.id.as_str()).collect();
    let ids_again: Vec<_> = second.index.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ids_again);
}

#[test]
fn test_ids_are_unique_and_stable() {
    let outcome = build_index(sample_units(), &ManualClock::new(fixed_time()));
    assert!(outcome.diagnostics.is_empty());

    let mut ids: Vec<_> = outcome.index.items.iter().map(|i| i.id.clone()).collect();
    assert!(ids.contains(&"topic-mock-functions".to_string()));
    assert!(ids.contains(&"code-retry-with-backoff".to_string()));
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), outcome.index.len());
}

#[test]
fn test_generated_at_comes_from_clock() {
    let clock = ManualClock::new(fixed_time());
    clock.advance(chrono::Duration::minutes(5));
    let outcome = build_index(vec![], &clock);
    assert!(outcome.index.is_empty());
    assert_eq!(outcome.index.generated_at, fixed_time() + chrono::Duration::minutes(5));
}

#[test]
fn test_malformed_units_are_reported_not_fatal() {
    let mut no_title = make_unit("x", ItemKind::Topic);
    no_title.title = "   ".into();
    let mut no_url = make_unit("No Url", ItemKind::Example);
    no_url.url = String::new();
    let mut same_page = make_unit("Mock Functions (old)", ItemKind::Topic);
    same_page.url = "/topic/mock-functions".into();

    let units = vec![
        make_unit("Mock Functions", ItemKind::Topic),
        no_title,
        no_url,
        same_page,
        make_unit("Snapshots", ItemKind::Topic),
    ];
    let outcome = build_index(units, &ManualClock::new(fixed_time()));

    assert_eq!(outcome.index.len(), 2);
    let reasons: Vec<_> = outcome
        .diagnostics
        .iter()
        .map(|d| (d.position, d.reason.clone()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (1, SkipReason::EmptyTitle),
            (2, SkipReason::EmptyUrl),
            (3, SkipReason::DuplicateId("topic-mock-functions-old".into())),
        ]
    );
}

#[test]
fn test_pages_sharing_a_title_are_all_searchable() {
    let mut mocking = make_unit("Overview", ItemKind::Topic);
    mocking.url = "/docs/mocking/".into();
    mocking.raw_text = "Mocks replace real modules.".into();
    let mut snapshots = make_unit("Overview", ItemKind::Topic);
    snapshots.url = "/docs/snapshots/".into();
    snapshots.raw_text = "Snapshots capture rendered output.".into();

    let outcome = build_index(vec![mocking, snapshots], &ManualClock::new(fixed_time()));

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.index.len(), 2);
    let hits = search("snapshots", &outcome.index, FilterKind::All);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].result.url, "/docs/snapshots/");
    assert_eq!(hits[0].result.id, "topic-docs-snapshots");
}

#[test]
fn test_markdown_is_stripped_from_content() {
    let outcome = build_index(sample_units(), &ManualClock::new(fixed_time()));
    let api = outcome.index.get("topic-api-reference").unwrap();
    assert!(!api.content.contains("##"));
    assert!(!api.content.contains('`'));
    assert!(api.content.contains("vi.fn() creates a mock function"));
}

#[tokio::test]
async fn test_build_from_static_collector() {
    let collector = StaticCollector::new(sample_units());
    let outcome = build_from_collector(&collector, &ManualClock::new(fixed_time()))
        .await
        .unwrap();
    assert_eq!(outcome.index.len(), sample_units().len());
}

#[tokio::test]
async fn test_partial_failure_still_builds_searchable_index() {
    let dir = content_dir(
        &[("mocking.md", MOCKING_MD), ("examples.json", EXAMPLES_JSON)],
        &["mocking.md", "gone.md", "examples.json"],
    );
    let collector = ManifestCollector::new(dir.path());
    let outcome = build_from_collector(&collector, &ManualClock::new(fixed_time()))
        .await
        .unwrap();

    assert_eq!(outcome.index.len(), 3);
    let fetch = outcome.index.get("example-fetch-users-endpoint").unwrap();
    // description synthesized from content
    assert_eq!(fetch.description, "Calls the users endpoint and mocks the network.");

    let results = search("mock", &outcome.index, FilterKind::All);
    assert_eq!(results[0].result.title, "Mock Functions");
}
