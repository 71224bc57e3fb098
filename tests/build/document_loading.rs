//! Loading markdown and JSON sources from a content directory.

use super::common::{content_dir, EXAMPLES_JSON, MOCKING_MD};
use docsearch::collect::{ManifestCollector, DEFAULT_TOPIC_CATEGORY};
use docsearch::{Collector, IndexBuildError, ItemKind};

#[tokio::test]
async fn test_units_come_back_in_manifest_order() {
    let dir = content_dir(
        &[("topics/mocking.md", MOCKING_MD), ("examples.json", EXAMPLES_JSON)],
        &["examples.json", "topics/mocking.md"],
    );
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();

    let titles: Vec<_> = units.iter().map(|u| u.title.as_str()).collect();
    assert_eq!(titles, vec!["Button", "Fetch users endpoint", "Mock Functions"]);
}

#[tokio::test]
async fn test_markdown_front_matter() {
    let dir = content_dir(&[("mocking.md", MOCKING_MD)], &["mocking.md"]);
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();

    let unit = &units[0];
    assert_eq!(unit.kind, ItemKind::Topic);
    assert_eq!(unit.url, "/docs/mocking");
    assert_eq!(unit.description, "Replace dependencies with spies");
    assert_eq!(unit.category.as_deref(), Some(DEFAULT_TOPIC_CATEGORY));
    assert_eq!(unit.keywords, Some(vec!["mock".to_string(), "spy".to_string()]));
    assert!(unit.raw_text.contains("**mock**"));
}

#[tokio::test]
async fn test_markdown_without_front_matter_uses_heading() {
    let dir = content_dir(
        &[("guides/setup-guide.md", "# Setting Up\n\nRun the installer.\n")],
        &["guides/setup-guide.md"],
    );
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();

    assert_eq!(units[0].title, "Setting Up");
    assert_eq!(units[0].url, "/docs/setup-guide");
}

#[tokio::test]
async fn test_json_accepts_single_object() {
    let single = r#"{"title": "Modal", "url": "/components/modal", "type": "example", "category": "Components"}"#;
    let dir = content_dir(&[("modal.json", single)], &["modal.json"]);
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].category.as_deref(), Some("Components"));
}

#[tokio::test]
async fn test_failed_sources_are_skipped() {
    let dir = content_dir(
        &[
            ("mocking.md", MOCKING_MD),
            ("broken.json", "[{ \"title\": "),
            ("notes.txt", "plain text"),
        ],
        &["broken.json", "missing.md", "notes.txt", "mocking.md"],
    );
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].title, "Mock Functions");
}

#[tokio::test]
async fn test_all_sources_failing_is_an_error() {
    let dir = content_dir(&[("broken.json", "nope")], &["broken.json", "missing.md"]);
    let err = ManifestCollector::new(dir.path()).collect().await.unwrap_err();
    assert!(matches!(err, IndexBuildError::AllSourcesFailed { attempted: 2 }));
    assert_eq!(err.status_code(), "ALL_SOURCES_FAILED");
}

#[tokio::test]
async fn test_duplicate_urls_across_sources_keep_first() {
    let dup = r#"{"title": "Mocking (old)", "url": "/docs/mocking", "type": "topic"}"#;
    let dir = content_dir(
        &[("mocking.md", MOCKING_MD), ("old.json", dup)],
        &["mocking.md", "old.json"],
    );
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].title, "Mock Functions");
}
