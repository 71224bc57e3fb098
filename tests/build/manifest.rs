//! Tests for manifest loading.

use super::common::{content_dir, write};
use docsearch::collect::{ContentManifest, ManifestCollector, MANIFEST_FILE};
use docsearch::{Collector, IndexBuildError};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_parse_manifest_valid() {
    let json = r#"{ "version": 1, "sources": ["a.md", "b.json"] }"#;
    let manifest = ContentManifest::parse(Path::new(MANIFEST_FILE), json).unwrap();
    assert_eq!(manifest.version, 1);
    assert_eq!(manifest.sources, vec!["a.md", "b.json"]);
}

#[test]
fn test_parse_manifest_rejects_future_version() {
    let json = r#"{ "version": 2, "sources": [] }"#;
    let err = ContentManifest::parse(Path::new(MANIFEST_FILE), json).unwrap_err();
    assert_eq!(err.status_code(), "MANIFEST_PARSE_ERROR");
}

#[tokio::test]
async fn test_missing_manifest_is_a_build_error() {
    let dir = TempDir::new().unwrap();
    let err = ManifestCollector::new(dir.path()).collect().await.unwrap_err();
    assert!(matches!(err, IndexBuildError::Manifest { .. }));
}

#[tokio::test]
async fn test_malformed_manifest_is_a_build_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), MANIFEST_FILE, "{ not json");
    let err = ManifestCollector::new(dir.path()).collect().await.unwrap_err();
    assert!(matches!(err, IndexBuildError::ManifestParse { .. }));
}

#[tokio::test]
async fn test_empty_manifest_collects_nothing() {
    let dir = content_dir(&[], &[]);
    let units = ManifestCollector::new(dir.path()).collect().await.unwrap();
    assert!(units.is_empty());
}
