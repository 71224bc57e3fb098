//! Filter buckets applied to real queries.

use super::common::{sample_index, titles};
use docsearch::{search, FilterKind};

#[test]
fn test_components_bucket() {
    let index = sample_index();
    let results = search("component", &index, FilterKind::Components);
    assert_eq!(titles(&results), vec!["Button", "Modal"]);
}

#[test]
fn test_examples_bucket_skips_quick_start_and_components() {
    let index = sample_index();

    assert!(search("hello", &index, FilterKind::Examples).is_empty());
    assert_eq!(titles(&search("hello", &index, FilterKind::Docs)), vec!["Hello world in five minutes"]);

    assert!(search("button", &index, FilterKind::Examples).is_empty());
    assert_eq!(titles(&search("mock", &index, FilterKind::Examples)), vec!["Fetch users endpoint"]);
}

#[test]
fn test_code_snippets_only_in_all() {
    let index = sample_index();
    assert_eq!(titles(&search("retry", &index, FilterKind::All)), vec!["Retry with backoff"]);
    for filter in [FilterKind::Docs, FilterKind::Examples, FilterKind::Components] {
        assert!(search("retry", &index, filter).is_empty(), "{}", filter);
    }
}

#[test]
fn test_unknown_filter_name_means_all() {
    let index = sample_index();
    let filter = FilterKind::parse_lenient("videos");
    assert_eq!(
        search("mock", &index, filter),
        search("mock", &index, FilterKind::All)
    );
}
