//! End-to-end query scenarios over the sample documentation site.

use super::common::{fixed_time, index_of, make_item, sample_index, titles};
use docsearch::{search, FilterKind, ItemKind, SearchIndex};

#[test]
fn test_mock_finds_buried_api_reference_with_excerpt() {
    let mut api = make_item("API Reference", ItemKind::Topic);
    api.content = "vi.fn() creates a mock".to_string();
    let index = index_of(vec![api]);

    let results = search("mock", &index, FilterKind::All);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].result.title, "API Reference");
    let excerpt = results[0].result.excerpt.as_deref().unwrap_or_default();
    assert!(!excerpt.is_empty());
    assert!(excerpt.contains("mock"), "excerpt: {}", excerpt);
}

#[test]
fn test_mock_over_sample_site() {
    let index = sample_index();
    let results = search("mock", &index, FilterKind::All);

    assert_eq!(
        titles(&results),
        vec!["Mock Functions", "API Reference", "Fetch users endpoint"]
    );
    // title + keyword + content
    assert_eq!(results[0].score, 1101);
    assert_eq!(results[1].score, 1);
    assert_eq!(results[2].score, 1);
}

#[test]
fn test_component_under_docs_excludes_non_doc_examples() {
    let index = sample_index();
    let results = search("component", &index, FilterKind::Docs);

    assert!(!results.is_empty());
    for hit in &results {
        let r = &hit.result;
        let doc_category = matches!(r.category.as_deref(), Some("Documentation" | "Quick Start"));
        assert!(
            r.kind == ItemKind::Topic || doc_category,
            "{} ({:?}) should not be in docs",
            r.title,
            r.category
        );
    }
    let found = titles(&results);
    assert!(found.contains(&"API Reference"));
    assert!(found.contains(&"Hello world in five minutes"));
    assert!(!found.contains(&"Button"));
}

#[test]
fn test_empty_index_returns_nothing() {
    let index = SearchIndex::empty(fixed_time());
    for query in ["mock", "a", "anything at all"] {
        for filter in FilterKind::ALL {
            assert!(search(query, &index, filter).is_empty());
        }
    }
}
