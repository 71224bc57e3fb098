//! Excerpts as they come out of a full query.

use super::common::{index_of, make_item};
use docsearch::search::ELLIPSIS;
use docsearch::{search, FilterKind, ItemKind, QueryEngine, SearchConfig};

fn long_content() -> String {
    let before = "lorem ipsum dolor sit amet ".repeat(20);
    let after = " consectetur adipiscing elit".repeat(20);
    format!("{}the needle is here{}", before, after)
}

#[test]
fn test_excerpt_centers_on_match() {
    let mut item = make_item("Haystack", ItemKind::Topic);
    item.content = long_content();
    let index = index_of(vec![item]);

    let results = search("needle", &index, FilterKind::All);
    let excerpt = results[0].result.excerpt.clone().unwrap();

    assert!(excerpt.contains("the needle is here"));
    assert!(excerpt.starts_with(ELLIPSIS));
    assert!(excerpt.ends_with(ELLIPSIS));
    // 80 chars either side, plus the match, plus two ellipses
    assert!(excerpt.chars().count() <= 80 * 2 + "needle".len() + 2 * ELLIPSIS.len());
}

#[test]
fn test_excerpt_radius_is_configurable() {
    let mut item = make_item("Haystack", ItemKind::Topic);
    item.content = long_content();
    let index = index_of(vec![item]);

    let narrow = QueryEngine::new(SearchConfig {
        excerpt_radius: 10,
        ..SearchConfig::default()
    });
    let excerpt = narrow.search("needle", &index, FilterKind::All)[0]
        .result
        .excerpt
        .clone()
        .unwrap();
    assert!(excerpt.contains("needle"));
    assert!(excerpt.chars().count() <= 10 * 2 + "needle".len() + 2 * ELLIPSIS.len());
}

#[test]
fn test_title_only_match_uses_leading_content() {
    let mut item = make_item("Modal", ItemKind::Example);
    item.content = "Traps focus and closes on escape.".into();
    let index = index_of(vec![item]);

    let results = search("modal", &index, FilterKind::All);
    assert_eq!(
        results[0].result.excerpt.as_deref(),
        Some("Traps focus and closes on escape.")
    );
}

#[test]
fn test_no_content_falls_back_to_description() {
    let mut item = make_item("Modal", ItemKind::Example);
    item.content.clear();
    item.description = "Dialog overlay component".into();
    let index = index_of(vec![item]);

    let results = search("modal", &index, FilterKind::All);
    assert_eq!(results[0].result.excerpt.as_deref(), Some("Dialog overlay component"));
}
