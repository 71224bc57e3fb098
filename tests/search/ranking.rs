//! Field weighting and ordering.
//!
//! Tests that:
//! - A title match beats any number of keyword, description or content hits
//! - Keyword hits beat description and content hits
//! - Equal scores keep index order
//! - Case never changes a score

use super::common::{index_of, make_item};
use docsearch::scoring::{CONTENT_WEIGHT, DESCRIPTION_WEIGHT, KEYWORD_WEIGHT, TITLE_WEIGHT};
use docsearch::{search, FilterKind, ItemKind, QueryEngine, SearchConfig};

#[test]
fn test_title_beats_everything_else() {
    let mut everywhere = make_item("Unrelated", ItemKind::Topic);
    everywhere.keywords = vec!["spy".into()];
    everywhere.description = "spy helpers".into();
    everywhere.content = "spy spy spy".into();
    let titled = make_item("Spy", ItemKind::Topic);

    let index = index_of(vec![everywhere, titled]);
    let results = search("spy", &index, FilterKind::All);

    assert_eq!(results[0].result.title, "Spy");
    assert_eq!(results[1].score, KEYWORD_WEIGHT + DESCRIPTION_WEIGHT + CONTENT_WEIGHT);
    assert!(results[0].score >= TITLE_WEIGHT);
}

#[test]
fn test_keyword_beats_description_and_content() {
    let mut described = make_item("First", ItemKind::Topic);
    described.description = "about stubs".into();
    described.content = "stubs everywhere".into();
    let mut tagged = make_item("Second", ItemKind::Topic);
    tagged.keywords = vec!["stubs".into()];

    let index = index_of(vec![described, tagged]);
    let results = search("stubs", &index, FilterKind::All);

    assert_eq!(results[0].result.title, "Second");
    assert_eq!(results[0].score, KEYWORD_WEIGHT);
    assert_eq!(results[1].score, DESCRIPTION_WEIGHT + CONTENT_WEIGHT);
}

#[test]
fn test_content_counts_each_token_once() {
    let mut item = make_item("Plain", ItemKind::Topic);
    item.content = "alpha alpha alpha beta".into();
    let index = index_of(vec![item]);

    assert_eq!(search("alpha", &index, FilterKind::All)[0].score, CONTENT_WEIGHT);
    assert_eq!(search("alpha beta", &index, FilterKind::All)[0].score, 2 * CONTENT_WEIGHT);
    assert_eq!(search("alpha alpha", &index, FilterKind::All)[0].score, CONTENT_WEIGHT);
}

#[test]
fn test_equal_scores_keep_index_order() {
    let items = (0..6)
        .map(|i| {
            let mut item = make_item(&format!("Page {}", i), ItemKind::Topic);
            item.content = "shared".into();
            item
        })
        .collect();
    let index = index_of(items);

    let positions: Vec<usize> = search("shared", &index, FilterKind::All)
        .iter()
        .map(|r| r.position)
        .collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_case_does_not_change_ranking() {
    let mut a = make_item("Snapshot Testing", ItemKind::Topic);
    a.keywords = vec!["Snapshot".into()];
    let mut b = make_item("Other", ItemKind::Topic);
    b.content = "SNAPSHOT files".into();
    let index = index_of(vec![a, b]);

    let lower = search("snapshot", &index, FilterKind::All);
    let upper = search("SNAPSHOT", &index, FilterKind::All);
    let mixed = search("SnapShot", &index, FilterKind::All);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_cap_keeps_the_best() {
    let mut items: Vec<_> = (0..15)
        .map(|i| {
            let mut item = make_item(&format!("Filler {}", i), ItemKind::Topic);
            item.content = "target".into();
            item
        })
        .collect();
    items.push(make_item("Target", ItemKind::Topic));
    let index = index_of(items);

    let engine = QueryEngine::new(SearchConfig {
        max_results: Some(3),
        ..SearchConfig::default()
    });
    let results = engine.search("target", &index, FilterKind::All);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].result.title, "Target");
    assert_eq!(results[1].position, 0);
}
