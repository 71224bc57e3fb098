//! Inputs that must never panic or error.

use super::common::{sample_index, titles};
use docsearch::{search, FilterKind};

#[test]
fn test_whitespace_queries_return_nothing() {
    let index = sample_index();
    for query in ["", " ", "\t\n", "\u{3000}"] {
        assert!(search(query, &index, FilterKind::All).is_empty(), "{:?}", query);
    }
}

#[test]
fn test_hostile_strings_do_not_panic() {
    let index = sample_index();
    let long = "mock ".repeat(10_000);
    let queries = [
        "\0\0\0",
        "🎉 mock 🎉",
        "İstanbul",
        "ß",
        "\u{200b}mock",
        "((((",
        ".*",
        "mock\u{0301}",
        long.as_str(),
    ];
    for query in queries {
        for filter in FilterKind::ALL {
            let _ = search(query, &index, filter);
        }
    }
}

#[test]
fn test_repeated_token_counts_once() {
    let index = sample_index();
    let long = "mock ".repeat(10_000);
    let results = search(&long, &index, FilterKind::All);

    // the phrase no longer fits in any title, but the single token still
    // hits keywords and content once each
    assert_eq!(results[0].result.title, "Mock Functions");
    assert_eq!(results[0].score, 101);
    assert_eq!(results.len(), 3);
}

#[test]
fn test_late_token_in_long_query_still_matches() {
    let index = sample_index();
    let filler: Vec<String> = (0..64).map(|i| format!("zz{}", i)).collect();
    let query = format!("{} retry", filler.join(" "));

    let long = search(&query, &index, FilterKind::All);
    let short = search("retry", &index, FilterKind::All);
    assert_eq!(titles(&long), titles(&short));
    assert_eq!(long[0].result.title, "Retry with backoff");
}

#[test]
fn test_substring_matching_inside_words() {
    let index = sample_index();
    // "snap" is a prefix of "Snapshot"
    let results = search("snap", &index, FilterKind::All);
    assert_eq!(results[0].result.title, "Snapshot Testing");
}
