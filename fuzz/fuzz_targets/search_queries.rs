// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and filter names at the query engine to verify it
//! never panics and never returns results that break the ranking or filter
//! rules. Emoji, null bytes, combining marks, megabyte queries: all of it
//! must come back as a (possibly empty) result list.

#![no_main]

use arbitrary::Arbitrary;
use docsearch::testing::{fixed_time, sample_units};
use docsearch::{build_index, FilterKind, ManualClock, QueryEngine, SearchConfig, SearchIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    query: &'a str,
    filter: &'a str,
    limit: Option<u8>,
    radius: u8,
}

fuzz_target!(|input: Input| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| build_index(sample_units(), &ManualClock::new(fixed_time())).index);

    let filter = FilterKind::parse_lenient(input.filter);
    let engine = QueryEngine::new(SearchConfig {
        max_results: input.limit.map(usize::from),
        excerpt_radius: usize::from(input.radius),
    });
    let results = engine.search(input.query, index, filter);

    if let Some(limit) = input.limit {
        assert!(results.len() <= usize::from(limit));
    }
    if input.query.trim().is_empty() {
        assert!(results.is_empty());
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position)
        );
    }
    for hit in &results {
        assert!(hit.score > 0);
        assert!(filter.matches(&index.items[hit.position]));
    }
});
