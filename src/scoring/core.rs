// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Four fields, four weights, each an order of magnitude apart:
//!
//! | Field       | Weight | Counted                                   |
//! |-------------|--------|-------------------------------------------|
//! | Title       | 1000   | once, if the whole query is a substring   |
//! | Keyword     | 100    | per query token found in any keyword      |
//! | Description | 10     | once, if the whole query is a substring   |
//! | Content     | 1      | per query token found anywhere in content |
//!
//! Every distinct query token is scored, however long the query. Content
//! contributes at most `MAX_CONTENT_HITS` points, so it never reaches a single
//! title hit. Keyword hits can add up past a title hit on long queries;
//! matching many curated keywords is a strong signal in its own right.
//!
//! All comparisons run on lowercase text. Scores are integers so ranking
//! never trips over float ties.

use crate::search::query::ParsedQuery;
use crate::types::SearchIndexItem;

/// Whole query found in the title.
pub const TITLE_WEIGHT: u32 = 1000;

/// Query token found in a keyword, per token.
pub const KEYWORD_WEIGHT: u32 = 100;

/// Whole query found in the description.
pub const DESCRIPTION_WEIGHT: u32 = 10;

/// Query token found in the content, per token.
pub const CONTENT_WEIGHT: u32 = 1;

/// Content hits counted toward a score. Further hits still make an item match.
pub const MAX_CONTENT_HITS: u32 = 32;

/// Where a query hit an item. Kept separate from the final number so tests
/// (and the CLI) can explain a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchBreakdown {
    pub title: bool,
    pub keyword_hits: u32,
    pub description: bool,
    pub content_hits: u32,
}

impl MatchBreakdown {
    pub fn score(&self) -> u32 {
        let title = if self.title { TITLE_WEIGHT } else { 0 };
        let description = if self.description { DESCRIPTION_WEIGHT } else { 0 };
        title
            .saturating_add(self.keyword_hits.saturating_mul(KEYWORD_WEIGHT))
            .saturating_add(description)
            .saturating_add(
                self.content_hits
                    .min(MAX_CONTENT_HITS)
                    .saturating_mul(CONTENT_WEIGHT),
            )
    }

    pub fn is_match(&self) -> bool {
        self.score() > 0
    }
}

/// Match every field of `item` against `query`.
pub fn match_item(item: &SearchIndexItem, query: &ParsedQuery) -> MatchBreakdown {
    let title = item.title.to_lowercase();
    let description = item.description.to_lowercase();
    let content = item.content.to_lowercase();
    let keywords: Vec<String> = item.keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut breakdown = MatchBreakdown {
        title: title.contains(query.phrase()),
        description: description.contains(query.phrase()),
        ..MatchBreakdown::default()
    };

    for token in query.tokens() {
        if keywords.iter().any(|k| k.contains(token.as_str())) {
            breakdown.keyword_hits += 1;
        }
        if content.contains(token.as_str()) {
            breakdown.content_hits += 1;
        }
    }

    breakdown
}

/// Relevance of `item` for `query`; 0 means no match.
pub fn score_item(item: &SearchIndexItem, query: &ParsedQuery) -> u32 {
    match_item(item, query).score()
}
