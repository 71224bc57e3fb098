// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: where the rubber meets the road.
//!
//! Everything culminates here. Parse the query, walk every item the filter
//! lets through, score it, drop the zeros, rank, cap, cut excerpts.
//!
//! There is no failure path. Empty queries, megabyte queries, emoji and
//! control characters all end in a (possibly empty) result list.

pub mod excerpt;
pub mod filter;
pub mod query;

use tracing::debug;

use crate::scoring::ranking::{rank, Hit};
use crate::scoring::score_item;
use crate::types::{ScoredResult, SearchIndex, SearchIndexItem, SearchResult};

pub use excerpt::{build_excerpt, DEFAULT_EXCERPT_RADIUS, ELLIPSIS};
pub use filter::{FilterKind, COMPONENTS_CATEGORY, DOC_CATEGORIES};
pub use query::{parse_query, ParsedQuery};

/// Tunables for a query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Cap on returned results; `None` returns every match.
    pub max_results: Option<usize>,
    /// Characters of context either side of an excerpt's match.
    pub excerpt_radius: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_results: None,
            excerpt_radius: DEFAULT_EXCERPT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: SearchConfig,
}

impl QueryEngine {
    pub fn new(config: SearchConfig) -> Self {
        QueryEngine { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ranked matches for `query` among the items `filter` admits.
    pub fn search(&self, query: &str, index: &SearchIndex, filter: FilterKind) -> Vec<ScoredResult> {
        let Some(parsed) = ParsedQuery::parse(query) else {
            return Vec::new();
        };

        let mut hits: Vec<Hit> = index
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item))
            .filter_map(|(position, item)| {
                let score = score_item(item, &parsed);
                (score > 0).then_some(Hit { position, score })
            })
            .collect();

        rank(&mut hits);
        let total = hits.len();
        if let Some(limit) = self.config.max_results {
            hits.truncate(limit);
        }

        debug!(
            tokens = parsed.tokens().len(),
            %filter,
            matches = total,
            returned = hits.len(),
            "search"
        );

        hits.into_iter()
            .map(|hit| ScoredResult {
                result: to_result(&index.items[hit.position], parsed.tokens(), self.config.excerpt_radius),
                score: hit.score,
                position: hit.position,
            })
            .collect()
    }
}

fn to_result(item: &SearchIndexItem, tokens: &[String], radius: usize) -> SearchResult {
    SearchResult {
        id: item.id.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        url: item.url.clone(),
        kind: item.kind,
        category: item.category.clone(),
        excerpt: Some(build_excerpt(item, tokens, radius)).filter(|e| !e.is_empty()),
    }
}

/// Search with the default configuration (no result cap, 80-char excerpts).
pub fn search(query: &str, index: &SearchIndex, filter: FilterKind) -> Vec<ScoredResult> {
    QueryEngine::default().search(query, index, filter)
}
