// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire envelopes and the service an HTTP layer sits on.
//!
//! The server itself lives elsewhere. What it needs from this crate is a
//! handful of calls that never fail outright: a query always produces a
//! `SearchResponse`, a dump always produces an `IndexDump`. When the index
//! cannot be built the response is empty, carries an error message, and is
//! paired with `ResponseStatus::Unavailable`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::cache::IndexCache;
use crate::clock::{Clock, SystemClock};
use crate::search::{FilterKind, QueryEngine, SearchConfig};
use crate::types::{SearchIndex, SearchIndexItem, SearchResult};

/// Results returned by the progressive-enhancement form path.
pub const FORM_RESULT_LIMIT: usize = 10;

/// `Cache-Control` value for the index dump endpoint.
pub const DUMP_CACHE_CONTROL: &str = "public, max-age=3600";

/// Message returned to clients when the index is unavailable.
pub const INDEX_UNAVAILABLE: &str = "Search index is unavailable";

/// HTTP status the transport should use for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    Ok,
    Unavailable,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::Unavailable => 503,
        }
    }
}

/// Query parameters: `?q=...&filter=...`. Both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub filter: FilterKind,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>, filter: FilterKind) -> Self {
        SearchRequest {
            q: q.into(),
            filter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub filter: FilterKind,
    pub results: Vec<SearchResult>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The whole index as JSON, for clients that search locally.
/// Field names match `SearchIndex`'s own serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDump {
    pub items: Vec<SearchIndexItem>,
    pub generated_at: DateTime<Utc>,
    pub total_items: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The index as the service sees it: the real one, or an empty stand-in
/// plus the reason the real one is missing.
#[derive(Debug, Clone)]
pub struct IndexSnapshot {
    pub index: Arc<SearchIndex>,
    pub error: Option<String>,
}

impl IndexSnapshot {
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    pub fn status(&self) -> ResponseStatus {
        if self.is_degraded() {
            ResponseStatus::Unavailable
        } else {
            ResponseStatus::Ok
        }
    }
}

/// Cache plus query engine: the operations the search endpoints expose.
#[derive(Debug)]
pub struct SearchService {
    cache: Arc<IndexCache>,
    engine: QueryEngine,
    form_limit: usize,
    clock: Arc<dyn Clock>,
}

impl SearchService {
    pub fn new(cache: Arc<IndexCache>, config: SearchConfig) -> Self {
        SearchService {
            cache,
            engine: QueryEngine::new(config),
            form_limit: FORM_RESULT_LIMIT,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_form_limit(mut self, limit: usize) -> Self {
        self.form_limit = limit;
        self
    }

    /// Clock used to stamp the empty index served when a build fails.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn cache(&self) -> &Arc<IndexCache> {
        &self.cache
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// The cached index, or an empty degraded one if it cannot be built.
    pub async fn index(&self) -> IndexSnapshot {
        match self.cache.get_or_build().await {
            Ok(index) => IndexSnapshot { index, error: None },
            Err(err) => {
                error!(code = err.status_code(), error = %err, "search index unavailable");
                IndexSnapshot {
                    index: Arc::new(SearchIndex::empty(self.clock.now())),
                    error: Some(INDEX_UNAVAILABLE.to_string()),
                }
            }
        }
    }

    pub async fn query(&self, request: SearchRequest) -> (ResponseStatus, SearchResponse) {
        self.respond(request, None).await
    }

    /// Same as `query`, capped at the form limit.
    pub async fn form_action(&self, q: &str, filter: FilterKind) -> (ResponseStatus, SearchResponse) {
        self.respond(SearchRequest::new(q, filter), Some(self.form_limit))
            .await
    }

    pub async fn dump(&self) -> (ResponseStatus, IndexDump) {
        let snapshot = self.index().await;
        let status = snapshot.status();
        let dump = IndexDump {
            items: snapshot.index.items.clone(),
            generated_at: snapshot.index.generated_at,
            total_items: snapshot.index.len(),
            error: snapshot.error,
        };
        (status, dump)
    }

    async fn respond(
        &self,
        request: SearchRequest,
        limit: Option<usize>,
    ) -> (ResponseStatus, SearchResponse) {
        let snapshot = self.index().await;
        let status = snapshot.status();

        let mut results: Vec<SearchResult> = self
            .engine
            .search(&request.q, &snapshot.index, request.filter)
            .into_iter()
            .map(SearchResult::from)
            .collect();
        if let Some(limit) = limit {
            results.truncate(limit);
        }

        let response = SearchResponse {
            query: request.q,
            filter: request.filter,
            total: results.len(),
            results,
            error: snapshot.error,
        };
        (status, response)
    }
}
