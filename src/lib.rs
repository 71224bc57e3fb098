// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-text search for a documentation site.
//!
//! Content comes in from collectors (markdown topics, curated examples,
//! component notes), gets normalized into an in-memory index, and is answered
//! with ranked, filtered, case-insensitive substring queries plus excerpts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  collect/   │────▶│   build/     │────▶│   cache/    │────▶│  search/    │
//! │ (Collector, │     │ (build_index,│     │ (IndexCache,│     │(QueryEngine,│
//! │  manifest)  │     │  normalize)  │     │  policy)    │     │ filters,    │
//! └─────────────┘     └──────────────┘     └─────────────┘     │ excerpts)   │
//!                                                 │            └─────────────┘
//!                                                 ▼                   │
//!                                          ┌─────────────────────────────────┐
//!                                          │              api/               │
//!                                          │ (SearchService, SearchResponse, │
//!                                          │  IndexDump)                     │
//!                                          └─────────────────────────────────┘
//! ```
//!
//! | Module     | Role                                              |
//! |------------|---------------------------------------------------|
//! | `types`    | Raw units, index items, results                   |
//! | `collect`  | Where content comes from                          |
//! | `build`    | Raw units to a `SearchIndex`                      |
//! | `cache`    | One shared index, built at most once at a time    |
//! | `scoring`  | Field weights and ranking order                   |
//! | `search`   | Query parsing, filters, excerpts, the engine      |
//! | `api`      | Envelopes and status codes for an HTTP layer      |
//!
//! # Usage
//!
//! ```ignore
//! use docsearch::{build_index, search, FilterKind, SystemClock};
//!
//! let outcome = build_index(units, &SystemClock);
//! let results = search("mock", &outcome.index, FilterKind::Docs);
//! ```

pub mod api;
pub mod build;
pub mod cache;
pub mod clock;
pub mod collect;
pub mod config;
pub mod error;
pub mod logging;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

// Test utilities (always compiled, hidden from docs)
#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use api::{IndexDump, ResponseStatus, SearchRequest, SearchResponse, SearchService};
pub use build::{build_from_collector, build_index, BuildDiagnostic, BuildOutcome};
pub use cache::{CachePolicy, Forever, IndexCache, Ttl};
pub use clock::{Clock, ManualClock, SystemClock};
pub use collect::{Collector, ManifestCollector, StaticCollector};
pub use config::Settings;
pub use error::{CollectionError, ConfigError, IndexBuildError};
pub use search::{search, FilterKind, QueryEngine, SearchConfig};
pub use types::{ItemKind, RawUnit, ScoredResult, SearchIndex, SearchIndexItem, SearchResult};
