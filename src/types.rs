// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! Content arrives from collectors as loosely-shaped `RawUnit`s, gets
//! normalized into `SearchIndexItem`s, and is frozen into a `SearchIndex`.
//! Queries hand back `ScoredResult`s whose public half (`SearchResult`) is what
//! goes over the wire.
//!
//! # Invariants
//!
//! - **SearchIndexItem**: `title` and `description` are non-empty, `id` is
//!   `<kind>-<slug>` and unique within its index.
//! - **SearchIndex**: never mutated after construction. Rebuilding produces a
//!   new value that replaces the old one wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of content an item is. Closed set; callers filter on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A documentation page.
    Topic,
    /// A curated example (API endpoint, usage recipe, component demo).
    Example,
    /// A standalone code snippet.
    Code,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Topic => "topic",
            ItemKind::Example => "example",
            ItemKind::Code => "code",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topic" => Ok(ItemKind::Topic),
            "example" => Ok(ItemKind::Example),
            "code" => Ok(ItemKind::Code),
            other => Err(format!("unknown item type '{}'", other)),
        }
    }
}

/// Content as a collector found it, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnit {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "raw_text")]
    pub raw_text: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// One indexed unit of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Searchable body with markdown stripped and whitespace collapsed.
    pub content: String,
    /// High-weight match terms, in the order the source listed them.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Immutable snapshot of every searchable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub items: Vec<SearchIndexItem>,
    pub generated_at: DateTime<Utc>,
}

impl SearchIndex {
    /// An index with no items, e.g. the degraded response after a failed build.
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        SearchIndex {
            items: Vec::new(),
            generated_at,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SearchIndexItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// A query hit as callers see it. The score stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// A search result paired with its relevance score and index position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredResult {
    pub result: SearchResult,
    pub score: u32,
    /// Position of the item in `SearchIndex::items`; the ranking tiebreaker.
    pub position: usize,
}

impl From<ScoredResult> for SearchResult {
    fn from(scored: ScoredResult) -> Self {
        scored.result
    }
}
