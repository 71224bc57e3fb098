// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category filters.
//!
//! Four buckets. `docs` and `examples` are deliberately lopsided: a
//! `Quick Start` example counts as documentation and is kept out of the
//! examples bucket, while `Components` items get a bucket of their own.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::types::{ItemKind, SearchIndexItem};

/// Categories that put an item in the `docs` bucket regardless of its type.
pub const DOC_CATEGORIES: [&str; 2] = ["Documentation", "Quick Start"];

/// Category of the `components` bucket.
pub const COMPONENTS_CATEGORY: &str = "Components";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FilterKind {
    #[default]
    All,
    Docs,
    Examples,
    Components,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::All,
        FilterKind::Docs,
        FilterKind::Examples,
        FilterKind::Components,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::All => "all",
            FilterKind::Docs => "docs",
            FilterKind::Examples => "examples",
            FilterKind::Components => "components",
        }
    }

    /// Parse a filter name; anything unrecognized means `All`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Check if an item belongs to this bucket.
    pub fn matches(self, item: &SearchIndexItem) -> bool {
        let category = item.category.as_deref();
        let is_doc_category = category.is_some_and(|c| DOC_CATEGORIES.contains(&c));

        match self {
            FilterKind::All => true,
            FilterKind::Docs => item.kind == ItemKind::Topic || is_doc_category,
            FilterKind::Examples => {
                item.kind == ItemKind::Example
                    && !is_doc_category
                    && category != Some(COMPONENTS_CATEGORY)
            }
            FilterKind::Components => category == Some(COMPONENTS_CATEGORY),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(FilterKind::All),
            "docs" => Ok(FilterKind::Docs),
            "examples" => Ok(FilterKind::Examples),
            "components" => Ok(FilterKind::Components),
            other => Err(format!(
                "unknown filter '{}' (expected all, docs, examples or components)",
                other
            )),
        }
    }
}

impl From<String> for FilterKind {
    fn from(value: String) -> Self {
        FilterKind::parse_lenient(&value)
    }
}
