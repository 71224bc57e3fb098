// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw unit → index item normalization.

use std::fmt;

use crate::types::{ItemKind, RawUnit, SearchIndexItem};
use crate::util::{collapse_whitespace, slugify, strip_markdown, truncate_chars};

/// Upper bound for a description synthesized from content.
pub const FALLBACK_DESCRIPTION_CHARS: usize = 160;

/// Why a unit didn't make it into the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyTitle,
    EmptyUrl,
    /// Same kind and url as an earlier unit.
    DuplicateId(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyTitle => write!(f, "title is empty"),
            SkipReason::EmptyUrl => write!(f, "url is empty"),
            SkipReason::DuplicateId(id) => {
                write!(f, "same kind and url as earlier unit '{}'", id)
            }
        }
    }
}

/// `<kind>-<slug>`, slug from the title or, failing that, the url.
pub fn item_id(kind: ItemKind, title: &str, url: &str) -> String {
    let slug = Some(slugify(title))
        .filter(|s| !s.is_empty())
        .or_else(|| Some(slugify(url)).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "untitled".to_string());
    format!("{}-{}", kind, slug)
}

/// `<kind>-<slug>` from the url alone. Used when two distinct pages share a
/// title; urls are unique per kind once duplicates are dropped.
pub fn url_id(kind: ItemKind, url: &str) -> String {
    item_id(kind, "", url)
}

/// Normalize one unit. Markdown is stripped from topics and examples; code
/// snippets keep their punctuation.
pub fn normalize_unit(unit: RawUnit) -> Result<SearchIndexItem, SkipReason> {
    let title = collapse_whitespace(&unit.title);
    if title.is_empty() {
        return Err(SkipReason::EmptyTitle);
    }

    let url = unit.url.trim().to_string();
    if url.is_empty() {
        return Err(SkipReason::EmptyUrl);
    }

    let content = match unit.kind {
        ItemKind::Code => collapse_whitespace(&unit.raw_text),
        ItemKind::Topic | ItemKind::Example => collapse_whitespace(&strip_markdown(&unit.raw_text)),
    };

    let description = Some(collapse_whitespace(&unit.description))
        .filter(|d| !d.is_empty())
        .or_else(|| Some(leading_sentence(&content)).filter(|d| !d.is_empty()))
        .unwrap_or_else(|| title.clone());

    let keywords = unit
        .keywords
        .unwrap_or_default()
        .iter()
        .map(|k| collapse_whitespace(k))
        .filter(|k| !k.is_empty())
        .collect();

    let category = unit
        .category
        .map(|c| collapse_whitespace(&c))
        .filter(|c| !c.is_empty());

    Ok(SearchIndexItem {
        id: item_id(unit.kind, &title, &url),
        title,
        description,
        url,
        kind: unit.kind,
        category,
        content,
        keywords,
    })
}

/// First sentence of `content`, capped at `FALLBACK_DESCRIPTION_CHARS`.
fn leading_sentence(content: &str) -> String {
    let capped = truncate_chars(content, FALLBACK_DESCRIPTION_CHARS);
    let end = capped
        .find(". ")
        .map_or(capped.len(), |pos| pos + 1);
    capped[..end].trim().to_string()
}
