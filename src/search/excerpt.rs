// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt generation.
//!
//! Finds the earliest content match of any query token, takes `radius`
//! characters on each side, pulls the edges in to whole words, and marks cut
//! edges with `...`. When the content has no match (the hit came from the
//! title or keywords) the excerpt is the start of the content, or the
//! description if there is no content at all.

use crate::types::SearchIndexItem;
use crate::util::LowerMap;

/// Characters of context on each side of a match.
pub const DEFAULT_EXCERPT_RADIUS: usize = 80;

/// Marker for text cut off at an excerpt edge.
pub const ELLIPSIS: &str = "...";

pub fn build_excerpt(item: &SearchIndexItem, tokens: &[String], radius: usize) -> String {
    if item.content.is_empty() {
        return item.description.clone();
    }

    let map = LowerMap::new(&item.content);
    match map.find_earliest(tokens) {
        Some((start, end)) => window(&item.content, start, end, radius),
        None => window(&item.content, 0, 0, radius.saturating_mul(2)),
    }
}

/// `radius` chars either side of `[start, end)`, trimmed to word boundaries.
fn window(content: &str, start: usize, end: usize, radius: usize) -> String {
    let mut from = content[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let mut to = content[end..]
        .char_indices()
        .nth(radius)
        .map_or(content.len(), |(i, _)| end + i);

    if from > 0 && !ends_with_space(&content[..from]) {
        if let Some(space) = content[from..start].find(char::is_whitespace) {
            from += space;
        }
    }
    if to < content.len() && !starts_with_space(&content[to..]) {
        if let Some(space) = content[end..to].rfind(char::is_whitespace) {
            to = end + space;
        }
    }

    let mut excerpt = String::with_capacity(to - from + 2 * ELLIPSIS.len());
    if from > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(content[from..to].trim());
    if to < content.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

fn ends_with_space(s: &str) -> bool {
    s.chars().next_back().is_some_and(char::is_whitespace)
}

fn starts_with_space(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_whitespace)
}
