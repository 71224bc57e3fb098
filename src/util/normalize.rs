// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by the builder and the query engine.

/// Trim and collapse every whitespace run to a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a string for matching: lowercase and collapse whitespace.
///
/// No diacritic folding or stemming. "Café" and "cafe" are different words
/// here, "MOCK" and "mock" are not.
pub fn normalize_query(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

/// Derive a URL-safe slug: lowercase alphanumeric runs joined by `-`.
///
/// ```ignore
/// assert_eq!(slugify("API Reference: vi.fn()"), "api-reference-vi-fn");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// First `max_chars` characters of `value`, never splitting a UTF-8 sequence.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}
