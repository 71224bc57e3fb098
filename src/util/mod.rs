// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Whitespace collapsing and slugs for the index builder, markdown stripping
//! for topic bodies, and a lowercase view of text that remembers where each
//! byte came from so excerpts can be cut from the original casing.

pub mod lower;
pub mod markdown;
pub mod normalize;

pub use lower::LowerMap;
pub use markdown::strip_markdown;
pub use normalize::{collapse_whitespace, normalize_query, slugify, truncate_chars};
