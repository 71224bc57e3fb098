// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how hits get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Position** - ascending index order, so ties resolve first-seen-first
//!
//! Position is unique per item, which makes the order total and the output
//! deterministic for a given index.

use std::cmp::Ordering;

/// A scored item before results are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub position: usize,
    pub score: u32,
}

pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort hits best-first.
pub fn rank(hits: &mut [Hit]) {
    hits.sort_unstable_by(compare_hits);
}
