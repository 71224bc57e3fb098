// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The key insight is that *where* a query matched matters far more than how
//! often. A title hit outweighs any realistic pile of body-text hits, and
//! content hits count once per query token, not once per occurrence, so long
//! pages don't win by sheer verbosity.

mod core;
pub mod ranking;

pub use core::*;
