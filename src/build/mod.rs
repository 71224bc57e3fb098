// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! Normalization is per unit and embarrassingly parallel, so it runs under
//! rayon when the `parallel` feature is on. Collection order is preserved
//! either way; id assignment runs afterwards in a single sequential pass so
//! "first unit wins" stays deterministic.
//!
//! Ids come from the title. Distinct pages that share a title (an "Overview"
//! in every section) fall back to a url-derived id, then to a numeric suffix.
//! Only a unit with the same kind and url as an earlier one is a duplicate.
//!
//! A bad unit never fails a build. It is skipped, logged, and reported in
//! `BuildOutcome::diagnostics`.

pub mod item;

use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::collect::Collector;
use crate::error::IndexBuildError;
use crate::types::{ItemKind, RawUnit, SearchIndex, SearchIndexItem};

pub use item::{item_id, normalize_unit, url_id, SkipReason};

/// A unit that was left out of the index, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDiagnostic {
    /// Position of the unit in the collector's output.
    pub position: usize,
    pub title: String,
    pub reason: SkipReason,
}

/// A freshly built index plus notes on anything skipped.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub index: SearchIndex,
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// Build an index from raw units. Never fails; an empty input yields an empty index.
pub fn build_index(units: Vec<RawUnit>, clock: &dyn Clock) -> BuildOutcome {
    let titles: Vec<String> = units.iter().map(|u| u.title.clone()).collect();

    #[cfg(feature = "parallel")]
    let normalized: Vec<_> = units.into_par_iter().map(normalize_unit).collect();
    #[cfg(not(feature = "parallel"))]
    let normalized: Vec<_> = units.into_iter().map(normalize_unit).collect();

    let mut items: Vec<SearchIndexItem> = Vec::with_capacity(normalized.len());
    let mut diagnostics = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(normalized.len());
    let mut seen_pages: HashSet<(ItemKind, String)> = HashSet::with_capacity(normalized.len());

    for (position, result) in normalized.into_iter().enumerate() {
        let outcome = result.and_then(|mut item| {
            if !seen_pages.insert((item.kind, item.url.clone())) {
                return Err(SkipReason::DuplicateId(item.id));
            }
            if seen_ids.contains(&item.id) {
                item.id = free_id(url_id(item.kind, &item.url), &seen_ids);
            }
            seen_ids.insert(item.id.clone());
            Ok(item)
        });

        match outcome {
            Ok(item) => items.push(item),
            Err(reason) => {
                warn!(position, title = %titles[position], %reason, "skipping unit");
                diagnostics.push(BuildDiagnostic {
                    position,
                    title: titles[position].clone(),
                    reason,
                });
            }
        }
    }

    let index = SearchIndex {
        items,
        generated_at: clock.now(),
    };
    info!(
        items = index.len(),
        skipped = diagnostics.len(),
        "built search index"
    );

    BuildOutcome { index, diagnostics }
}

/// `base`, or `base-2`, `base-3`, ... whichever is first unused.
fn free_id(base: String, taken: &HashSet<String>) -> String {
    if !taken.contains(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|id| !taken.contains(id))
        .unwrap_or(base)
}

/// Collect, then build. Only a total collection failure is an error.
pub async fn build_from_collector<C: Collector>(
    collector: &C,
    clock: &dyn Clock,
) -> Result<BuildOutcome, IndexBuildError> {
    let units = collector.collect().await?;
    Ok(build_index(units, clock))
}
