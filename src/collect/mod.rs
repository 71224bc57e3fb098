// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content collection: gathering raw units from wherever they live.
//!
//! The builder only ever sees the `Collector` trait. Two implementations ship
//! here: `StaticCollector` for content already in memory, and
//! `ManifestCollector`, which reads a content directory described by
//! `manifest.json`.
//!
//! Sources are independent, so the manifest collector reads them
//! concurrently (one task per source) and reassembles in manifest order. A
//! source that fails is logged and skipped. A partial index beats no index.
//! Only an unreadable manifest, or every source failing, is fatal.

pub mod manifest;
pub mod source;

use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{CollectionError, IndexBuildError};
use crate::types::{ItemKind, RawUnit};

pub use manifest::{ContentManifest, MANIFEST_FILE, MANIFEST_VERSION};
pub use source::{load_source, parse_topic, parse_units, DEFAULT_TOPIC_CATEGORY};

/// Produces the raw material for one index build.
pub trait Collector: Send + Sync {
    fn collect(&self) -> impl Future<Output = Result<Vec<RawUnit>, IndexBuildError>> + Send;
}

/// Content that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCollector {
    units: Vec<RawUnit>,
}

impl StaticCollector {
    pub fn new(units: Vec<RawUnit>) -> Self {
        StaticCollector { units }
    }
}

impl Collector for StaticCollector {
    fn collect(&self) -> impl Future<Output = Result<Vec<RawUnit>, IndexBuildError>> + Send {
        let units = dedupe_units(self.units.clone());
        async move { Ok(units) }
    }
}

/// Reads `manifest.json` from a content directory and loads every source it lists.
#[derive(Debug, Clone)]
pub struct ManifestCollector {
    root: PathBuf,
}

impl ManifestCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ManifestCollector { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn load_manifest(&self) -> Result<ContentManifest, IndexBuildError> {
        let path = self.root.join(MANIFEST_FILE);
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| IndexBuildError::Manifest {
                path: path.clone(),
                source,
            })?;
        ContentManifest::parse(&path, &json)
    }

    async fn collect_sources(&self) -> Result<Vec<RawUnit>, IndexBuildError> {
        let manifest = self.load_manifest().await?;
        let attempted = manifest.sources.len();

        let mut tasks = JoinSet::new();
        for (position, relative) in manifest.sources.iter().enumerate() {
            let path = self.root.join(relative);
            tasks.spawn(async move {
                let loaded = load_source(&path).await;
                (position, path, loaded)
            });
        }

        let mut loaded: Vec<Option<Vec<RawUnit>>> = vec![None; attempted];
        let mut failures: Vec<CollectionError> = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((position, _, Ok(units))) => loaded[position] = Some(units),
                Ok((_, _, Err(err))) => failures.push(err),
                Err(join_err) => failures.push(CollectionError::Aborted {
                    path: self.root.clone(),
                    reason: join_err.to_string(),
                }),
            }
        }

        for err in &failures {
            warn!(error = %err, "skipping content source");
        }

        if attempted > 0 && failures.len() == attempted {
            return Err(IndexBuildError::AllSourcesFailed { attempted });
        }

        let units = dedupe_units(loaded.into_iter().flatten().flatten());
        debug!(
            sources = attempted,
            skipped = failures.len(),
            units = units.len(),
            "collected content"
        );
        Ok(units)
    }
}

impl Collector for ManifestCollector {
    fn collect(&self) -> impl Future<Output = Result<Vec<RawUnit>, IndexBuildError>> + Send {
        self.collect_sources()
    }
}

/// Drop units that repeat an earlier unit's (kind, url). First one wins.
pub fn dedupe_units(units: impl IntoIterator<Item = RawUnit>) -> Vec<RawUnit> {
    let mut seen: HashSet<(ItemKind, String)> = HashSet::new();
    units
        .into_iter()
        .filter(|unit| {
            let fresh = seen.insert((unit.kind, unit.url.trim().to_string()));
            if !fresh {
                debug!(url = %unit.url, kind = %unit.kind, "dropping duplicate unit");
            }
            fresh
        })
        .collect()
}
