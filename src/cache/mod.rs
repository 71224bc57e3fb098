// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The process-wide index cache.
//!
//! Holds the most recent `SearchIndex` and builds one lazily on first use.
//! Everything that varies is injected: the build function, the clock, and the
//! freshness policy. No globals, so every test gets its own cache.
//!
//! # Concurrency
//!
//! Two locks with different jobs:
//!
//! - `snapshot`: a parking_lot `RwLock<Option<Arc<SearchIndex>>>`. Held only
//!   long enough to clone or swap the `Arc`, never across an `.await`.
//!   Readers always get a complete index; a rebuild replaces the pointer.
//! - `gate`: a tokio `Mutex<()>` held for the whole build. The first caller on
//!   a cold cache takes it and builds; everyone else queues behind it and
//!   re-checks the snapshot once inside, finding the fresh index instead of
//!   building again. At most one build is ever in flight.

pub mod policy;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::build::build_from_collector;
use crate::clock::{Clock, SystemClock};
use crate::collect::Collector;
use crate::error::IndexBuildError;
use crate::types::SearchIndex;

pub use policy::{CachePolicy, Forever, Ttl};

/// Boxed future returned by a build function.
pub type BuildFuture = Pin<Box<dyn Future<Output = Result<SearchIndex, IndexBuildError>> + Send>>;

type BuildFn = Arc<dyn Fn() -> BuildFuture + Send + Sync>;

pub struct IndexCache {
    build: BuildFn,
    clock: Arc<dyn Clock>,
    policy: Box<dyn CachePolicy>,
    snapshot: RwLock<Option<Arc<SearchIndex>>>,
    gate: Mutex<()>,
    builds: AtomicUsize,
}

impl IndexCache {
    /// A cache around an arbitrary build function. Defaults: system clock,
    /// `Forever` policy.
    pub fn new<F, Fut>(build: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<SearchIndex, IndexBuildError>> + Send + 'static,
    {
        IndexCache {
            build: Arc::new(move || Box::pin(build()) as BuildFuture),
            clock: Arc::new(SystemClock),
            policy: Box::new(Forever),
            snapshot: RwLock::new(None),
            gate: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }

    /// A cache that collects from `collector` and stamps indexes with `clock`.
    pub fn for_collector<C>(collector: Arc<C>, clock: Arc<dyn Clock>) -> Self
    where
        C: Collector + 'static,
    {
        let build_clock = Arc::clone(&clock);
        IndexCache::new(move || {
            let collector = Arc::clone(&collector);
            let clock = Arc::clone(&build_clock);
            async move {
                build_from_collector(collector.as_ref(), clock.as_ref())
                    .await
                    .map(|outcome| outcome.index)
            }
        })
        .with_clock(clock)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_policy(mut self, policy: impl CachePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Current snapshot, fresh or not. Never builds.
    pub fn snapshot(&self) -> Option<Arc<SearchIndex>> {
        self.snapshot.read().clone()
    }

    /// Number of builds that completed successfully.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    fn fresh_snapshot(&self) -> Option<Arc<SearchIndex>> {
        let snapshot = self.snapshot()?;
        self.policy
            .is_fresh(snapshot.generated_at, self.clock.now())
            .then_some(snapshot)
    }

    /// The cached index, building it first if there is none or it went stale.
    ///
    /// If a rebuild of a stale index fails, the stale index is returned and
    /// the next call tries again. A cold cache has nothing to fall back on and
    /// returns the error.
    pub async fn get_or_build(&self) -> Result<Arc<SearchIndex>, IndexBuildError> {
        if let Some(index) = self.fresh_snapshot() {
            return Ok(index);
        }

        let _gate = self.gate.lock().await;

        // Another caller may have finished a build while we waited.
        if let Some(index) = self.fresh_snapshot() {
            return Ok(index);
        }

        debug!("building search index");
        match (self.build)().await {
            Ok(index) => {
                let index = Arc::new(index);
                *self.snapshot.write() = Some(Arc::clone(&index));
                self.builds.fetch_add(1, Ordering::AcqRel);
                Ok(index)
            }
            Err(err) => match self.snapshot() {
                Some(stale) => {
                    warn!(error = %err, "index rebuild failed; serving previous index");
                    Ok(stale)
                }
                None => Err(err),
            },
        }
    }
}

impl fmt::Debug for IndexCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexCache")
            .field("clock", &self.clock)
            .field("policy", &self.policy)
            .field("cached", &self.snapshot.read().is_some())
            .field("builds", &self.build_count())
            .finish()
    }
}
