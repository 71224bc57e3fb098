// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! When a cached index stops being good enough.

use chrono::{DateTime, Duration, Utc};
use std::fmt::Debug;

/// Decides whether an index built at `generated_at` can still be served at `now`.
pub trait CachePolicy: Send + Sync + Debug {
    fn is_fresh(&self, generated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool;
}

/// Build once, keep for the life of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forever;

impl CachePolicy for Forever {
    fn is_fresh(&self, _generated_at: DateTime<Utc>, _now: DateTime<Utc>) -> bool {
        true
    }
}

/// Rebuild once the index is older than the given duration.
#[derive(Debug, Clone, Copy)]
pub struct Ttl(pub Duration);

impl CachePolicy for Ttl {
    fn is_fresh(&self, generated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - generated_at < self.0
    }
}

impl CachePolicy for Box<dyn CachePolicy> {
    fn is_fresh(&self, generated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        (**self).is_fresh(generated_at, now)
    }
}
