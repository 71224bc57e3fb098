// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::collect::Collector;
use crate::error::IndexBuildError;
use crate::types::{ItemKind, RawUnit, SearchIndex, SearchIndexItem};
use crate::util::slugify;

/// The timestamp every fixture index is stamped with.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create a raw unit with default fields.
pub fn make_unit(title: &str, kind: ItemKind) -> RawUnit {
    RawUnit {
        title: title.to_string(),
        description: format!("About {}", title),
        url: format!("/{}/{}", kind, slugify(title)),
        kind,
        category: None,
        raw_text: format!("Body of {}", title),
        keywords: None,
    }
}

/// Create an index item with default fields.
pub fn make_item(title: &str, kind: ItemKind) -> SearchIndexItem {
    make_item_in(title, kind, None)
}

/// Create an index item with a category.
pub fn make_item_in(title: &str, kind: ItemKind, category: Option<&str>) -> SearchIndexItem {
    SearchIndexItem {
        id: format!("{}-{}", kind, slugify(title)),
        title: title.to_string(),
        description: format!("About {}", title),
        url: format!("/{}/{}", kind, slugify(title)),
        kind,
        category: category.map(str::to_string),
        content: format!("Body of {}", title),
        keywords: vec![],
    }
}

/// Wrap items in an index stamped with `fixed_time()`.
pub fn index_of(items: Vec<SearchIndexItem>) -> SearchIndex {
    SearchIndex {
        items,
        generated_at: fixed_time(),
    }
}

fn unit(
    title: &str,
    description: &str,
    url: &str,
    kind: ItemKind,
    category: &str,
    raw_text: &str,
    keywords: &[&str],
) -> RawUnit {
    RawUnit {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        kind,
        category: Some(category.to_string()),
        raw_text: raw_text.to_string(),
        keywords: (!keywords.is_empty()).then(|| keywords.iter().map(|k| k.to_string()).collect()),
    }
}

/// A small documentation site: topics, API examples, components, snippets.
pub fn sample_units() -> Vec<RawUnit> {
    vec![
        unit(
            "Getting Started",
            "Install the test runner and write a first test",
            "/docs/getting-started",
            ItemKind::Topic,
            "Quick Start",
            "# Getting Started\n\nInstall with `npm install -D vitest`. Add a `test` script and run it.",
            &["install", "setup"],
        ),
        unit(
            "API Reference",
            "Every function exported by the runner",
            "/docs/api",
            ItemKind::Topic,
            "Documentation",
            "## vi.fn\n\n`vi.fn()` creates a mock function that records its calls.\n\n## expect\n\nAssertions for values and component output.",
            &["vi", "expect"],
        ),
        unit(
            "Mock Functions",
            "Replace dependencies with spies",
            "/docs/mocking",
            ItemKind::Topic,
            "Documentation",
            "Mocks replace real implementations. Use `vi.spyOn` to watch an existing method.",
            &["mock", "spy", "stub"],
        ),
        unit(
            "Snapshot Testing",
            "Compare rendered output with a stored snapshot",
            "/docs/snapshots",
            ItemKind::Topic,
            "Documentation",
            "Snapshots serialize a value on first run and diff on every later run.",
            &["snapshot"],
        ),
        unit(
            "Fetch users endpoint",
            "GET /api/users with pagination",
            "/examples/api/users",
            ItemKind::Example,
            "API",
            "Calls the users endpoint, then mocks the network layer in tests.",
            &["http", "rest"],
        ),
        unit(
            "Login form",
            "Form action that validates credentials",
            "/examples/login",
            ItemKind::Example,
            "Forms",
            "A server-side form action with validation and error messages.",
            &["form", "auth"],
        ),
        unit(
            "Hello world in five minutes",
            "The shortest possible example",
            "/examples/hello",
            ItemKind::Example,
            "Quick Start",
            "Print hello world, then add a component test.",
            &[],
        ),
        unit(
            "Button",
            "Clickable button component",
            "/components/button",
            ItemKind::Example,
            "Components",
            "A button component with primary and secondary variants.",
            &["click", "cta"],
        ),
        unit(
            "Modal",
            "Dialog overlay component",
            "/components/modal",
            ItemKind::Example,
            "Components",
            "Traps focus and closes on escape.",
            &["dialog"],
        ),
        unit(
            "Retry with backoff",
            "Retry an async call with exponential backoff",
            "/snippets/retry",
            ItemKind::Code,
            "Snippets",
            "async function retry(fn, attempts) { for (let i = 0; i < attempts; i++) { try { return await fn() } catch {} } }",
            &["retry", "async"],
        ),
    ]
}

/// A collector that counts how often it is asked for content and can be
/// made slow, for exercising the cache's single-flight behavior.
#[derive(Debug)]
pub struct CountingCollector {
    units: Vec<RawUnit>,
    delay: Duration,
    calls: AtomicUsize,
}

impl CountingCollector {
    pub fn new(units: Vec<RawUnit>) -> Self {
        CountingCollector {
            units,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Collector for CountingCollector {
    fn collect(&self) -> impl Future<Output = Result<Vec<RawUnit>, IndexBuildError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let units = self.units.clone();
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(units)
        }
    }
}
