//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use docsearch::{build_index, ManualClock, SearchIndex};
use tempfile::TempDir;

// Re-export canonical test utilities from docsearch::testing
pub use docsearch::testing::{
    fixed_time, index_of, make_item, make_item_in, make_unit, sample_units, CountingCollector,
};

// ============================================================================
// INDEXES
// ============================================================================

/// The sample documentation site, built at `fixed_time()`.
pub fn sample_index() -> SearchIndex {
    build_index(sample_units(), &ManualClock::new(fixed_time())).index
}

/// Titles of a result list, in order.
pub fn titles(results: &[docsearch::ScoredResult]) -> Vec<&str> {
    results.iter().map(|r| r.result.title.as_str()).collect()
}

// ============================================================================
// CONTENT DIRECTORIES
// ============================================================================

/// A temporary content directory holding `files` plus a manifest listing
/// `sources` in order.
pub fn content_dir(files: &[(&str, &str)], sources: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, body) in files {
        write(dir.path(), name, body);
    }
    let manifest = serde_json::json!({ "version": 1, "sources": sources });
    write(dir.path(), "manifest.json", &manifest.to_string());
    dir
}

pub fn write(root: &Path, name: &str, body: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

pub const MOCKING_MD: &str = "---
title: Mock Functions
description: Replace dependencies with spies
keywords: [mock, spy]
url: /docs/mocking
---

# Mocking

Use `vi.fn()` to create a **mock** function.
";

pub const EXAMPLES_JSON: &str = r#"[
    {
        "title": "Button",
        "description": "Clickable button component",
        "url": "/components/button",
        "type": "example",
        "category": "Components",
        "rawText": "A button component with variants.",
        "keywords": ["click"]
    },
    {
        "title": "Fetch users endpoint",
        "url": "/examples/api/users",
        "type": "example",
        "category": "API",
        "raw_text": "Calls the users endpoint and mocks the network."
    }
]"#;
