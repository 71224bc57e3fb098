// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::path::Path;

use crate::error::IndexBuildError;

/// File name looked up in a content directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Highest manifest schema this crate understands.
pub const MANIFEST_VERSION: u32 = 1;

/// The list of content sources for one site.
///
/// ```json
/// { "version": 1, "sources": ["topics/mocking.md", "examples.json"] }
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContentManifest {
    pub version: u32,
    /// Paths relative to the manifest's directory, in index order.
    pub sources: Vec<String>,
}

impl ContentManifest {
    /// Parse and validate manifest JSON. `path` is only used for messages.
    pub fn parse(path: &Path, json: &str) -> Result<Self, IndexBuildError> {
        let manifest: ContentManifest =
            serde_json::from_str(json).map_err(|e| IndexBuildError::ManifestParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if manifest.version == 0 || manifest.version > MANIFEST_VERSION {
            return Err(IndexBuildError::ManifestParse {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported version {} (expected 1..={})",
                    manifest.version, MANIFEST_VERSION
                ),
            });
        }

        Ok(manifest)
    }
}
