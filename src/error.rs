// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for collection, index construction and configuration.
//!
//! Two layers, two policies. A `CollectionError` concerns one source and is
//! absorbed where it happens: the source is skipped, a warning is logged, the
//! index is built from whatever survived. An `IndexBuildError` means nothing
//! usable came back at all and is the only thing that propagates. Queries have
//! no error type.

use std::path::PathBuf;
use thiserror::Error;

/// A single content source could not be turned into raw units.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Failed to read source '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse source '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported source '{path}'. Supported types: .md, .markdown, .json")]
    UnsupportedSource { path: PathBuf },

    #[error("Loading source '{path}' was aborted: {reason}")]
    Aborted { path: PathBuf, reason: String },
}

/// No index could be produced.
#[derive(Error, Debug)]
pub enum IndexBuildError {
    #[error("Failed to read manifest '{path}': {source}")]
    Manifest {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid manifest '{path}': {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("All {attempted} content sources failed to load")]
    AllSourcesFailed { attempted: usize },

    #[error("Collector failed: {reason}")]
    Collector { reason: String },
}

impl IndexBuildError {
    /// Stable identifier for JSON responses.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::Manifest { .. } => "MANIFEST_READ_ERROR",
            Self::ManifestParse { .. } => "MANIFEST_PARSE_ERROR",
            Self::AllSourcesFailed { .. } => "ALL_SOURCES_FAILED",
            Self::Collector { .. } => "COLLECTOR_ERROR",
        }
    }
}

/// Configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}
