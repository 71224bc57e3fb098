// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Layered configuration.
//!
//! Later layers win:
//! - built-in defaults
//! - `docsearch.toml` in the working directory, or the file given with `--config`
//! - environment variables prefixed with `DOCSEARCH_`
//!
//! Nested keys use a double underscore: `DOCSEARCH_SEARCH__MAX_RESULTS=20`
//! sets `search.max_results`, `DOCSEARCH_CACHE__TTL_SECS=300` sets
//! `cache.ttl_secs`. A single underscore stays part of the field name.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::api::FORM_RESULT_LIMIT;
use crate::cache::{CachePolicy, Forever, Ttl};
use crate::error::ConfigError;
use crate::search::{SearchConfig, DEFAULT_EXCERPT_RADIUS};

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "docsearch.toml";

/// Longest accepted TTL (about a century); larger values are clamped.
const MAX_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "DOCSEARCH_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `manifest.json`.
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Cap on results from a plain query. Absent means no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,

    #[serde(default = "default_excerpt_radius")]
    pub excerpt_radius: usize,

    /// Cap on results from the form-action path.
    #[serde(default = "default_form_limit")]
    pub form_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Rebuild the index once it is this old. Absent means never.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_excerpt_radius() -> usize {
    DEFAULT_EXCERPT_RADIUS
}

fn default_form_limit() -> usize {
    FORM_RESULT_LIMIT
}

fn default_log_level() -> String {
    "docsearch=info".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            dir: default_content_dir(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            max_results: None,
            excerpt_radius: default_excerpt_radius(),
            form_limit: default_form_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources.
    ///
    /// With `path`, that file must exist. Without one, `docsearch.toml` is
    /// used if present and silently skipped otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::Invalid {
                    reason: format!("config file '{}' does not exist", path.display()),
                })
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILE),
        };

        let settings: Settings = Self::figment(&file)
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
            .extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults layered under a TOML file, without the environment.
    pub fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.form_limit == 0 {
            return Err(ConfigError::Invalid {
                reason: "search.form_limit must be at least 1".into(),
            });
        }
        if self.cache.ttl_secs == Some(0) {
            return Err(ConfigError::Invalid {
                reason: "cache.ttl_secs must be at least 1 (omit it to never expire)".into(),
            });
        }
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_results: self.search.max_results,
            excerpt_radius: self.search.excerpt_radius,
        }
    }

    pub fn cache_policy(&self) -> Box<dyn CachePolicy> {
        match self.cache.ttl_secs {
            Some(secs) => {
                let secs = secs.min(MAX_TTL_SECS) as i64;
                Box::new(Ttl(chrono::Duration::seconds(secs)))
            }
            None => Box::new(Forever),
        }
    }
}
