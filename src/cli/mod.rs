// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsearch command-line interface.
//!
//! Three subcommands: `index` to build an index and report on it, `dump` to
//! print the index as the JSON clients download, and `search` to query it.
//! Every command reads a content directory (`manifest.json` plus the sources
//! it lists), falling back to `content.dir` from the configuration.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docsearch::FilterKind;

#[derive(Parser)]
#[command(
    name = "docsearch",
    about = "Full-text search over a documentation site's content",
    version
)]
pub struct Cli {
    /// Configuration file (default: ./docsearch.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect content and build an index, then summarize it
    Index {
        /// Content directory containing manifest.json
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the full index as JSON
    Dump {
        /// Content directory containing manifest.json
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Search the index and display ranked results
    Search {
        /// Search query
        query: String,

        /// Content directory containing manifest.json
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Restrict results: all, docs, examples or components
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        filter: FilterKind,

        /// Maximum number of results (default: search.max_results)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the JSON response instead of a listing
        #[arg(long)]
        json: bool,
    },
}

/// Strict filter parsing. The wire format falls back to `all` on unknown names;
/// the command line reports them instead.
fn parse_filter(value: &str) -> Result<FilterKind, String> {
    value.parse()
}
