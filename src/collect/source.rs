// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning one source file into raw units.
//!
//! Markdown files are documentation topics. An optional front matter block
//! supplies metadata:
//!
//! ```text
//! ---
//! title: Mock Functions
//! description: Replace dependencies with spies
//! category: Documentation
//! keywords: mock, spy, vi.fn
//! ---
//! # Mock Functions
//! ...
//! ```
//!
//! JSON files hold either one `RawUnit` or an array of them; that's how
//! example and component metadata gets in.

use std::path::Path;

use crate::error::CollectionError;
use crate::types::{ItemKind, RawUnit};
use crate::util::slugify;

/// Category given to markdown topics that don't name one.
pub const DEFAULT_TOPIC_CATEGORY: &str = "Documentation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Markdown,
    Json,
}

fn source_format(path: &Path) -> Option<SourceFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "md" | "markdown" => Some(SourceFormat::Markdown),
        "json" => Some(SourceFormat::Json),
        _ => None,
    }
}

/// Read and parse one source.
pub async fn load_source(path: &Path) -> Result<Vec<RawUnit>, CollectionError> {
    let format = source_format(path).ok_or_else(|| CollectionError::UnsupportedSource {
        path: path.to_path_buf(),
    })?;

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CollectionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    match format {
        SourceFormat::Markdown => parse_topic(path, &text).map(|unit| vec![unit]),
        SourceFormat::Json => parse_units(path, &text),
    }
}

/// One unit or a list of units.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum UnitsFile {
    Many(Vec<RawUnit>),
    One(Box<RawUnit>),
}

pub fn parse_units(path: &Path, json: &str) -> Result<Vec<RawUnit>, CollectionError> {
    let parsed: UnitsFile = serde_json::from_str(json).map_err(|e| CollectionError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(match parsed {
        UnitsFile::Many(units) => units,
        UnitsFile::One(unit) => vec![*unit],
    })
}

#[derive(Debug, Default)]
struct FrontMatter {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    url: Option<String>,
    kind: Option<ItemKind>,
    keywords: Option<Vec<String>>,
}

/// Parse a markdown topic. Title falls back to the first `# ` heading, then
/// the file stem; url falls back to `/docs/<slug>`.
pub fn parse_topic(path: &Path, text: &str) -> Result<RawUnit, CollectionError> {
    let (front, body) = split_front_matter(path, text)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let title = front
        .title
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| stem.clone());
    let url = front
        .url
        .unwrap_or_else(|| format!("/docs/{}", slugify(&stem)));

    Ok(RawUnit {
        title,
        description: front.description.unwrap_or_default(),
        url,
        kind: front.kind.unwrap_or(ItemKind::Topic),
        category: Some(
            front
                .category
                .unwrap_or_else(|| DEFAULT_TOPIC_CATEGORY.to_string()),
        ),
        raw_text: body.to_string(),
        keywords: front.keywords,
    })
}

fn split_front_matter<'t>(
    path: &Path,
    text: &'t str,
) -> Result<(FrontMatter, &'t str), CollectionError> {
    let text = text.trim_start_matches('\u{feff}');
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return Ok((FrontMatter::default(), text));
    };

    let mut front = FrontMatter::default();
    let mut consumed = 0;
    for line in rest.split_inclusive('\n') {
        consumed += line.len();
        let line = line.trim();
        if line == "---" {
            return Ok((front, &rest[consumed..]));
        }
        if let Some((key, value)) = line.split_once(':') {
            apply_front_matter(&mut front, key.trim(), unquote(value.trim()));
        }
    }

    Err(CollectionError::Parse {
        path: path.to_path_buf(),
        reason: "unterminated front matter".to_string(),
    })
}

fn apply_front_matter(front: &mut FrontMatter, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    match key.to_ascii_lowercase().as_str() {
        "title" => front.title = Some(value.to_string()),
        "description" => front.description = Some(value.to_string()),
        "category" => front.category = Some(value.to_string()),
        "url" | "href" => front.url = Some(value.to_string()),
        "type" | "kind" => front.kind = value.parse().ok(),
        "keywords" | "tags" => {
            let list = value.trim_start_matches('[').trim_end_matches(']');
            front.keywords = Some(
                list.split(',')
                    .map(|k| unquote(k.trim()).to_string())
                    .filter(|k| !k.is_empty())
                    .collect(),
            );
        }
        _ => {}
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
}
