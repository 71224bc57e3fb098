// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.
//!
//! A query is two things at once: a phrase (the whole normalized string,
//! matched against titles and descriptions) and a set of tokens (matched
//! against keywords and content). Both are lowercase, so casing in the input
//! can never change a score.

use crate::util::normalize_query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    phrase: String,
    tokens: Vec<String>,
}

impl ParsedQuery {
    /// `None` when the query has no tokens (empty or all whitespace).
    pub fn parse(query: &str) -> Option<Self> {
        let tokens = parse_query(query);
        if tokens.is_empty() {
            return None;
        }
        Some(ParsedQuery {
            phrase: normalize_query(query),
            tokens,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Split a query into lowercase, distinct, whitespace-separated tokens in
/// first-seen order.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Mock  the MOCK");
/// assert_eq!(terms, vec!["mock", "the"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in query.to_lowercase().split_whitespace() {
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}
