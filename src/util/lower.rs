// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lowercased text with a byte map back to the original.
//!
//! `str::to_lowercase` can change byte lengths ('İ' lowercases to two chars),
//! so an offset found in the lowercase copy is not an offset in the original.
//! `LowerMap` records, for every byte of the lowercase string, the byte offset
//! of the original character it came from.

#[derive(Debug, Clone)]
pub struct LowerMap<'a> {
    original: &'a str,
    lower: String,
    /// `origins[i]` = byte offset in `original` of the char that produced `lower[i]`.
    origins: Vec<usize>,
}

impl<'a> LowerMap<'a> {
    /// The lowercase text is `str::to_lowercase`, the same folding scoring
    /// uses, so anything that scored as a content hit is found here too.
    pub fn new(original: &'a str) -> Self {
        let mut per_char = String::with_capacity(original.len());
        let mut origins = Vec::with_capacity(original.len());

        for (offset, c) in original.char_indices() {
            for lc in c.to_lowercase() {
                per_char.push(lc);
                origins.extend(std::iter::repeat(offset).take(lc.len_utf8()));
            }
        }

        // Context rules (final sigma) swap chars of equal width, so the byte
        // map built per char still lines up.
        let lower = original.to_lowercase();
        let lower = if lower.len() == per_char.len() { lower } else { per_char };

        LowerMap {
            original,
            lower,
            origins,
        }
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Earliest match of any needle (already lowercase), as an original byte
    /// range `[start, end)` aligned to char boundaries.
    pub fn find_earliest<S: AsRef<str>>(&self, needles: &[S]) -> Option<(usize, usize)> {
        let (start, len) = needles
            .iter()
            .map(AsRef::as_ref)
            .filter(|needle| !needle.is_empty())
            .filter_map(|needle| self.lower.find(needle).map(|pos| (pos, needle.len())))
            .min_by_key(|(pos, len)| (*pos, std::cmp::Reverse(*len)))?;

        Some((self.origin_start(start), self.origin_end(start + len)))
    }

    fn origin_start(&self, lower_pos: usize) -> usize {
        self.origins.get(lower_pos).copied().unwrap_or(self.original.len())
    }

    /// Original offset just past the char that produced the byte before `lower_end`.
    fn origin_end(&self, lower_end: usize) -> usize {
        if lower_end == 0 {
            return 0;
        }
        let last = self.origins[lower_end - 1];
        let width = self.original[last..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        last + width
    }
}
