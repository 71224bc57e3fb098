// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for content source parsing.
//!
//! Markdown front matter and JSON unit files come from authors, not machines.
//! Whatever they contain, parsing returns a unit or a `CollectionError`, and
//! whatever parses must normalize without panicking.

#![no_main]

use docsearch::build::normalize_unit;
use docsearch::collect::{parse_topic, parse_units};
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(unit) = parse_topic(Path::new("fuzz/topic.md"), text) {
        let _ = normalize_unit(unit);
    }
    if let Ok(units) = parse_units(Path::new("fuzz/units.json"), text) {
        for unit in units {
            let _ = normalize_unit(unit);
        }
    }
});
