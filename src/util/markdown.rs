// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown formatting removal for topic bodies.
//!
//! Not a markdown parser. Strips the syntax that would otherwise show up in
//! excerpts (heading hashes, list bullets, fences, emphasis runs, link
//! targets) and leaves the words alone. Code inside fences stays searchable.

/// Remove markdown syntax, keeping the readable text. Line structure is kept;
/// callers collapse whitespace afterwards.
pub fn strip_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            out.push('\n');
            continue;
        }
        strip_inline(strip_block_marker(trimmed), &mut out);
        out.push('\n');
    }

    out
}

/// Drop a leading blockquote, heading, or list marker.
fn strip_block_marker(line: &str) -> &str {
    let line = line.trim_start_matches('>').trim_start();

    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        return line[hashes..].trim_start();
    }

    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest;
        }
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(". ") {
            return rest;
        }
    }

    line
}

fn strip_inline(line: &str, out: &mut String) {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => i += 1,
            '!' if chars.get(i + 1) == Some(&'[') => i += 1,
            '*' | '_' if chars.get(i + 1) == Some(&chars[i]) => i += 2,
            '[' => match link_end(&chars, i) {
                Some((text_end, link_close)) => {
                    let text: String = chars[i + 1..text_end].iter().collect();
                    strip_inline(&text, out);
                    i = link_close + 1;
                }
                None => {
                    out.push('[');
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
}

/// For `[text](target)` starting at `open`, the indices of `]` and `)`.
fn link_end(chars: &[char], open: usize) -> Option<(usize, usize)> {
    let close_bracket = open + chars[open..].iter().position(|c| *c == ']')?;
    if chars.get(close_bracket + 1) != Some(&'(') {
        return None;
    }
    let close_paren =
        close_bracket + 1 + chars[close_bracket + 1..].iter().position(|c| *c == ')')?;
    Some((close_bracket, close_paren))
}
