// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `DOCSEARCH_THEME` first, then `COLORFGBG`, then macOS system appearance,
//! then defaults to dark. Respects `NO_COLOR` and drops all styling when
//! stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `DOCSEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use docsearch::scoring::{DESCRIPTION_WEIGHT, KEYWORD_WEIGHT, TITLE_WEIGHT};
use docsearch::ItemKind;

/// Width between the `│` borders of a result box.
pub const BOX_WIDTH: usize = 80;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"). Backgrounds 7 and
    /// up, except 8 (dark gray), are light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
    }

    #[cfg(target_os = "macos")]
    fn from_macos_appearance() -> Option<Self> {
        let output = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .ok()?;
        // the key only exists in dark mode
        let dark = String::from_utf8_lossy(&output.stdout).contains("Dark");
        (output.status.success() && !dark).then_some(Theme::Light)
    }

    #[cfg(not(target_os = "macos"))]
    fn from_macos_appearance() -> Option<Self> {
        None
    }

    fn detect() -> Self {
        std::env::var("DOCSEARCH_THEME")
            .ok()
            .and_then(|v| Theme::from_name(&v))
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| Theme::from_colorfgbg(&v))
            })
            .or_else(Theme::from_macos_appearance)
            .unwrap_or(Theme::Dark)
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::detect)
}

/// What a piece of output is, rather than what color it is. Each role maps
/// to a OneDark shade on dark terminals and a One Light shade on light ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Heading,
    Title,
    Muted,
    Count,
    Warning,
    TopicBadge,
    ExampleBadge,
    CodeBadge,
    TitleScore,
    KeywordScore,
}

impl Role {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Border | Role::Muted) => (92, 99, 112),       // #5c6370
            (Theme::Dark, Role::Heading) => (86, 182, 194),                   // #56b6c2
            (Theme::Dark, Role::Title) => (171, 178, 191),                    // #abb2bf
            (Theme::Dark, Role::Count) => (102, 217, 239),
            (Theme::Dark, Role::Warning | Role::CodeBadge) => (229, 192, 123), // #e5c07b
            (Theme::Dark, Role::TopicBadge) => (97, 175, 239),                // #61afef
            (Theme::Dark, Role::ExampleBadge) => (198, 120, 221),             // #c678dd
            (Theme::Dark, Role::TitleScore) => (166, 226, 46),
            (Theme::Dark, Role::KeywordScore) => (152, 195, 121),             // #98c379
            (Theme::Light, Role::Border | Role::Muted) => (160, 161, 167),    // #a0a1a7
            (Theme::Light, Role::Heading) => (1, 132, 188),                   // #0184bc
            (Theme::Light, Role::Title) => (56, 58, 66),                      // #383a42
            (Theme::Light, Role::Count) => (1, 112, 158),
            (Theme::Light, Role::Warning | Role::CodeBadge) => (193, 132, 1), // #c18401
            (Theme::Light, Role::TopicBadge) => (64, 120, 242),               // #4078f2
            (Theme::Light, Role::ExampleBadge) => (166, 38, 164),             // #a626a4
            (Theme::Light, Role::TitleScore) => (68, 140, 39),
            (Theme::Light, Role::KeywordScore) => (80, 161, 79),              // #50a14f
        }
    }

    /// True-color escape for this role in the current theme.
    pub fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only for a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.concat(), role.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible width of `s`, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match (in_escape, c) {
            (_, '\x1b') => {
                in_escape = true;
                false
            }
            (true, 'm') => {
                in_escape = false;
                false
            }
            (true, _) => false,
            (false, _) => true,
        })
        .count()
}

fn border() -> String {
    if use_colors() {
        Role::Border.escape()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(Role::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(Role::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded item kind badge
pub fn kind_badge(kind: ItemKind) -> String {
    let label = format!("[{}]", kind);
    if !use_colors() {
        return label;
    }
    let role = match kind {
        ItemKind::Topic => Role::TopicBadge,
        ItemKind::Example => Role::ExampleBadge,
        ItemKind::Code => Role::CodeBadge,
    };
    themed(role, &[], &label)
}

/// Color-coded score value. Title matches are bright, content-only ones gray.
pub fn score_value(score: u32) -> String {
    let role = if score >= TITLE_WEIGHT {
        Role::TitleScore
    } else if score >= KEYWORD_WEIGHT {
        Role::KeywordScore
    } else if score >= DESCRIPTION_WEIGHT {
        Role::Warning
    } else {
        Role::Muted
    };
    themed(role, &[], &format!("{:>6}", score))
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` visible chars, marking the cut with `...`.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept = docsearch::util::truncate_chars(text, max.saturating_sub(3));
    format!("{}...", kept.trim_end())
}
