// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the glint CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `GLINT_THEME` forces
//! either; otherwise `COLORFGBG` is consulted and dark wins ties. Colors are
//! dropped when `NO_COLOR` is set or stdout is not a terminal.

use std::sync::OnceLock;

use glint::{ItemKind, MatchResult, PanelState};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("GLINT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", background 7 or 9..=15 is a light palette slot
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

type Rgb = (u8, u8, u8);

/// `(OneDark, One Light)` pairs.
mod palette {
    use super::Rgb;

    pub const RED: (Rgb, Rgb) = ((224, 108, 117), (228, 86, 73));
    pub const GREEN: (Rgb, Rgb) = ((152, 195, 121), (80, 161, 79));
    pub const YELLOW: (Rgb, Rgb) = ((229, 192, 123), (193, 132, 1));
    pub const CYAN: (Rgb, Rgb) = ((86, 182, 194), (1, 132, 188));
    pub const GRAY: (Rgb, Rgb) = ((92, 99, 112), (160, 161, 167));
}

macro_rules! theme_colors {
    ($($name:ident),*) => {$(
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (dark, light) = palette::$name;
            let (r, g, b) = if theme() == Theme::Light { light } else { dark };
            rgb(r, g, b)
        }
    )*};
}

theme_colors!(RED, GREEN, YELLOW, CYAN, GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length in chars, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn kind_badge(kind: ItemKind) -> String {
    let label = format!("{:<7}", kind.as_str());
    match kind {
        ItemKind::Page => themed(GREEN, &[], &label),
        ItemKind::Post => themed(CYAN, &[], &label),
        ItemKind::Project => themed(CYAN, &[BOLD], &label),
    }
}

/// Score in [0, 1], colored by strength.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.3}", score);
    if score >= 0.85 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 0.5 {
        themed(GREEN, &[], &text)
    } else if score > 0.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

pub fn state_label(state: PanelState) -> String {
    let color: fn() -> String = match state {
        PanelState::Closed => GRAY,
        PanelState::Open(_) => CYAN,
    };
    themed(color, &[BOLD], &state.to_string())
}

/// One result line: marker, rank, kind, score, title, url.
pub fn result_line(rank: usize, result: &MatchResult, selected: bool) -> String {
    let marker = if selected {
        themed(YELLOW, &[BOLD], "▸")
    } else {
        " ".to_string()
    };
    let title = truncate(&result.item.title, 34);
    let title = if selected {
        themed(YELLOW, &[BOLD], &title)
    } else {
        title
    };
    format!(
        " {} {:>2}  {} {}  {}  {}",
        marker,
        rank + 1,
        kind_badge(result.item.kind),
        score_value(result.score),
        pad_right(&title, 34),
        themed(GRAY, &[DIM], &truncate(&result.item.url, 16)),
    )
}

/// Print results in a box.
pub fn print_results(label: &str, results: &[MatchResult], selection: Option<usize>) {
    section_top(label);
    if results.is_empty() {
        row(&themed(GRAY, &[], "  No results"));
    }
    for (rank, result) in results.iter().enumerate() {
        row(&result_line(rank, result, selection == Some(rank)));
    }
    section_bot();
}

pub fn error_line(message: &str) -> String {
    themed(RED, &[BOLD], message)
}
