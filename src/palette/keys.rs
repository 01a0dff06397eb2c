// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keys the palette reacts to, and what pressing them decided.

use serde::Serialize;

/// A key press, named as in DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Enter,
    Escape,
    /// Anything else; the text input handles it.
    Other,
}

impl Key {
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_dom(name)
    }
}

/// What the caller should do after a key press.
///
/// The palette never navigates by itself; it only says where to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum Activation {
    /// Nothing to do beyond re-rendering.
    None,
    /// Go to this URL. The palette has already closed.
    Navigate(String),
    /// No result was selected; hand the raw query to a full search page.
    Submit(String),
    /// The palette closed without choosing anything.
    Closed,
}
