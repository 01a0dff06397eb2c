// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Screen-reader announcements for result-count changes.
//!
//! The announcer itself (an ARIA live region on the site) is outside this
//! crate. The palette only decides when to speak and what to say.

/// Receives polite announcements.
pub trait Announcer {
    fn announce(&mut self, message: &str);
}

/// Announcer backed by a shared buffer, so the caller can still read the
/// messages after handing a clone to a palette. Used by tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct SharedAnnouncer(pub std::rc::Rc<std::cell::RefCell<Vec<String>>>);

impl Announcer for SharedAnnouncer {
    fn announce(&mut self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

/// Text announced for a result count.
pub fn result_count_message(count: usize) -> String {
    match count {
        0 => "No results".to_string(),
        1 => "1 result".to_string(),
        n => format!("{} results", n),
    }
}
