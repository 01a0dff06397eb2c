// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interaction controller behind the command palette and quick search.
//!
//! Owns the query, the debounce timer, the visible results, and the
//! highlighted row. The host feeds it input events and the current time;
//! it answers with state to render and, on `Enter`, where to go.
//!
//! ```text
//!            open()            set_query("a")           tick() after quiet
//! Closed ───────────▶ Empty ─────────────────▶ Querying ─────────────────▶ Results
//!   ▲                   ▲                          │  ▲                       │
//!   │                   └──── set_query("") ───────┘  └──── set_query("ab") ──┘
//!   └──────────── Escape / outside click / Enter, from any open state
//! ```
//!
//! Selection clamps at both ends. `None` means nothing is highlighted; the
//! first `ArrowDown` selects row 0.

mod announce;
mod keys;

pub use announce::{result_count_message, Announcer, SharedAnnouncer};
pub use keys::{Activation, Key};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::{SearchConfig, SearchOptions};
use crate::debounce::{DebounceHandle, Debouncer};
use crate::index::SearchIndex;
use crate::loader::Corpus;
use crate::types::MatchResult;

/// Where an open palette is in its search cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Blank query, showing the defaults.
    Empty,
    /// Query changed, search pass pending.
    Querying,
    /// Results reflect the current query.
    Results,
}

/// Palette visibility and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open(Phase),
}

impl PanelState {
    pub fn is_open(self) -> bool {
        matches!(self, PanelState::Open(_))
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelState::Closed => f.write_str("closed"),
            PanelState::Open(Phase::Empty) => f.write_str("open:empty"),
            PanelState::Open(Phase::Querying) => f.write_str("open:querying"),
            PanelState::Open(Phase::Results) => f.write_str("open:results"),
        }
    }
}

/// Proof that a corpus load was started under the current mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

impl LoadTicket {
    /// Rebuild a ticket handed across an FFI boundary as its epoch.
    pub fn from_epoch(epoch: u64) -> Self {
        Self { epoch }
    }

    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

/// Command palette / quick-search controller.
pub struct Palette {
    index: Arc<SearchIndex>,
    options: SearchOptions,
    debouncer: Debouncer<String>,
    /// The pass `set_query` last scheduled.
    pending: Option<DebounceHandle>,
    /// Query the visible results were computed for; `None` on defaults.
    shown: Option<String>,
    state: PanelState,
    query: String,
    results: Vec<MatchResult>,
    selection: Option<usize>,
    announcer: Option<Box<dyn Announcer>>,
    /// Last count spoken, so repeats stay quiet.
    announced: Option<usize>,
    /// Bumped on unmount; loads from earlier epochs are discarded.
    epoch: u64,
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("state", &self.state)
            .field("query", &self.query)
            .field("results", &self.results.len())
            .field("selection", &self.selection)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Palette {
    pub fn new(index: Arc<SearchIndex>, config: &SearchConfig) -> Self {
        Self {
            index,
            options: config.options(),
            debouncer: Debouncer::new(config.debounce()),
            pending: None,
            shown: None,
            state: PanelState::Closed,
            query: String::new(),
            results: Vec::new(),
            selection: None,
            announcer: None,
            announced: None,
            epoch: 0,
        }
    }

    pub fn with_announcer(mut self, announcer: impl Announcer + 'static) -> Self {
        self.announcer = Some(Box::new(announcer));
        self
    }

    pub fn set_announcer(&mut self, announcer: Box<dyn Announcer>) {
        self.announcer = Some(announcer);
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Selection as the DOM likes it: `-1` for none.
    pub fn selection_index(&self) -> i64 {
        self.selection.map_or(-1, |i| i as i64)
    }

    pub fn selected(&self) -> Option<&MatchResult> {
        self.selection.and_then(|i| self.results.get(i))
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// When the host should call `tick` next, if a pass is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debouncer.deadline()
    }

    // =========================================================================
    // OPEN / CLOSE
    // =========================================================================

    /// Open with a blank query. Reopening an open palette resets it too.
    pub fn open(&mut self) {
        self.debouncer.cancel();
        self.query.clear();
        self.announced = None;
        self.show_defaults();
    }

    /// Close and forget the query, results, selection, and pending pass.
    pub fn close(&mut self) {
        self.debouncer.cancel();
        self.state = PanelState::Closed;
        self.query.clear();
        self.results.clear();
        self.shown = None;
        self.selection = None;
        self.announced = None;
    }

    /// Keyboard shortcut behavior (Ctrl+K).
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// A click landed outside the panel.
    pub fn outside_click(&mut self) -> Activation {
        if self.is_open() {
            self.close();
            Activation::Closed
        } else {
            Activation::None
        }
    }

    // =========================================================================
    // QUERY
    // =========================================================================

    /// Replace the query text. Ignored while closed.
    ///
    /// A blank query shows the defaults right away. Typing back to the query
    /// whose results are on screen drops the pending pass. Anything else
    /// schedules a search pass once input has been quiet for the debounce
    /// delay.
    pub fn set_query(&mut self, query: &str, now: Duration) {
        if !self.is_open() || query == self.query {
            return;
        }
        self.query = query.to_string();
        self.selection = None;

        if query.trim().is_empty() {
            self.debouncer.cancel();
            self.show_defaults();
        } else if self.shown.as_deref() == Some(query) {
            if let Some(handle) = self.pending.take() {
                self.debouncer.cancel_handle(handle);
            }
            self.state = PanelState::Open(Phase::Results);
        } else {
            self.pending = Some(self.debouncer.schedule(self.query.clone(), now));
            self.state = PanelState::Open(Phase::Querying);
        }
    }

    /// Run the pending search pass if its quiet period is over.
    /// Returns true when results were refreshed.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.debouncer.poll(now) {
            Some(query) if self.is_open() => {
                self.run_search(&query);
                true
            }
            _ => false,
        }
    }

    /// Run the pending search pass now.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) if self.is_open() => {
                self.run_search(&query);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // KEYBOARD
    // =========================================================================

    /// Handle a key press. Navigation keys first settle any pending pass so
    /// the highlighted row belongs to the current query.
    pub fn handle_key(&mut self, key: Key) -> Activation {
        if !self.is_open() {
            return Activation::None;
        }
        if matches!(
            key,
            Key::ArrowDown | Key::ArrowUp | Key::Home | Key::End | Key::Enter
        ) {
            self.flush();
        }

        match key {
            Key::ArrowDown => self.select_next(),
            Key::ArrowUp => self.select_previous(),
            Key::Home => self.select_first(),
            Key::End => self.select_last(),
            Key::Enter => return self.activate(),
            Key::Escape => {
                self.close();
                return Activation::Closed;
            }
            Key::Other => {}
        }
        Activation::None
    }

    pub fn select_next(&mut self) {
        let len = self.results.len();
        if len == 0 {
            self.selection = None;
            return;
        }
        self.selection = Some(match self.selection {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    pub fn select_previous(&mut self) {
        self.selection = self.selection.map(|i| i.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.selection = (!self.results.is_empty()).then_some(0);
    }

    pub fn select_last(&mut self) {
        self.selection = self.results.len().checked_sub(1);
    }

    /// Highlight a row directly, e.g. on hover. Out-of-range rows are ignored.
    pub fn select(&mut self, row: usize) -> bool {
        if row < self.results.len() {
            self.selection = Some(row);
            true
        } else {
            false
        }
    }

    fn activate(&mut self) -> Activation {
        if let Some(url) = self.selected().map(|r| r.item.url.clone()) {
            self.close();
            return Activation::Navigate(url);
        }
        let query = self.query.trim();
        if query.is_empty() {
            return Activation::None;
        }
        let query = query.to_string();
        self.close();
        Activation::Submit(query)
    }

    // =========================================================================
    // CORPUS
    // =========================================================================

    /// Swap in a rebuilt index. An open palette refreshes what it shows.
    pub fn replace_index(&mut self, index: Arc<SearchIndex>) {
        self.index = index;
        match self.state {
            PanelState::Open(Phase::Empty) => self.show_defaults(),
            PanelState::Open(Phase::Results) => {
                let query = self.query.clone();
                self.run_search(&query);
            }
            // A pending pass will pick up the new index when it fires.
            PanelState::Open(Phase::Querying) | PanelState::Closed => self.shown = None,
        }
    }

    /// Start a corpus load under the current mount.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket { epoch: self.epoch }
    }

    /// Apply a loaded corpus if the palette is still mounted under the
    /// ticket's epoch. Returns whether it was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, corpus: Corpus) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                "discarding corpus loaded for an earlier mount"
            );
            return false;
        }
        if corpus.degraded {
            tracing::info!(items = corpus.items.len(), "search running on static pages only");
        }
        let index = corpus.into_index(self.index.fields());
        self.replace_index(Arc::new(index));
        true
    }

    /// The host component went away. Closes, and invalidates every
    /// outstanding load ticket.
    pub fn unmount(&mut self) {
        self.close();
        self.epoch += 1;
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn show_defaults(&mut self) {
        self.results = self.index.defaults(self.options.limit);
        self.shown = None;
        self.selection = None;
        self.state = PanelState::Open(Phase::Empty);
        self.announce_count();
    }

    fn run_search(&mut self, query: &str) {
        self.results = self.index.search(query, &self.options);
        self.shown = Some(query.to_string());
        self.selection = None;
        self.state = PanelState::Open(Phase::Results);
        tracing::trace!(query, results = self.results.len(), "search pass");
        self.announce_count();
    }

    fn announce_count(&mut self) {
        let count = self.results.len();
        if self.announced == Some(count) {
            return;
        }
        self.announced = Some(count);
        if let Some(announcer) = self.announcer.as_mut() {
            announcer.announce(&result_count_message(count));
        }
    }
}
