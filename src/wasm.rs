//! WebAssembly bindings for the command palette and quick search.
//!
//! The page owns the timers and the fetch; this side owns the state.
//! A typical host loop:
//!
//! ```js
//! const palette = new SearchPalette();          // or SearchPalette.quickSearch()
//! palette.setNavigator((action, target) => action === "navigate"
//!   ? goto(target)
//!   : goto(`/search?q=${encodeURIComponent(target)}`));
//! const ticket = palette.beginLoad();
//! fetch("/api/search-index")
//!   .then(r => r.ok ? r.json() : Promise.reject(r.status))
//!   .then(corpus => palette.loadCorpus(ticket, corpus))
//!   .catch(err => palette.failLoad(ticket, String(err)));
//!
//! input.oninput = e => {
//!   palette.setQuery(e.target.value, performance.now());
//!   const due = palette.nextDeadline();
//!   if (due !== undefined) setTimeout(() => palette.tick(performance.now()) && render(),
//!                                     due - performance.now());
//! };
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::SearchConfig;
use crate::error::Error;
use crate::index::SearchIndex;
use crate::loader::{parse_corpus, parse_corpus_value, ContentLoader};
use crate::palette::{Activation, Announcer, Key, LoadTicket, Palette};

/// Forwards announcements to a JS callback, typically one that writes into
/// an `aria-live` region.
struct JsAnnouncer(js_sys::Function);

impl Announcer for JsAnnouncer {
    fn announce(&mut self, message: &str) {
        if let Err(e) = self.0.call1(&JsValue::NULL, &JsValue::from_str(message)) {
            tracing::warn!(error = ?e, "announcer callback threw");
        }
    }
}

/// Milliseconds from `performance.now()` to a `Duration`. Garbage maps to
/// zero, values past `Duration::MAX` saturate.
fn millis(now_ms: f64) -> Duration {
    if now_ms.is_finite() && now_ms > 0.0 {
        Duration::try_from_secs_f64(now_ms / 1000.0).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-accessible palette.
///
/// Starts with the built-in static pages so it is usable before the
/// content API answers.
#[wasm_bindgen]
pub struct SearchPalette {
    palette: Palette,
    loader: ContentLoader,
    navigator: Option<js_sys::Function>,
}

impl SearchPalette {
    fn with_config(config: SearchConfig) -> Self {
        let loader = ContentLoader::default();
        let index = SearchIndex::build(loader.static_pages().to_vec(), &config.fields);
        Self {
            palette: Palette::new(Arc::new(index), &config),
            loader,
            navigator: None,
        }
    }

    fn apply(
        &mut self,
        ticket: u32,
        outcome: crate::error::Result<Vec<crate::types::SearchableItem>>,
    ) -> bool {
        let corpus = self.loader.resolve(outcome);
        self.palette
            .finish_load(LoadTicket::from_epoch(u64::from(ticket)), corpus)
    }

    /// Hand navigate/submit activations to the navigator, then to the caller.
    fn dispatch(&self, activation: Activation) -> Result<JsValue, JsValue> {
        if let Some(navigator) = &self.navigator {
            let call = match &activation {
                Activation::Navigate(url) => Some(("navigate", url)),
                Activation::Submit(query) => Some(("submit", query)),
                Activation::Closed | Activation::None => None,
            };
            if let Some((action, target)) = call {
                navigator.call2(
                    &JsValue::NULL,
                    &JsValue::from_str(action),
                    &JsValue::from_str(target),
                )?;
            }
        }
        to_js(&activation)
    }
}

#[wasm_bindgen]
impl SearchPalette {
    /// Create a palette. `options` is an optional `SearchConfig` object;
    /// omitted fields take the command palette defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<SearchPalette, JsValue> {
        let config = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                let config: SearchConfig = from_value(value).map_err(|e| e.to_string())?;
                config.validate().map_err(|e| e.to_string())?;
                config
            }
            _ => SearchConfig::palette(),
        };
        Ok(Self::with_config(config))
    }

    /// A palette with the inline quick-search preset.
    #[wasm_bindgen(js_name = quickSearch)]
    pub fn quick_search() -> SearchPalette {
        Self::with_config(SearchConfig::quick_search())
    }

    /// Register `(action, target)` to be called on `navigate` and `submit`.
    #[wasm_bindgen(js_name = setNavigator)]
    pub fn set_navigator(&mut self, callback: js_sys::Function) {
        self.navigator = Some(callback);
    }

    /// Register a callback receiving result-count announcements.
    #[wasm_bindgen(js_name = setAnnouncer)]
    pub fn set_announcer(&mut self, callback: js_sys::Function) {
        self.palette.set_announcer(Box::new(JsAnnouncer(callback)));
    }

    // =========================================================================
    // LOADING
    // =========================================================================

    /// Mark the start of a fetch. Pass the returned ticket back with the
    /// outcome; loads begun before the last `unmount` are dropped.
    #[wasm_bindgen(js_name = beginLoad)]
    pub fn begin_load(&self) -> u32 {
        // One epoch per unmount, so u32 does not run out in practice.
        u32::try_from(self.palette.begin_load().epoch()).unwrap_or(u32::MAX)
    }

    /// Feed the parsed content API response. A document of the wrong shape
    /// is treated as a failed fetch. Returns whether the corpus was applied.
    #[wasm_bindgen(js_name = loadCorpus)]
    pub fn load_corpus(&mut self, ticket: u32, corpus: JsValue) -> bool {
        let outcome = from_value::<serde_json::Value>(corpus)
            .map_err(|e| Error::Fetch(e.to_string()))
            .and_then(parse_corpus_value);
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "content response unreadable, serving static pages only");
        }
        self.apply(ticket, outcome)
    }

    /// Same as `loadCorpus`, for the raw response text.
    #[wasm_bindgen(js_name = loadCorpusText)]
    pub fn load_corpus_text(&mut self, ticket: u32, json: &str) -> bool {
        let outcome = parse_corpus(json);
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "content response unreadable, serving static pages only");
        }
        self.apply(ticket, outcome)
    }

    /// Report a failed fetch. The palette keeps serving static pages.
    #[wasm_bindgen(js_name = failLoad)]
    pub fn fail_load(&mut self, ticket: u32, reason: &str) -> bool {
        tracing::warn!(reason, "content fetch failed, serving static pages only");
        self.apply(ticket, Err(Error::Fetch(reason.to_string())))
    }

    /// The host component is going away. Tickets issued before this are
    /// rejected when their loads finish.
    pub fn unmount(&mut self) {
        self.palette.unmount();
    }

    // =========================================================================
    // INTERACTION
    // =========================================================================

    pub fn open(&mut self) {
        self.palette.open();
    }

    pub fn close(&mut self) {
        self.palette.close();
    }

    pub fn toggle(&mut self) {
        self.palette.toggle();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.palette.is_open()
    }

    /// Close if open. Returns the resulting activation object.
    #[wasm_bindgen(js_name = outsideClick)]
    pub fn outside_click(&mut self) -> Result<JsValue, JsValue> {
        let activation = self.palette.outside_click();
        self.dispatch(activation)
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: &str, now_ms: f64) {
        self.palette.set_query(query, millis(now_ms));
    }

    /// Run the pending search pass if due. True when results changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.palette.tick(millis(now_ms))
    }

    /// When `tick` should next be called, in `performance.now()` millis.
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.palette
            .next_deadline()
            .map(|due| due.as_secs_f64() * 1000.0)
    }

    /// Handle a `KeyboardEvent.key`. Returns `{ action, value? }` after
    /// calling the navigator, if one is set.
    pub fn key(&mut self, name: &str) -> Result<JsValue, JsValue> {
        let activation = self.palette.handle_key(Key::from_dom(name));
        self.dispatch(activation)
    }

    /// Highlight a row, e.g. on pointer hover.
    pub fn select(&mut self, row: usize) -> bool {
        self.palette.select(row)
    }

    // =========================================================================
    // STATE
    // =========================================================================

    /// Visible results as `MatchResult` objects.
    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_js(&self.palette.results())
    }

    /// Highlighted row, or -1.
    pub fn selected(&self) -> i32 {
        self.palette.selection().map_or(-1, |i| i as i32)
    }

    pub fn query(&self) -> String {
        self.palette.query().to_string()
    }

    /// `closed`, `open:empty`, `open:querying`, or `open:results`.
    pub fn state(&self) -> String {
        self.palette.state().to_string()
    }

    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.palette.index().len()
    }
}
