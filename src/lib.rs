// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search and command palette for a portfolio site.
//!
//! Posts, projects, and static pages are loaded once, indexed in memory, and
//! searched as the visitor types. Two widgets share the engine: the command
//! palette (Ctrl+K) and the inline quick search. They differ only in
//! configuration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  loader/    │────▶│  index.rs    │────▶│  palette/    │
//! │ (fetch,     │     │ (SearchIndex,│     │ (debounce,   │
//! │  fallback)  │     │  search)     │     │  keys, a11y) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!              ┌───────────────────────────┐
//!              │ scoring/ + fuzzy/ + util/ │
//!              │ (match tiers, ranking,    │
//!              │  edit distance, normalize)│
//!              └───────────────────────────┘
//! ```
//!
//! | Module     | Role                                          |
//! |------------|-----------------------------------------------|
//! | `types`    | Items, fields, weights, results               |
//! | `config`   | Per-widget settings and presets               |
//! | `loader`   | Content sources and static-page fallback      |
//! | `index`    | Immutable index, one search pass              |
//! | `scoring`  | Per-field match tiers and the ranking order   |
//! | `fuzzy`    | Bounded edit distance, subsequence matching   |
//! | `debounce` | Cancellable quiet-period timer                |
//! | `palette`  | Open/close, query, selection, activation      |
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use glint::{ContentLoader, Key, Palette, SearchConfig, StaticSource, Activation};
//! use glint::testing::make_item;
//! use glint::ItemKind;
//!
//! let loader = ContentLoader::default();
//! let corpus = loader.load(&StaticSource(vec![
//!     make_item(ItemKind::Post, "ai", "AI-Driven Development Workflow"),
//! ]));
//! let config = SearchConfig::palette();
//! let index = Arc::new(corpus.into_index(&config.fields));
//!
//! let mut palette = Palette::new(index, &config);
//! palette.open();
//! palette.set_query("workflow", Duration::from_millis(0));
//! palette.tick(Duration::from_millis(200));
//! palette.handle_key(Key::ArrowDown);
//! assert_eq!(
//!     palette.handle_key(Key::Enter),
//!     Activation::Navigate("/post/ai".to_string())
//! );
//! ```

pub mod config;
pub mod debounce;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod loader;
pub mod palette;
pub mod scoring;
pub mod testing;
pub mod types;
mod util;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{default_fields, SearchConfig, SearchOptions};
pub use debounce::{DebounceHandle, Debouncer};
pub use error::{Error, Result};
pub use fuzzy::{levenshtein_bounded, levenshtein_within, subsequence_match};
pub use index::SearchIndex;
pub use loader::{
    default_static_pages, parse_corpus, parse_corpus_value, ContentLoader, ContentSource, Corpus,
    JsonFileSource, StaticSource,
};
pub use palette::{
    result_count_message, Activation, Announcer, Key, LoadTicket, PanelState, Palette, Phase,
    SharedAnnouncer,
};
pub use types::{Field, FieldWeight, ItemKey, ItemKind, MatchResult, SearchableItem};
pub use util::normalize::{normalize, words};
