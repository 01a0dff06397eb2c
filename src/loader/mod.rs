// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content loading with a static fallback.
//!
//! The static pages (home, about, ...) are compiled into the site, so they
//! are always searchable. Posts and projects come from the content API and
//! may fail to arrive. When they do, the loader logs the failure and serves
//! the static pages alone. The user sees fewer results, never an error.

mod source;

pub use source::{
    parse_corpus, parse_corpus_value, ContentSource, JsonFileSource, StaticSource,
};

use std::collections::HashSet;

use crate::error::Result;
use crate::index::SearchIndex;
use crate::types::{FieldWeight, ItemKind, SearchableItem};

/// A loaded corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub items: Vec<SearchableItem>,
    /// True when the fetch failed and only static pages are present.
    pub degraded: bool,
}

impl Corpus {
    pub fn into_index(self, fields: &[FieldWeight]) -> SearchIndex {
        SearchIndex::build(self.items, fields)
    }
}

/// Merges fetched content with the static pages.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    static_pages: Vec<SearchableItem>,
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new(default_static_pages())
    }
}

impl ContentLoader {
    pub fn new(static_pages: Vec<SearchableItem>) -> Self {
        Self { static_pages }
    }

    pub fn static_pages(&self) -> &[SearchableItem] {
        &self.static_pages
    }

    /// Fetch from `source` and resolve the outcome.
    pub fn load<S: ContentSource + ?Sized>(&self, source: &S) -> Corpus {
        let outcome = source.fetch();
        if let Err(e) = &outcome {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "content fetch failed, serving static pages only"
            );
        }
        self.resolve(outcome)
    }

    /// Resolve a fetch outcome produced elsewhere, e.g. by a browser fetch.
    ///
    /// Success puts the static pages first, then fetched items whose key
    /// isn't already taken. Failure yields the static pages alone.
    pub fn resolve(&self, outcome: Result<Vec<SearchableItem>>) -> Corpus {
        match outcome {
            Ok(fetched) => {
                let mut seen: HashSet<_> = self.static_pages.iter().map(|p| p.key()).collect();
                let mut items = self.static_pages.clone();
                items.extend(fetched.into_iter().filter(|item| seen.insert(item.key())));
                Corpus {
                    items,
                    degraded: false,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "falling back to static pages");
                Corpus {
                    items: self.static_pages.clone(),
                    degraded: true,
                }
            }
        }
    }
}

/// The portfolio's built-in pages.
pub fn default_static_pages() -> Vec<SearchableItem> {
    [
        ("home", "Home", "Start here", "/"),
        ("about", "About", "Who I am and what I work on", "/about"),
        ("blog", "Blog", "Writing on software and tools", "/blog"),
        ("projects", "Projects", "Things I have built", "/projects"),
        ("contact", "Contact", "Get in touch", "/contact"),
    ]
    .into_iter()
    .map(|(id, title, description, url)| SearchableItem {
        id: id.to_string(),
        kind: ItemKind::Page,
        title: title.to_string(),
        description: description.to_string(),
        category: None,
        tags: vec![],
        date: None,
        url: url.to_string(),
    })
    .collect()
}
