// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory search index.
//!
//! One index per corpus snapshot. Building normalises every configured field
//! once, so a search pass only normalises the query. When new posts arrive,
//! build a fresh index and hand it to the widgets; nothing is mutated in place.
//!
//! # Invariants
//!
//! - Results are always a subset of the indexed items.
//! - No two entries share an `ItemKey`; later duplicates are dropped.
//! - An empty query returns the defaults, which are non-empty whenever the
//!   corpus holds at least one valid item.

use std::collections::HashSet;

use crate::config::{default_fields, SearchOptions};
use crate::error::Result;
use crate::scoring::ranking::{rank, Candidate};
use crate::scoring::{score_fields, FieldText, PreparedQuery, WeightedField};
use crate::types::{FieldWeight, ItemKind, MatchResult, SearchableItem};

/// An item with its searchable fields pre-normalised, aligned with
/// `SearchIndex::fields`.
#[derive(Debug, Clone)]
struct IndexedItem {
    item: SearchableItem,
    fields: Vec<FieldText>,
}

/// Immutable search index over one corpus snapshot.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedItem>,
    /// Configured fields, as given.
    fields: Vec<FieldWeight>,
    /// Weights divided by the largest one, aligned with `fields`.
    relative_weights: Vec<f64>,
    /// Corpus positions shown for an empty query.
    defaults: Vec<usize>,
}

impl SearchIndex {
    /// Build an index over `items`, searching the given fields.
    ///
    /// Fields with non-positive weights are ignored. If none remain the
    /// default field set is used.
    pub fn build(items: Vec<SearchableItem>, fields: &[FieldWeight]) -> Self {
        let mut fields: Vec<FieldWeight> = fields
            .iter()
            .copied()
            .filter(|f| f.weight.is_finite() && f.weight > 0.0)
            .collect();
        if fields.is_empty() {
            tracing::warn!("no positive field weights configured, using defaults");
            fields = default_fields();
        }

        let max_weight = fields.iter().map(|f| f.weight).fold(0.0, f64::max);
        let relative_weights = fields.iter().map(|f| f.weight / max_weight).collect();

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let key = item.key();
            if !seen.insert(key.clone()) {
                tracing::warn!(%key, "duplicate item dropped from index");
                continue;
            }
            let texts = fields
                .iter()
                .map(|f| FieldText::new(&item.field_text(f.field)))
                .collect();
            entries.push(IndexedItem {
                item,
                fields: texts,
            });
        }

        let defaults = default_positions(&entries);
        tracing::debug!(
            items = entries.len(),
            defaults = defaults.len(),
            "search index built"
        );

        Self {
            entries,
            fields,
            relative_weights,
            defaults,
        }
    }

    /// Build with the default field weights.
    pub fn with_default_fields(items: Vec<SearchableItem>) -> Self {
        Self::build(items, &default_fields())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> &[FieldWeight] {
        &self.fields
    }

    /// Item at a corpus position.
    pub fn item(&self, position: usize) -> Option<&SearchableItem> {
        self.entries.get(position).map(|e| &e.item)
    }

    /// Items in corpus order.
    pub fn items(&self) -> impl Iterator<Item = &SearchableItem> {
        self.entries.iter().map(|e| &e.item)
    }

    /// The empty-query result set: static pages in corpus order, or the
    /// first items when the corpus has no pages. Scores are zero because
    /// nothing was ranked.
    pub fn defaults(&self, limit: usize) -> Vec<MatchResult> {
        self.defaults
            .iter()
            .take(limit)
            .map(|&position| MatchResult {
                item: self.entries[position].item.clone(),
                score: 0.0,
                position,
            })
            .collect()
    }

    /// Run one search pass.
    ///
    /// A blank query returns the defaults. A query with no searchable
    /// characters (only punctuation) returns nothing. Items that fail
    /// validation are logged and skipped; the pass carries on.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<MatchResult> {
        if query.trim().is_empty() {
            return self.defaults(options.limit);
        }
        let Some(prepared) = PreparedQuery::new(query) else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for (position, entry) in self.entries.iter().enumerate() {
            match self.score_entry(&prepared, entry) {
                Ok(score) if score > 0.0 && score >= options.min_score => {
                    candidates.push(Candidate { position, score });
                }
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, position, "item skipped during search"),
            }
        }

        rank(candidates, options.limit)
            .into_iter()
            .map(|c| MatchResult {
                item: self.entries[c.position].item.clone(),
                score: c.score,
                position: c.position,
            })
            .collect()
    }

    /// Score a single item against a query. `None` for a blank query or an
    /// unknown position; `Some(0.0)` for a non-match.
    pub fn score(&self, query: &str, position: usize) -> Option<f64> {
        let prepared = PreparedQuery::new(query)?;
        let entry = self.entries.get(position)?;
        self.score_entry(&prepared, entry).ok()
    }

    fn score_entry(&self, query: &PreparedQuery, entry: &IndexedItem) -> Result<f64> {
        entry.item.validate()?;
        let weighted: Vec<WeightedField<'_>> = self
            .relative_weights
            .iter()
            .zip(&entry.fields)
            .map(|(&weight, text)| WeightedField { weight, text })
            .collect();
        Ok(score_fields(query, &weighted))
    }
}

fn default_positions(entries: &[IndexedItem]) -> Vec<usize> {
    let valid = || {
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.item.validate().is_ok())
    };
    let pages: Vec<usize> = valid()
        .filter(|(_, e)| e.item.kind == ItemKind::Page)
        .map(|(position, _)| position)
        .collect();
    if pages.is_empty() {
        valid().map(|(position, _)| position).collect()
    } else {
        pages
    }
}
