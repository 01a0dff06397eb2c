// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: which fields count, how much, and how the widget
//! paces and trims its results.
//!
//! Two presets cover the site's widgets. The command palette shows five
//! results and waits a little longer between keystrokes; quick search shows
//! eight and reacts faster. Either can be overridden from JSON:
//!
//! ```json
//! { "maxResults": 8, "debounceMs": 150, "fields": [{ "field": "title", "weight": 1.0 }] }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::DEFAULT_MIN_SCORE;
use crate::types::{Field, FieldWeight};

/// Results shown by the command palette.
pub const PALETTE_MAX_RESULTS: usize = 5;

/// Results shown by the quick-search widget.
pub const QUICK_SEARCH_MAX_RESULTS: usize = 8;

/// Quiet period before the palette re-searches.
pub const PALETTE_DEBOUNCE_MS: u64 = 200;

/// Quiet period before quick search re-searches.
pub const QUICK_SEARCH_DEBOUNCE_MS: u64 = 150;

/// Title > tags > category > description.
pub fn default_fields() -> Vec<FieldWeight> {
    vec![
        FieldWeight::new(Field::Title, 1.0),
        FieldWeight::new(Field::Tags, 0.7),
        FieldWeight::new(Field::Category, 0.6),
        FieldWeight::new(Field::Description, 0.5),
    ]
}

/// Per-pass search knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum number of results to return.
    pub limit: usize,
    /// Items scoring below this are dropped.
    pub min_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: PALETTE_MAX_RESULTS,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Full configuration for one search widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub fields: Vec<FieldWeight>,
    pub min_score: f64,
    pub max_results: usize,
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::palette()
    }
}

impl SearchConfig {
    pub fn palette() -> Self {
        Self {
            fields: default_fields(),
            min_score: DEFAULT_MIN_SCORE,
            max_results: PALETTE_MAX_RESULTS,
            debounce_ms: PALETTE_DEBOUNCE_MS,
        }
    }

    pub fn quick_search() -> Self {
        Self {
            max_results: QUICK_SEARCH_MAX_RESULTS,
            debounce_ms: QUICK_SEARCH_DEBOUNCE_MS,
            ..Self::palette()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::Config("at least one field is required".into()));
        }
        if let Some(bad) = self
            .fields
            .iter()
            .find(|f| !(f.weight.is_finite() && f.weight > 0.0))
        {
            return Err(Error::Config(format!(
                "weight for {} must be positive, got {}",
                bad.field, bad.weight
            )));
        }
        if self.max_results == 0 {
            return Err(Error::Config("maxResults must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(Error::Config(format!(
                "minScore must be within [0, 1], got {}",
                self.min_score
            )));
        }
        Ok(())
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.max_results,
            min_score: self.min_score,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
