// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search subsystem.
//!
//! Items arrive from the content API as already-parsed JSON and never change
//! after loading. Identity is `(kind, id)`: a post and a project may share a
//! slug without colliding.
//!
//! | Type             | Purpose                                   |
//! |------------------|-------------------------------------------|
//! | `SearchableItem` | Post, project, or static page             |
//! | `ItemKey`        | Identity of an item                       |
//! | `Field`          | Which part of an item a query is run over |
//! | `FieldWeight`    | How much a field counts toward the score  |
//! | `MatchResult`    | A ranked hit handed to the presentation   |

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// ITEMS
// =============================================================================

/// What kind of content an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Post,
    Project,
    Page,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Post => "post",
            ItemKind::Project => "project",
            ItemKind::Page => "page",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a searchable item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    pub kind: ItemKind,
    pub id: String,
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A post, project, or static page exposed to search.
///
/// The JSON shape follows the content API: `type` carries the kind, and the
/// older `excerpt`/`slug`/`href` names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    #[serde(alias = "slug")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    #[serde(default, alias = "excerpt")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(alias = "href")]
    pub url: String,
}

impl SearchableItem {
    pub fn key(&self) -> ItemKey {
        ItemKey {
            kind: self.kind,
            id: self.id.clone(),
        }
    }

    /// Reject items that can't be shown or navigated to.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.id.trim().is_empty() {
            "empty id"
        } else if self.title.trim().is_empty() {
            "empty title"
        } else if self.url.trim().is_empty() {
            "empty url"
        } else {
            return Ok(());
        };
        Err(Error::MalformedItem {
            key: self.key(),
            reason,
        })
    }

    /// Raw text of one field. Tags are joined with spaces.
    pub fn field_text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Title => Cow::Borrowed(&self.title),
            Field::Description => Cow::Borrowed(&self.description),
            Field::Category => Cow::Borrowed(self.category.as_deref().unwrap_or("")),
            Field::Tags => Cow::Owned(self.tags.join(" ")),
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// A searchable field of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Category,
    Tags,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Category, Field::Tags];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "category",
            Field::Tags => "tags",
        };
        f.write_str(name)
    }
}

/// A field and its relative weight. Weights are normalised against the
/// largest configured weight, so only ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    pub field: Field,
    pub weight: f64,
}

impl FieldWeight {
    pub const fn new(field: Field, weight: f64) -> Self {
        Self { field, weight }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked hit.
///
/// `score` is only meaningful relative to other results of the same query.
/// `position` is the item's place in corpus order and breaks score ties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub item: SearchableItem,
    pub score: f64,
    pub position: usize,
}
