// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the corpus comes from.
//!
//! The site's content API hands back posts, projects, and pages as JSON.
//! Two shapes are accepted: a flat array of items that each carry a `type`,
//! or an object grouping them by kind, in which case `type` may be omitted:
//!
//! ```json
//! { "pages": [...], "posts": [...], "projects": [...] }
//! ```
//!
//! Items that fail to parse are logged and dropped; one bad record should
//! not take the whole corpus down with it.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::types::{ItemKind, SearchableItem};

/// Anything that can produce a corpus snapshot.
pub trait ContentSource {
    fn fetch(&self) -> Result<Vec<SearchableItem>>;

    /// Short label for log lines.
    fn describe(&self) -> String {
        "content source".to_string()
    }
}

impl<F> ContentSource for F
where
    F: Fn() -> Result<Vec<SearchableItem>>,
{
    fn fetch(&self) -> Result<Vec<SearchableItem>> {
        self()
    }
}

/// An in-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<SearchableItem>);

impl ContentSource for StaticSource {
    fn fetch(&self) -> Result<Vec<SearchableItem>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("{} static items", self.0.len())
    }
}

/// A corpus exported to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<SearchableItem>> {
        let raw = fs::read_to_string(&self.path)?;
        parse_corpus(&raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Flat(Vec<Value>),
    Grouped {
        #[serde(default)]
        pages: Vec<Value>,
        #[serde(default)]
        posts: Vec<Value>,
        #[serde(default)]
        projects: Vec<Value>,
    },
}

/// Parse a corpus document in either accepted shape.
///
/// Fails only if the document itself isn't valid JSON of the right shape.
pub fn parse_corpus(json: &str) -> Result<Vec<SearchableItem>> {
    parse_corpus_value(serde_json::from_str(json)?)
}

/// Same as [`parse_corpus`], for a document already parsed into a `Value`.
pub fn parse_corpus_value(document: Value) -> Result<Vec<SearchableItem>> {
    let items = match serde_json::from_value::<CorpusFile>(document)? {
        CorpusFile::Flat(values) => parse_items(values, None),
        CorpusFile::Grouped {
            pages,
            posts,
            projects,
        } => {
            let mut items = parse_items(pages, Some(ItemKind::Page));
            items.extend(parse_items(posts, Some(ItemKind::Post)));
            items.extend(parse_items(projects, Some(ItemKind::Project)));
            items
        }
    };
    Ok(items)
}

fn parse_items(values: Vec<Value>, kind: Option<ItemKind>) -> Vec<SearchableItem> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, mut value)| {
            if let (Some(kind), Value::Object(map)) = (kind, &mut value) {
                map.entry("type")
                    .or_insert_with(|| Value::String(kind.as_str().to_string()));
            }
            match serde_json::from_value::<SearchableItem>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "skipping unparseable corpus item");
                    None
                }
            }
        })
        .collect()
}
