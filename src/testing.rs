//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ItemKind, SearchableItem};

/// Create a simple item with default fields.
///
/// The URL is derived from kind and id: `/post/<id>`, `/project/<id>`.
pub fn make_item(kind: ItemKind, id: &str, title: &str) -> SearchableItem {
    SearchableItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: format!("Excerpt for {}", title),
        category: None,
        tags: vec![],
        date: None,
        url: format!("/{}/{}", kind, id),
    }
}

/// Create a static page with an explicit URL and no description.
pub fn make_page(id: &str, title: &str, url: &str) -> SearchableItem {
    SearchableItem {
        id: id.to_string(),
        kind: ItemKind::Page,
        title: title.to_string(),
        description: String::new(),
        category: None,
        tags: vec![],
        date: None,
        url: url.to_string(),
    }
}

/// Create a post with description, category, and tags.
pub fn make_post(
    id: &str,
    title: &str,
    description: &str,
    category: Option<&str>,
    tags: &[&str],
) -> SearchableItem {
    SearchableItem {
        id: id.to_string(),
        kind: ItemKind::Post,
        title: title.to_string(),
        description: description.to_string(),
        category: category.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: None,
        url: format!("/blog/{}", id),
    }
}
