//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use glint::{
    default_static_pages, ContentLoader, Error, ItemKind, Palette, SearchConfig, SearchIndex,
    SearchableItem, StaticSource,
};

// Re-export canonical test utilities from glint::testing
pub use glint::testing::{make_item, make_page, make_post};

// ============================================================================
// FIXTURES
// ============================================================================

/// Posts and projects resembling the live site.
pub fn portfolio_content() -> Vec<SearchableItem> {
    vec![
        make_post(
            "ai-driven-development",
            "AI-Driven Development Workflow",
            "How I pair with language models to ship faster without losing the plot",
            Some("engineering"),
            &["ai", "workflow", "productivity"],
        ),
        make_post(
            "digital-home",
            "Building My Digital Home",
            "Designing this site from scratch with a canvas background and a command palette",
            Some("design"),
            &["astro", "canvas", "personal"],
        ),
        make_post(
            "rust-error-handling",
            "Error Handling in Rust",
            "From unwrap to thiserror and anyhow",
            Some("rust"),
            &["rust", "errors"],
        ),
        make_post(
            "typescript-tips",
            "TypeScript Tips for Svelte",
            "Small patterns that keep components honest",
            Some("frontend"),
            &["typescript", "svelte"],
        ),
        make_post(
            "kubernetes-homelab",
            "Kubernetes at Home",
            "Running a three node cluster in a closet",
            Some("infrastructure"),
            &["kubernetes", "homelab"],
        ),
        SearchableItem {
            tags: vec!["rust".into(), "wasm".into(), "search".into()],
            category: Some("tools".into()),
            description: "Client-side fuzzy search compiled to WebAssembly".into(),
            ..make_item(ItemKind::Project, "glint", "Glint")
        },
        SearchableItem {
            tags: vec!["python".into(), "data".into()],
            category: Some("data".into()),
            description: "Dashboards for personal finance".into(),
            ..make_item(ItemKind::Project, "ledger-viz", "Ledger Visualizer")
        },
    ]
}

/// Static pages followed by the portfolio content, as a successful load
/// would produce.
pub fn portfolio_items() -> Vec<SearchableItem> {
    let mut items = default_static_pages();
    items.extend(portfolio_content());
    items
}

pub fn portfolio_index() -> SearchIndex {
    SearchIndex::build(portfolio_items(), &SearchConfig::palette().fields)
}

pub fn shared_index() -> Arc<SearchIndex> {
    Arc::new(portfolio_index())
}

pub fn palette() -> Palette {
    Palette::new(shared_index(), &SearchConfig::palette())
}

pub fn quick_search() -> Palette {
    Palette::new(shared_index(), &SearchConfig::quick_search())
}

// ============================================================================
// SOURCES
// ============================================================================

pub fn content_source() -> StaticSource {
    StaticSource(portfolio_content())
}

/// A source that always fails, like the content API returning 503.
pub fn failing_source() -> impl Fn() -> glint::Result<Vec<SearchableItem>> {
    || Err(Error::Fetch("503 Service Unavailable".to_string()))
}

pub fn default_loader() -> ContentLoader {
    ContentLoader::default()
}

// ============================================================================
// HELPERS
// ============================================================================

pub fn titles(results: &[glint::MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.item.title.as_str()).collect()
}

pub fn ms(n: u64) -> std::time::Duration {
    std::time::Duration::from_millis(n)
}
