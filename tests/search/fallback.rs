//! Empty-query defaults and degraded corpora.

use super::common::{default_loader, failing_source, make_item, portfolio_index, titles};
use glint::{default_static_pages, ItemKind, SearchConfig, SearchIndex};

#[test]
fn test_empty_query_returns_static_pages() {
    let index = portfolio_index();
    let results = index.search("", &SearchConfig::palette().options());
    assert_eq!(
        titles(&results),
        vec!["Home", "About", "Blog", "Projects", "Contact"]
    );
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_whitespace_query_is_empty() {
    let index = portfolio_index();
    let options = SearchConfig::quick_search().options();
    assert_eq!(
        titles(&index.search("   \t", &options)),
        titles(&index.search("", &options))
    );
}

#[test]
fn test_defaults_respect_limit() {
    let index = portfolio_index();
    let mut options = SearchConfig::palette().options();
    options.limit = 2;
    assert_eq!(titles(&index.search("", &options)), vec!["Home", "About"]);
}

#[test]
fn test_defaults_without_pages_use_first_items() {
    let index = SearchIndex::with_default_fields(vec![
        make_item(ItemKind::Post, "one", "One"),
        make_item(ItemKind::Project, "two", "Two"),
    ]);
    let results = index.search("", &SearchConfig::palette().options());
    assert_eq!(titles(&results), vec!["One", "Two"]);
}

#[test]
fn test_punctuation_only_query_finds_nothing() {
    let index = portfolio_index();
    assert!(index
        .search("!!! ---", &SearchConfig::palette().options())
        .is_empty());
}

#[test]
fn test_fetch_failure_still_serves_static_pages() {
    let corpus = default_loader().load(&failing_source());
    assert!(corpus.degraded);
    assert_eq!(corpus.items, default_static_pages());

    let config = SearchConfig::palette();
    let index = corpus.into_index(&config.fields);
    let results = index.search("about", &config.options());
    assert_eq!(results[0].item.url, "/about");
    assert_eq!(index.search("", &config.options()).len(), 5);
}

#[test]
fn test_empty_corpus_is_searchable() {
    let index = SearchIndex::with_default_fields(Vec::new());
    assert!(index.is_empty());
    assert!(index.search("", &SearchConfig::palette().options()).is_empty());
    assert!(index.search("rust", &SearchConfig::palette().options()).is_empty());
}
