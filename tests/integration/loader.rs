//! Corpus and config files on disk.

use std::fs;
use std::io::Write;

use super::common::{default_loader, portfolio_content};
use glint::{
    ContentLoader, ContentSource, Error, Field, ItemKind, JsonFileSource, SearchConfig,
    SearchIndex,
};
use tempfile::{tempdir, NamedTempFile};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_flat_corpus_file() {
    let json = serde_json::to_string(&portfolio_content()).unwrap();
    let file = write_temp(&json);

    let corpus = default_loader().load(&JsonFileSource::new(file.path()));
    assert!(!corpus.degraded);
    assert_eq!(corpus.items.len(), 5 + portfolio_content().len());
    assert_eq!(corpus.items[0].title, "Home");
}

#[test]
fn test_grouped_corpus_file_with_legacy_names() {
    let file = write_temp(
        r#"{
            "posts": [
                {"slug": "ai", "title": "AI-Driven Development Workflow",
                 "excerpt": "Pairing with models", "href": "/blog/ai", "tags": ["ai"]}
            ],
            "projects": [
                {"id": "glint", "title": "Glint", "url": "/projects/glint", "category": "tools"}
            ]
        }"#,
    );
    let items = JsonFileSource::new(file.path()).fetch().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, ItemKind::Post);
    assert_eq!(items[0].id, "ai");
    assert_eq!(items[0].description, "Pairing with models");
    assert_eq!(items[0].url, "/blog/ai");
    assert_eq!(items[1].category.as_deref(), Some("tools"));
}

#[test]
fn test_missing_file_degrades() {
    let dir = tempdir().unwrap();
    let source = JsonFileSource::new(dir.path().join("nope.json"));
    assert!(matches!(source.fetch(), Err(Error::Io(_))));

    let corpus = default_loader().load(&source);
    assert!(corpus.degraded);
    assert_eq!(corpus.items.len(), 5);
}

#[test]
fn test_garbled_file_degrades() {
    let file = write_temp("{ this is not json");
    let source = JsonFileSource::new(file.path());
    assert!(matches!(source.fetch(), Err(Error::Json(_))));
    assert!(default_loader().load(&source).degraded);
}

#[test]
fn test_duplicate_keys_collapse() {
    let file = write_temp(
        r#"[
            {"id": "x", "type": "post", "title": "First", "url": "/blog/x"},
            {"id": "x", "type": "post", "title": "Second", "url": "/blog/x2"},
            {"id": "x", "type": "project", "title": "Project X", "url": "/projects/x"}
        ]"#,
    );
    let corpus = ContentLoader::new(Vec::new()).load(&JsonFileSource::new(file.path()));
    assert_eq!(corpus.items.len(), 3);

    let index = SearchIndex::with_default_fields(corpus.items);
    assert_eq!(index.len(), 2);
    assert_eq!(index.item(0).map(|i| i.title.as_str()), Some("First"));
}

#[test]
fn test_malformed_item_is_skipped_not_fatal() {
    let file = write_temp(
        r#"[
            {"id": "", "type": "post", "title": "No Id", "url": "/blog/none"},
            {"id": "ok", "type": "post", "title": "No Id Either Way", "url": "/blog/ok"}
        ]"#,
    );
    let corpus = ContentLoader::new(Vec::new()).load(&JsonFileSource::new(file.path()));
    let index = SearchIndex::with_default_fields(corpus.items);
    let results = index.search("id", &SearchConfig::palette().options());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "ok");
}

#[test]
fn test_config_file_overrides_defaults() {
    let file = write_temp(
        r#"{
            "fields": [{"field": "title", "weight": 2.0}, {"field": "tags", "weight": 1.0}],
            "maxResults": 3
        }"#,
    );
    let config = SearchConfig::from_path(file.path()).unwrap();
    assert_eq!(config.max_results, 3);
    assert_eq!(config.fields.len(), 2);
    assert_eq!(config.fields[0].field, Field::Title);
    assert_eq!(config.debounce_ms, SearchConfig::palette().debounce_ms);
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let file = write_temp(r#"{"maxResults": 0}"#);
    assert!(matches!(
        SearchConfig::from_path(file.path()),
        Err(Error::Config(_))
    ));

    let file = write_temp(r#"{"minScore": 1.5}"#);
    assert!(SearchConfig::from_path(file.path()).is_err());
}
