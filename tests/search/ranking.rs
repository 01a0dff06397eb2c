//! Ranking order tests: match quality, field weights, and tie-breaking.

use super::common::{make_item, portfolio_index, titles};
use glint::{Field, FieldWeight, ItemKind, SearchConfig, SearchIndex, SearchableItem};

fn palette_options() -> glint::SearchOptions {
    SearchConfig::palette().options()
}

#[test]
fn test_ai_ranks_workflow_post_first() {
    let index = portfolio_index();
    let results = index.search("AI", &palette_options());
    assert_eq!(results[0].item.title, "AI-Driven Development Workflow");
}

#[test]
fn test_ai_ranks_workflow_above_digital_home() {
    let index = portfolio_index();
    let results = index.search("AI", &palette_options());
    let found = titles(&results);
    let workflow = found
        .iter()
        .position(|t| *t == "AI-Driven Development Workflow")
        .expect("workflow post should match");
    if let Some(home) = found.iter().position(|t| *t == "Building My Digital Home") {
        assert!(workflow < home);
    }
}

#[test]
fn test_title_match_beats_tag_match() {
    let index = portfolio_index();
    let results = index.search("rust", &palette_options());
    assert_eq!(results[0].item.title, "Error Handling in Rust");
    let glint = results
        .iter()
        .find(|r| r.item.id == "glint")
        .expect("tagged project should match");
    assert!(glint.score < results[0].score);
}

#[test]
fn test_prefix_beats_substring() {
    let index = SearchIndex::with_default_fields(vec![
        make_item(ItemKind::Post, "trust", "Trust Issues"),
        make_item(ItemKind::Post, "crab", "Rustacean Diaries"),
    ]);
    let results = index.search("rust", &palette_options());
    assert_eq!(titles(&results), vec!["Rustacean Diaries", "Trust Issues"]);
}

#[test]
fn test_typo_still_finds_title() {
    let index = portfolio_index();
    let results = index.search("kuberntes", &palette_options());
    assert_eq!(results[0].item.title, "Kubernetes at Home");
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let index = SearchIndex::with_default_fields(vec![
        make_item(ItemKind::Post, "b", "Notes"),
        make_item(ItemKind::Project, "a", "Notes"),
    ]);
    let results = index.search("notes", &palette_options());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].position, 0);
    assert_eq!(results[1].position, 1);
}

#[test]
fn test_scores_descend() {
    let index = portfolio_index();
    for query in ["a", "de", "rust", "home", "typescript svelte"] {
        let results = index.search(query, &palette_options());
        for pair in results.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{query:?}: {} before {}",
                pair[0].score,
                pair[1].score
            );
        }
    }
}

#[test]
fn test_configured_fields_are_the_only_ones_searched() {
    let items = vec![SearchableItem {
        description: "mentions kubernetes".to_string(),
        ..make_item(ItemKind::Post, "p", "Quiet Title")
    }];
    let description_only = SearchIndex::build(
        items.clone(),
        &[FieldWeight::new(Field::Description, 1.0)],
    );
    let title_only = SearchIndex::build(items, &[FieldWeight::new(Field::Title, 1.0)]);

    assert_eq!(description_only.search("kubernetes", &palette_options()).len(), 1);
    assert!(title_only.search("kubernetes", &palette_options()).is_empty());
}

#[test]
fn test_every_token_must_match_somewhere() {
    let index = portfolio_index();
    let results = index.search("typescript kubernetes", &palette_options());
    assert!(results.is_empty(), "got {:?}", titles(&results));
}

#[test]
fn test_tokens_may_match_different_fields() {
    let index = portfolio_index();
    // "glint" is in the title, "wasm" only in the tags.
    let results = index.search("glint wasm", &palette_options());
    assert_eq!(results[0].item.id, "glint");
}
