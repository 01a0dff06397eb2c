//! Case, accent, and punctuation insensitivity.

use super::common::{make_item, titles};
use glint::{ItemKind, SearchConfig, SearchIndex};

fn index() -> SearchIndex {
    SearchIndex::with_default_fields(vec![
        make_item(ItemKind::Post, "cafe", "Café Culture in Lisbon"),
        make_item(ItemKind::Post, "naive", "A Naïve Bayes Primer"),
        make_item(ItemKind::Project, "ci-cd", "CI/CD Pipelines"),
    ])
}

#[test]
fn test_case_insensitive() {
    let options = SearchConfig::palette().options();
    assert_eq!(
        titles(&index().search("LISBON", &options)),
        titles(&index().search("lisbon", &options))
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ascii_query_finds_accented_title() {
    let options = SearchConfig::palette().options();
    assert_eq!(index().search("cafe", &options)[0].item.id, "cafe");
    assert_eq!(index().search("naive", &options)[0].item.id, "naive");
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accented_query_finds_accented_title() {
    let options = SearchConfig::palette().options();
    assert_eq!(index().search("Café", &options)[0].item.id, "cafe");
}

#[test]
fn test_punctuation_splits_words() {
    let options = SearchConfig::palette().options();
    assert_eq!(index().search("cd", &options)[0].item.id, "ci-cd");
    assert_eq!(index().search("ci/cd", &options)[0].item.id, "ci-cd");
}
