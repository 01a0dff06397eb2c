//! Typing more of a query should sharpen results, not scramble them.

use super::common::{portfolio_index, titles};
use glint::{SearchConfig, SearchIndex};

/// The best match for `short` survives into `long`, and nothing that did
/// not match `short` at all jumps above it.
fn assert_leader_survives(index: &SearchIndex, short: &str, long: &str) {
    let options = SearchConfig::quick_search().options();
    let before = index.search(short, &options);
    let after = index.search(long, &options);

    let leader = before.first().unwrap_or_else(|| panic!("{short:?} matched nothing"));
    let leader_after = after
        .iter()
        .find(|r| r.position == leader.position)
        .unwrap_or_else(|| panic!("{long:?} lost {:?}: {:?}", leader.item.title, titles(&after)));

    for newcomer in after
        .iter()
        .filter(|r| before.iter().all(|b| b.position != r.position))
    {
        assert!(
            newcomer.score <= leader_after.score,
            "{:?} appeared for {long:?} and outranked {:?}",
            newcomer.item.title,
            leader.item.title
        );
    }
}

#[test]
fn test_prefix_growth_keeps_leader() {
    let index = portfolio_index();
    for (short, long) in [
        ("wor", "workflow"),
        ("rus", "rust"),
        ("kube", "kubernetes"),
        ("dev", "development"),
        ("type", "typescript"),
    ] {
        assert_leader_survives(&index, short, long);
    }
}

#[test]
fn test_adding_a_word_narrows() {
    let index = portfolio_index();
    let options = SearchConfig::quick_search().options();
    let broad = index.search("rust", &options);
    let narrow = index.search("rust errors", &options);

    assert!(!narrow.is_empty());
    assert!(narrow.len() <= broad.len());
    assert_eq!(narrow[0].item.title, "Error Handling in Rust");
    assert_leader_survives(&index, "rust", "rust errors");
}

#[test]
fn test_longer_prefix_scores_higher() {
    let index = portfolio_index();
    let options = SearchConfig::quick_search().options();
    let score = |q: &str| {
        index
            .search(q, &options)
            .into_iter()
            .find(|r| r.item.id == "kubernetes-homelab")
            .map(|r| r.score)
            .unwrap_or(0.0)
    };
    assert!(score("kub") < score("kubern"));
    assert!(score("kubern") < score("kubernetes"));
}
