//! Fuzzy primitives checked against straightforward reference versions.

use proptest::prelude::*;

use glint::fuzzy::{levenshtein_bounded, prefix_distance_within, subsequence_match};
use glint::normalize;

/// Small alphabet so strings actually collide.
fn short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé]{0,8}").unwrap()
}

fn is_subsequence(haystack: &str, needle: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_bounded_levenshtein_matches_strsim(a in short_word(), b in short_word(), max in 0..5usize) {
        let expected = strsim::levenshtein(&a, &b);
        let got = levenshtein_bounded(&a, &b, max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    #[test]
    fn prop_prefix_distance_is_best_prefix(query in short_word(), word in short_word(), max in 0..4usize) {
        let best = (0..=word.chars().count())
            .map(|n| {
                let prefix: String = word.chars().take(n).collect();
                strsim::levenshtein(&query, &prefix)
            })
            .min()
            .unwrap_or(usize::MAX);
        let expected = (best <= max).then_some(best);
        prop_assert_eq!(prefix_distance_within(&query, &word, max), expected);
    }

    #[test]
    fn prop_subsequence_agrees_with_scan(haystack in short_word(), needle in "[a-d]{1,4}") {
        let found = subsequence_match(&haystack, &needle);
        prop_assert_eq!(found.is_some(), is_subsequence(&haystack, &needle));

        if let Some(m) = found {
            let needle_len = needle.chars().count();
            prop_assert!(m.span >= needle_len);
            let window: String = haystack.chars().skip(m.start).take(m.span).collect();
            prop_assert!(is_subsequence(&window, &needle));
            prop_assert!(m.compactness(needle_len) <= 1.0);
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(text in "[a-zA-Zéèüñ  ]{0,20}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(once.to_lowercase(), once);
    }
}

#[test]
fn test_tightest_window_is_minimal() {
    // Naive check on a fixed case: every window shorter than the reported
    // span misses the needle.
    let haystack = "abxxxab";
    let m = subsequence_match(haystack, "ab").unwrap();
    assert_eq!(m.span, 2);
    assert_eq!(m.start, 0);
}
