// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so length checks
//! reject most non-matches before the O(nm) DP allocates anything.

/// Edit distance between `a` and `b` if it is at most `max`.
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}

/// Smallest edit distance between `query` and any prefix of `word`, if at
/// most `max`.
///
/// This is what search-as-you-type wants: "devl" is one edit from "devel",
/// a prefix of "development", even though it is eight edits from the whole
/// word.
pub fn prefix_distance_within(query: &str, word: &str, max: usize) -> Option<usize> {
    let q: Vec<char> = query.chars().collect();
    let w: Vec<char> = word.chars().collect();

    // Every prefix of `word` is at most `w.len()` chars long.
    if q.len() > w.len() + max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=w.len()).collect();
    for (i, &qc) in q.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &wc) in w.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(qc != wc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    dp.iter().copied().min().filter(|&d| d <= max)
}
