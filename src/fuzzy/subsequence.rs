// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-order character matching: "ddw" finds "ai-driven development workflow".

/// Where a subsequence match landed, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsequenceMatch {
    /// Char offset of the first matched char.
    pub start: usize,
    /// Chars from first to last matched char, inclusive.
    pub span: usize,
}

impl SubsequenceMatch {
    /// Needle length over span length: 1.0 for a contiguous match.
    pub fn compactness(&self, needle_len: usize) -> f64 {
        if self.span == 0 {
            0.0
        } else {
            needle_len as f64 / self.span as f64
        }
    }
}

/// Tightest window of `haystack` containing `needle` as a subsequence.
///
/// Tries every start where the first needle char occurs and greedily matches
/// forward. Greedy forward matching from a fixed start yields the earliest
/// possible end, so the shortest of those windows is the tightest overall.
/// Ties keep the earliest window.
pub fn subsequence_match(haystack: &str, needle: &str) -> Option<SubsequenceMatch> {
    let h: Vec<char> = haystack.chars().collect();
    let n: Vec<char> = needle.chars().collect();
    let first = *n.first()?;

    let mut best: Option<SubsequenceMatch> = None;
    for start in (0..h.len()).filter(|&i| h[i] == first) {
        let mut matched = 1;
        let mut end = start;
        for (offset, &c) in h[start + 1..].iter().enumerate() {
            if matched == n.len() {
                break;
            }
            if c == n[matched] {
                matched += 1;
                end = start + 1 + offset;
            }
        }
        if matched < n.len() {
            // Later starts only see a shorter suffix.
            break;
        }
        let span = end - start + 1;
        if best.map_or(true, |b| span < b.span) {
            best = Some(SubsequenceMatch { start, span });
        }
    }
    best
}
