// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! Every query token is scored against every configured field, the field
//! weight scales it, and the best field wins for that token. The item score is
//! the mean over tokens. All scores live in `[0, 1]`.
//!
//! # Token score ladder
//!
//! | Match kind                  | Score                          |
//! |-----------------------------|--------------------------------|
//! | Exact word                  | 1.0                            |
//! | Word prefix                 | 0.85 + 0.1 × token/word length |
//! | Substring inside a word     | 0.6                            |
//! | Prefix within 1 edit        | 0.5                            |
//! | Prefix within 2 edits       | 0.3                            |
//! | Subsequence over the field  | 0.4 × compactness              |
//!
//! Word-level matches also get a position bonus of up to 0.05 for landing in
//! an early word. The ladder keeps every rung apart by more than that bonus,
//! except that a prefix can never outrank an exact word because both are
//! capped at 1.0.

use crate::fuzzy::{prefix_distance_within, subsequence_match};
use crate::util::normalize::{normalize, words};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Token equals a whole word.
pub const EXACT_WORD_SCORE: f64 = 1.0;

/// Token is a prefix of a word.
pub const WORD_PREFIX_SCORE: f64 = 0.85;

/// Extra prefix score scaled by how much of the word the token covers.
pub const WORD_PREFIX_COVERAGE_BONUS: f64 = 0.1;

/// Token appears inside a word, not at its start.
pub const SUBSTRING_SCORE: f64 = 0.6;

/// Prefix match after one or two edits, indexed by edit distance.
pub const FUZZY_SCORES: [f64; 3] = [0.0, 0.5, 0.3];

/// Upper bound for in-order matches across the whole field text.
pub const SUBSEQUENCE_MAX_SCORE: f64 = 0.4;

/// Maximum position bonus for a match in the first word.
pub const MAX_POSITION_BONUS: f64 = 0.05;

/// Whole query equals a field.
pub const PHRASE_EXACT_SCORE: f64 = 1.0;

/// Whole query is a prefix of a field.
pub const PHRASE_PREFIX_SCORE: f64 = 0.95;

/// Default cutoff below which items are dropped.
pub const DEFAULT_MIN_SCORE: f64 = 0.2;

/// Shortest token that gets typo tolerance. Two-letter tokens like "ai" would
/// match half the vocabulary at one edit.
pub const FUZZY_MIN_TOKEN_LEN: usize = 3;

/// Shortest token tried as a subsequence.
pub const SUBSEQUENCE_MIN_TOKEN_LEN: usize = 2;

/// How many edits a token of this length may carry.
pub fn max_edits(token_len: usize) -> usize {
    match token_len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

// =============================================================================
// PREPARED TEXT
// =============================================================================

/// A field's text, normalised once at index time.
#[derive(Debug, Clone, Default)]
pub struct FieldText {
    pub text: String,
    pub words: Vec<String>,
}

impl FieldText {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let words = words(&text).map(str::to_string).collect();
        Self { text, words }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A query, normalised and split into tokens once per search pass.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub text: String,
    pub tokens: Vec<String>,
}

impl PreparedQuery {
    /// `None` when the query has no searchable characters.
    pub fn new(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        let tokens: Vec<String> = words(&text).map(str::to_string).collect();
        if tokens.is_empty() {
            return None;
        }
        Some(Self { text, tokens })
    }
}

/// A field paired with its weight relative to the heaviest field.
#[derive(Debug, Clone, Copy)]
pub struct WeightedField<'a> {
    pub weight: f64,
    pub text: &'a FieldText,
}

// =============================================================================
// SCORING
// =============================================================================

/// Position bonus: matches in earlier words score slightly higher.
///
/// Range `[0, MAX_POSITION_BONUS]`, monotonically decreasing with `index`.
pub fn position_bonus(index: usize, word_count: usize) -> f64 {
    if word_count > 0 {
        MAX_POSITION_BONUS * (1.0 - (index as f64 / word_count as f64))
    } else {
        0.0
    }
}

/// Score one token against one word, without position bonus.
pub fn word_score(token: &str, token_len: usize, word: &str) -> f64 {
    if word == token {
        return EXACT_WORD_SCORE;
    }
    if word.starts_with(token) {
        let coverage = token_len as f64 / word.chars().count() as f64;
        return WORD_PREFIX_SCORE + WORD_PREFIX_COVERAGE_BONUS * coverage;
    }
    if word.contains(token) {
        return SUBSTRING_SCORE;
    }
    if token_len >= FUZZY_MIN_TOKEN_LEN {
        if let Some(distance) = prefix_distance_within(token, word, max_edits(token_len)) {
            return FUZZY_SCORES.get(distance).copied().unwrap_or(0.0);
        }
    }
    0.0
}

/// Best score for one token anywhere in a field.
pub fn token_score(token: &str, field: &FieldText) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    let token_len = token.chars().count();
    let word_count = field.words.len();

    let best = field
        .words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let base = word_score(token, token_len, word);
            if base > 0.0 {
                (base + position_bonus(index, word_count)).min(1.0)
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max);

    if best > 0.0 || token_len < SUBSEQUENCE_MIN_TOKEN_LEN {
        return best;
    }

    subsequence_match(&field.text, token)
        .map(|m| SUBSEQUENCE_MAX_SCORE * m.compactness(token_len))
        .unwrap_or(0.0)
}

/// Whole-query match against a whole field.
pub fn phrase_score(query: &str, field: &FieldText) -> f64 {
    if field.is_empty() || query.is_empty() {
        0.0
    } else if field.text == query {
        PHRASE_EXACT_SCORE
    } else if field.text.starts_with(query) {
        PHRASE_PREFIX_SCORE
    } else {
        0.0
    }
}

/// Combine per-field scores into one item score.
///
/// Every token has to land somewhere: a token that scores zero in all fields
/// zeroes the item. Otherwise the mean best-field token score, raised to the
/// weighted phrase score when the whole query matches a field.
pub fn score_fields(query: &PreparedQuery, fields: &[WeightedField<'_>]) -> f64 {
    let mut total = 0.0;
    for token in &query.tokens {
        let best = fields
            .iter()
            .map(|f| f.weight * token_score(token, f.text))
            .fold(0.0, f64::max);
        if best <= 0.0 {
            return 0.0;
        }
        total += best;
    }
    let mean = total / query.tokens.len() as f64;

    let phrase = fields
        .iter()
        .map(|f| f.weight * phrase_score(&query.text, f.text))
        .fold(0.0, f64::max);

    mean.max(phrase)
}
