// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted and cut.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Position** - corpus order, so equal scores keep the order the
//!    content API gave us
//!
//! Ranking works on `(position, score)` pairs so items are only cloned after
//! truncation.

use std::cmp::Ordering;

/// A scored item, referenced by corpus position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub position: usize,
    pub score: f64,
}

/// Compare two candidates for ranking.
///
/// `Less` means `a` ranks first. NaN scores compare equal and fall through
/// to position.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.position.cmp(&b.position),
    }
}

/// Sort candidates best-first and keep at most `limit`.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(compare_candidates);
    candidates.truncate(limit);
    candidates
}
