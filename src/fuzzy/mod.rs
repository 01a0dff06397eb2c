// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy primitives: typo tolerance via edit distance, and in-order
//! character matching for abbreviations.
//!
//! Both work on chars, not bytes. Everything here assumes its inputs were
//! already passed through [`crate::normalize`].

mod levenshtein;
mod subsequence;

pub use levenshtein::*;
pub use subsequence::*;
