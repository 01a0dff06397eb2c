// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Titles outweigh descriptions through field weights, earlier and more
//! complete matches outscore later and looser ones through the token ladder.
//! Ranking itself is just score order with corpus order as the tiebreaker.

mod core;
pub mod ranking;

pub use self::core::*;
