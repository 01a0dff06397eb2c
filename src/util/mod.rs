// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the matcher and the index.
//!
//! Normalisation lives here so the index and the query side can never
//! disagree about what "the same text" means.

pub mod normalize;
