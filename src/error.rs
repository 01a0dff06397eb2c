// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for glint.
//!
//! Very little of this ever reaches a user. A failed content fetch degrades to
//! the static pages, a malformed item is dropped from one search pass. The
//! variants exist so those fallbacks can log something precise.

use std::io;

use thiserror::Error;

use crate::types::ItemKey;

/// Main error type for glint operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content fetch failed: {0}")]
    Fetch(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("malformed item {key}: {reason}")]
    MalformedItem { key: ItemKey, reason: &'static str },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
