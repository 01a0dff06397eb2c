// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glint command-line interface.
//!
//! Three subcommands: `search` runs one query against a corpus file,
//! `inspect` reports what the index would hold, and `replay` drives a
//! palette through a scripted session on a virtual clock so debounce and
//! keyboard behavior can be checked without a browser.

pub mod display;
pub mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "glint",
    about = "Fuzzy search and command palette for a portfolio site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output (-v, -vv, -vvv). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// No log output at all
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Built-in widget configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Command palette (Ctrl+K)
    Palette,
    /// Inline quick search
    Quick,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and print ranked results
    Search {
        /// Corpus JSON: an item array or { pages, posts, projects }
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (overrides the preset)
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long, value_enum, default_value = "palette")]
        preset: Preset,

        /// SearchConfig JSON file (overrides the preset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Leave the built-in static pages out of the corpus
        #[arg(long)]
        no_static: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show corpus statistics and the empty-query defaults
    Inspect {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Field weights and empty-query list come from this preset
        #[arg(long, value_enum, default_value = "palette")]
        preset: Preset,

        /// SearchConfig JSON file (overrides the preset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Leave the built-in static pages out of the corpus
        #[arg(long)]
        no_static: bool,
    },

    /// Replay a scripted palette session
    ///
    /// One command per line: open, close, toggle, click-outside,
    /// type <text>, query <text>, clear, wait <ms>, key <KeyboardEvent.key>.
    /// Lines starting with # are comments.
    Replay {
        /// Corpus JSON file
        corpus: PathBuf,

        /// Script file, or - for stdin
        script: PathBuf,

        #[arg(long, value_enum, default_value = "palette")]
        preset: Preset,

        /// SearchConfig JSON file (overrides the preset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Milliseconds between keystrokes for `type`
        #[arg(long, default_value = "60")]
        keystroke_ms: u64,

        /// Print frames as JSON lines
        #[arg(long)]
        json: bool,
    },
}
