// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use glint::{
    Activation, ContentLoader, Corpus, ItemKind, JsonFileSource, MatchResult, Palette,
    SearchConfig, SearchIndex,
};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, DIM, GRAY, GREEN, YELLOW};
use cli::replay::{parse_script, Frame, Replay};
use cli::{Cli, Commands, Preset};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", display::error_line("error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,glint=debug",
        _ => "debug,glint=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            corpus,
            query,
            limit,
            preset,
            config,
            no_static,
            json,
        } => {
            let mut config = load_config(preset, config.as_deref())?;
            if let Some(limit) = limit {
                if limit == 0 {
                    bail!("--limit must be at least 1");
                }
                config.max_results = limit;
            }
            let corpus = load_corpus(&corpus, no_static);
            let index = corpus.into_index(&config.fields);
            let results = index.search(&query, &config.options());

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let label = format!("\"{}\" · {}", query, glint::result_count_message(results.len()));
                display::print_results(&label, &results, None);
            }
            Ok(())
        }

        Commands::Inspect {
            corpus,
            preset,
            config,
            no_static,
        } => {
            let config = load_config(preset, config.as_deref())?;
            let corpus = load_corpus(&corpus, no_static);
            Inspection::new(corpus, &config).print();
            Ok(())
        }

        Commands::Replay {
            corpus,
            script,
            preset,
            config,
            keystroke_ms,
            json,
        } => {
            let config = load_config(preset, config.as_deref())?;
            let source = read_script(&script)?;
            let steps = parse_script(&source)?;

            let corpus = load_corpus(&corpus, false);
            let index = Arc::new(corpus.into_index(&config.fields));
            let palette = Palette::new(index, &config);
            let mut replay = Replay::new(palette, Duration::from_millis(keystroke_ms));

            for frame in replay.run(&steps) {
                if json {
                    println!("{}", serde_json::to_string(&frame)?);
                } else {
                    print_frame(&frame);
                }
            }
            if !json && replay.palette().is_open() {
                let p = replay.palette();
                display::print_results(&display::state_label(p.state()), p.results(), p.selection());
            }
            Ok(())
        }
    }
}

fn load_config(preset: Preset, path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("reading config {}", path.display())),
        None => Ok(match preset {
            Preset::Palette => SearchConfig::palette(),
            Preset::Quick => SearchConfig::quick_search(),
        }),
    }
}

/// Missing or broken corpus files fall back to the static pages, the same
/// as a failed fetch in the browser.
fn load_corpus(path: &Path, no_static: bool) -> Corpus {
    let loader = if no_static {
        ContentLoader::new(Vec::new())
    } else {
        ContentLoader::default()
    };
    let corpus = loader.load(&JsonFileSource::new(path));
    if corpus.degraded {
        eprintln!(
            "{}",
            themed(YELLOW, &[], "corpus unavailable, searching static pages only")
        );
    }
    corpus
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("reading script from stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))
    }
}

/// What `inspect` reports about a corpus indexed under one config.
struct Inspection {
    index: SearchIndex,
    loaded: usize,
    invalid: Vec<String>,
    degraded: bool,
    defaults: Vec<MatchResult>,
}

impl Inspection {
    fn new(corpus: Corpus, config: &SearchConfig) -> Self {
        let loaded = corpus.items.len();
        let invalid = corpus
            .items
            .iter()
            .filter_map(|item| item.validate().err().map(|e| e.to_string()))
            .collect();
        let degraded = corpus.degraded;
        let index = corpus.into_index(&config.fields);
        let defaults = index.defaults(config.max_results);
        Self {
            index,
            loaded,
            invalid,
            degraded,
            defaults,
        }
    }

    fn by_kind(&self) -> BTreeMap<ItemKind, usize> {
        let mut counts = BTreeMap::new();
        for item in self.index.items() {
            *counts.entry(item.kind).or_default() += 1;
        }
        counts
    }

    fn print(&self) {
        display::section_top("CORPUS");
        display::row(&format!(
            "  {:<12}{}",
            "items",
            themed(GREEN, &[BOLD], &self.index.len().to_string())
        ));
        for (kind, count) in &self.by_kind() {
            display::row(&format!("    {} {}", display::kind_badge(*kind), count));
        }
        display::row(&format!(
            "  {:<12}{}",
            "duplicates",
            self.loaded - self.index.len()
        ));
        display::row(&format!("  {:<12}{}", "malformed", self.invalid.len()));
        for reason in &self.invalid {
            display::row(&themed(GRAY, &[DIM], &format!("    {}", display::truncate(reason, 64))));
        }
        if self.degraded {
            display::row(&themed(YELLOW, &[], "  fetch failed, static pages only"));
        }
        display::section_bot();

        display::section_top("FIELDS");
        for field in self.index.fields() {
            display::row(&format!(
                "  {} {:.2}",
                display::pad_right(&themed(CYAN, &[], &field.field.to_string()), 14),
                field.weight
            ));
        }
        display::section_bot();

        display::print_results("EMPTY QUERY", &self.defaults, None);
    }
}

fn print_frame(frame: &Frame) {
    let selection = frame
        .selection
        .map_or_else(|| "-".to_string(), |i| i.to_string());
    let activation = match &frame.activation {
        Some(Activation::Navigate(url)) => themed(GREEN, &[BOLD], &format!("→ navigate {}", url)),
        Some(Activation::Submit(query)) => themed(GREEN, &[BOLD], &format!("→ submit {:?}", query)),
        Some(Activation::Closed) => themed(GRAY, &[], "→ closed"),
        Some(Activation::None) | None => String::new(),
    };
    let spoken = if frame.announced.is_empty() {
        String::new()
    } else {
        themed(GRAY, &[DIM], &format!("({})", frame.announced.join(", ")))
    };
    println!(
        "{} {} {} q={:<16} {:>2} results  sel={:<2} passes={} {} {}",
        themed(GRAY, &[DIM], &format!("[{:>6}ms]", frame.at_ms)),
        display::pad_right(&frame.step, 20),
        display::pad_right(&frame.state, 14),
        format!("{:?}", frame.query),
        frame.results.len(),
        selection,
        frame.passes,
        activation,
        spoken,
    );
}
