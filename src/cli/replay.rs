// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scripted palette sessions on a virtual clock.
//!
//! ```text
//! # find the workflow post
//! open
//! type workf
//! wait 200
//! key ArrowDown
//! key Enter
//! ```
//!
//! Time only moves on `type` (one keystroke interval per char) and `wait`.
//! The palette is ticked after every step, so a search pass shows up in the
//! first frame whose clock has passed the debounce deadline.

use std::time::Duration;

use anyhow::{bail, Context};
use serde::Serialize;

use glint::{Activation, Key, Palette, SharedAnnouncer};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Open,
    Close,
    Toggle,
    ClickOutside,
    /// Append chars one keystroke at a time.
    Type(String),
    /// Replace the whole query at once, like a paste.
    Query(String),
    Clear,
    Wait(Duration),
    Key(Key),
}

impl Step {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let step = match command {
            "open" => Step::Open,
            "close" => Step::Close,
            "toggle" => Step::Toggle,
            "click-outside" => Step::ClickOutside,
            "clear" => Step::Clear,
            "type" if !rest.is_empty() => Step::Type(rest.to_string()),
            "query" => Step::Query(rest.to_string()),
            "wait" => {
                let ms: u64 = rest
                    .parse()
                    .with_context(|| format!("wait needs milliseconds, got {:?}", rest))?;
                Step::Wait(Duration::from_millis(ms))
            }
            "key" if !rest.is_empty() => Step::Key(Key::from_dom(rest)),
            "type" | "key" => bail!("{} needs an argument", command),
            other => bail!("unknown command {:?}", other),
        };
        Ok(step)
    }
}

/// Parse a replay script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> anyhow::Result<Vec<(String, Step)>> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| {
            let step = Step::parse(line).with_context(|| format!("line {}: {}", i + 1, line))?;
            Ok((line.to_string(), step))
        })
        .collect()
}

/// Palette state after one step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub step: String,
    pub at_ms: u64,
    pub state: String,
    pub query: String,
    pub results: Vec<String>,
    pub selection: Option<usize>,
    /// How many search passes ran during this step.
    pub passes: usize,
    /// Screen-reader announcements made during this step.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub announced: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation: Option<Activation>,
}

pub struct Replay {
    palette: Palette,
    now: Duration,
    keystroke: Duration,
    spoken: SharedAnnouncer,
    heard: usize,
}

impl Replay {
    pub fn new(palette: Palette, keystroke: Duration) -> Self {
        let spoken = SharedAnnouncer::default();
        Self {
            palette: palette.with_announcer(spoken.clone()),
            now: Duration::ZERO,
            keystroke,
            spoken,
            heard: 0,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn run(&mut self, steps: &[(String, Step)]) -> Vec<Frame> {
        steps
            .iter()
            .map(|(line, step)| self.apply(line, step))
            .collect()
    }

    fn apply(&mut self, line: &str, step: &Step) -> Frame {
        let mut passes = 0;
        let mut activation = None;

        match step {
            Step::Open => self.palette.open(),
            Step::Close => self.palette.close(),
            Step::Toggle => self.palette.toggle(),
            Step::ClickOutside => activation = Some(self.palette.outside_click()),
            Step::Type(text) => {
                let mut query = self.palette.query().to_string();
                for c in text.chars() {
                    query.push(c);
                    self.palette.set_query(&query, self.now);
                    self.now += self.keystroke;
                    passes += usize::from(self.palette.tick(self.now));
                }
            }
            Step::Query(text) => self.palette.set_query(text, self.now),
            Step::Clear => self.palette.set_query("", self.now),
            Step::Wait(duration) => self.now += *duration,
            Step::Key(key) => {
                let pending = self.palette.next_deadline().is_some();
                activation = Some(self.palette.handle_key(*key));
                // Navigation keys settle a pending pass first.
                if pending && self.palette.next_deadline().is_none() && self.palette.is_open() {
                    passes += 1;
                }
            }
        }
        passes += usize::from(self.palette.tick(self.now));

        let announced = self.spoken.0.borrow()[self.heard..].to_vec();
        self.heard += announced.len();

        Frame {
            step: line.to_string(),
            at_ms: self.now.as_millis() as u64,
            state: self.palette.state().to_string(),
            query: self.palette.query().to_string(),
            results: self
                .palette
                .results()
                .iter()
                .map(|r| r.item.title.clone())
                .collect(),
            selection: self.palette.selection(),
            passes,
            announced,
            activation: activation.filter(|a| *a != Activation::None),
        }
    }
}
