// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancellable debounce timer.
//!
//! Every widget that searches as you type needs the same thing: hold the
//! latest value, fire once input has been quiet for a while, and forget it
//! when the panel closes. `Debouncer` is that, with no timers of its own.
//! The caller passes the current time in and polls; the browser binding
//! feeds it `performance.now()`, the CLI an `Instant`-based clock, tests a
//! plain counter.
//!
//! Time is a `Duration` since an arbitrary monotonic origin. Only differences
//! matter.
//!
//! ```
//! use std::time::Duration;
//! use glint::Debouncer;
//!
//! let mut d = Debouncer::new(Duration::from_millis(200));
//! d.schedule("ru", Duration::from_millis(0));
//! d.schedule("rus", Duration::from_millis(90)); // replaces "ru"
//! assert_eq!(d.poll(Duration::from_millis(250)), None);
//! assert_eq!(d.poll(Duration::from_millis(290)), Some("rus"));
//! assert_eq!(d.poll(Duration::from_millis(900)), None); // fires once
//! ```

use std::time::Duration;

/// Identifies one scheduled value. Cancelling with a stale handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Duration,
    generation: u64,
}

/// Holds at most one pending value and releases it after `delay` of quiet.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing anything pending. The quiet period
    /// restarts from `now`.
    pub fn schedule(&mut self, value: T, now: Duration) -> DebounceHandle {
        self.generation += 1;
        self.pending = Some(Pending {
            value,
            due: now.saturating_add(self.delay),
            generation: self.generation,
        });
        DebounceHandle(self.generation)
    }

    /// Drop whatever is pending.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value only if it is the one `handle` scheduled.
    pub fn cancel_handle(&mut self, handle: DebounceHandle) -> bool {
        match &self.pending {
            Some(p) if p.generation == handle.0 => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Release the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}
