// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancellation by supersession.
//!
//! Each keystroke schedules its value; scheduling again replaces whatever was
//! pending and restarts the clock. Only a value that survives a full quiet
//! period comes out of [`Debouncer::poll`].
//!
//! There is no timer thread. Time is whatever the caller says it is, as a
//! [`Duration`] since an origin of its choosing (`performance.now()` in the
//! browser, an `Instant` natively, plain numbers in tests).

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value; it fires once `now + delay` has passed.
    pub fn schedule(&mut self, value: T, now: Duration) {
        self.pending = Some((now.saturating_add(self.delay), value));
    }

    /// Drop the pending value, handing it back.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn due_at(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// The pending value, if its quiet period is over.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((due, _)) if now >= *due => self.cancel(),
            _ => None,
        }
    }

    /// Fire immediately regardless of time.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}
