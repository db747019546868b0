//! Debounced scheduling of deferred work
//!
//! Holds at most one pending payload. Every new schedule replaces the pending
//! payload and restarts the quiet period, so only the last one survives.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    /// Payload waiting for the quiet period to end, with its deadline
    pending: Option<(T, Instant)>,
}

#[cfg(test)]
impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[cfg(test)]
    pub fn schedule(&mut self, payload: T) {
        self.schedule_at(payload, Instant::now());
    }

    /// Replace any pending payload and restart the timer from `now`
    pub fn schedule_at(&mut self, payload: T, now: Instant) {
        self.pending = Some((payload, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn take_ready(&mut self) -> Option<T> {
        self.take_ready_at(Instant::now())
    }

    /// Hand out the pending payload once its deadline has passed
    pub fn take_ready_at(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if !ready {
            return None;
        }
        self.pending.take().map(|(payload, _)| payload)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
