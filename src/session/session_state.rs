//! The session controller
//!
//! `Session` owns the text being measured and keeps its metrics in step with
//! every change. Copy and reset report their outcome through the
//! notification state and emit telemetry.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use crate::clipboard::{BackendClipboard, ClipboardWriter, CopyError};
use crate::config::Config;
use crate::notification::NotificationState;
use crate::stats::{Metrics, compute_metrics};
use crate::telemetry::{TelemetryEvent, TelemetrySink, sink_from_config};

pub const DEFAULT_LABEL_THRESHOLD: usize = 100;

pub struct Session {
    text: String,
    metrics: Metrics,
    /// Pending `text_input` emission, carrying the char count it reports
    emission: Debouncer<usize>,
    label_threshold: usize,
    clipboard: Box<dyn ClipboardWriter>,
    telemetry: Box<dyn TelemetrySink>,
    pub notification: NotificationState,
}

impl Session {
    pub fn new(
        clipboard: Box<dyn ClipboardWriter>,
        telemetry: Box<dyn TelemetrySink>,
        debounce: Duration,
        label_threshold: usize,
    ) -> Self {
        Self {
            text: String::new(),
            metrics: Metrics::default(),
            emission: Debouncer::new(debounce),
            label_threshold,
            clipboard,
            telemetry,
            notification: NotificationState::new(),
        }
    }

    /// Build a session wired to the configured clipboard backend and sink
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(BackendClipboard::new(config.clipboard.backend)),
            sink_from_config(&config.telemetry),
            Duration::from_millis(config.telemetry.debounce_ms),
            config.telemetry.label_threshold,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_pending_emission(&self) -> bool {
        self.emission.has_pending()
    }

    pub fn set_text(&mut self, new_text: impl Into<String>) {
        self.set_text_at(new_text, Instant::now());
    }

    /// Replace the text, recompute metrics and restart the input-size timer
    ///
    /// Empty text cancels the pending emission without scheduling a new one.
    pub fn set_text_at(&mut self, new_text: impl Into<String>, now: Instant) {
        self.text = new_text.into();
        self.metrics = compute_metrics(&self.text);

        self.emission.cancel();
        if !self.text.is_empty() {
            self.emission.schedule_at(self.metrics.total_chars, now);
        }
    }

    /// Copy the current text through the clipboard writer
    ///
    /// The write is attempted even for empty text.
    pub fn copy(&mut self) -> Result<(), CopyError> {
        match self.clipboard.write_text(&self.text) {
            Ok(()) => {
                self.telemetry.emit(&TelemetryEvent::copy_text());
                self.notification
                    .show_info("Copied", "Text copied to clipboard.");
                Ok(())
            }
            Err(e) => {
                #[cfg(debug_assertions)]
                log::warn!("Copy failed: {}", e);

                self.notification
                    .show_error("Copy failed", "Could not copy text to the clipboard.");
                Err(e)
            }
        }
    }

    /// Clear the text. Safe to call when already empty
    pub fn reset(&mut self) {
        self.text.clear();
        self.metrics = Metrics::default();
        self.emission.cancel();

        self.telemetry.emit(&TelemetryEvent::reset_text());
        self.notification
            .show_info("Cleared", "All input has been removed.");
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Emit the debounced `text_input` event if its quiet period is over
    ///
    /// Returns true when an event was emitted.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.emission.take_ready_at(now) {
            Some(char_count) => {
                self.telemetry.emit(&TelemetryEvent::text_input(
                    char_count,
                    self.label_threshold,
                ));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "session_state_tests.rs"]
mod session_state_tests;
