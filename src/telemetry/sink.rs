//! Telemetry sinks
//!
//! Sinks are best-effort: a sink that cannot deliver an event drops it.

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::event::TelemetryEvent;
use crate::config::{TelemetryConfig, TelemetrySinkKind};

pub trait TelemetrySink {
    fn emit(&self, event: &TelemetryEvent);
}

/// Discards everything
#[derive(Debug, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn emit(&self, _event: &TelemetryEvent) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn emit(&self, event: &TelemetryEvent) {
        log::info!(
            "telemetry event={} category={} label={} value={}",
            event.name,
            event.category,
            event.label.as_deref().unwrap_or("-"),
            event
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

#[derive(Serialize)]
struct Record<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a TelemetryEvent,
}

/// Appends one JSON object per event to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, event: &TelemetryEvent) -> io::Result<()> {
        let record = Record {
            timestamp: chrono::Local::now().to_rfc3339(),
            event,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl TelemetrySink for FileSink {
    fn emit(&self, event: &TelemetryEvent) {
        if let Err(_e) = self.append(event) {
            #[cfg(debug_assertions)]
            log::warn!(
                "Dropping telemetry event {} for {:?}: {}",
                event.name,
                self.path,
                _e
            );
        }
    }
}

pub fn default_events_path() -> PathBuf {
    std::env::temp_dir().join("charcount-events.jsonl")
}

/// Build the sink selected in the config
pub fn sink_from_config(config: &TelemetryConfig) -> Box<dyn TelemetrySink> {
    match config.sink {
        TelemetrySinkKind::None => Box::new(NoopSink),
        TelemetrySinkKind::Log => Box::new(LogSink),
        TelemetrySinkKind::File => {
            let path = config.path.clone().unwrap_or_else(default_events_path);
            Box::new(FileSink::new(path))
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod sink_tests;
