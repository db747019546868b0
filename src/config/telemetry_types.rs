// Telemetry configuration type definitions

use serde::Deserialize;
use std::path::PathBuf;

use crate::session::{DEFAULT_DEBOUNCE_MS, DEFAULT_LABEL_THRESHOLD};

/// Default quiet period before a `text_input` event is emitted
fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Char counts above this are reported as a single bucket
fn default_label_threshold() -> usize {
    DEFAULT_LABEL_THRESHOLD
}

/// Telemetry sink selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TelemetrySinkKind {
    #[default]
    None,
    Log,
    File,
}

/// Telemetry configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub sink: TelemetrySinkKind,
    /// Events file for the `file` sink (JSON lines)
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_label_threshold")]
    pub label_threshold: usize,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        TelemetryConfig {
            sink: TelemetrySinkKind::None,
            path: None,
            debounce_ms: default_debounce_ms(),
            label_threshold: default_label_threshold(),
        }
    }
}

#[cfg(test)]
#[path = "telemetry_types_tests.rs"]
mod telemetry_types_tests;
