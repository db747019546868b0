//! Tests for telemetry sinks

use super::*;
use std::fs;
use tempfile::TempDir;

fn read_lines(path: &Path) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_noop_sink_accepts_events() {
    NoopSink.emit(&TelemetryEvent::copy_text());
}

#[test]
fn test_log_sink_accepts_events_without_logger() {
    LogSink.emit(&TelemetryEvent::text_input(12, 100));
}

#[test]
fn test_file_sink_appends_json_lines() {
    let dir = TempDir::new().unwrap();
    let sink = FileSink::new(dir.path().join("events.jsonl"));

    sink.emit(&TelemetryEvent::text_input(150, 100));
    sink.emit(&TelemetryEvent::copy_text());

    let records = read_lines(sink.path());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "text_input");
    assert_eq!(records[0]["category"], "user_interaction");
    assert_eq!(records[0]["label"], "chars_100+");
    assert!(records[0]["timestamp"].is_string());
    assert_eq!(records[1]["name"], "copy_text");
    assert!(records[1].get("label").is_none());
}

#[test]
fn test_file_sink_swallows_unwritable_path() {
    let dir = TempDir::new().unwrap();
    // Parent directory does not exist
    let sink = FileSink::new(dir.path().join("missing").join("events.jsonl"));

    sink.emit(&TelemetryEvent::reset_text());

    assert!(!sink.path().exists());
}

#[test]
fn test_sink_from_config_file_uses_configured_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("configured.jsonl");
    let config = TelemetryConfig {
        sink: TelemetrySinkKind::File,
        path: Some(path.clone()),
        ..TelemetryConfig::default()
    };

    let sink = sink_from_config(&config);
    sink.emit(&TelemetryEvent::reset_text());

    let records = read_lines(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "reset_text");
}

#[test]
fn test_default_events_path_is_in_temp_dir() {
    let path = default_events_path();
    assert!(path.starts_with(std::env::temp_dir()));
    assert!(path.ends_with("charcount-events.jsonl"));
}
