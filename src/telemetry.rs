//! Telemetry module for charcount
//!
//! Usage events (`text_input`, `copy_text`, `reset_text`) go to a pluggable
//! sink. Nothing in the app depends on a sink succeeding.

mod event;
mod sink;

pub use event::{TelemetryEvent, input_size_label};
pub use sink::{
    FileSink, LogSink, NoopSink, TelemetrySink, default_events_path, sink_from_config,
};
