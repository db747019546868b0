//! charcount library - Interactive text statistics
//!
//! This library exposes the core functionality of charcount for testing purposes.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod notification;
pub mod session;
pub mod stats;
pub mod telemetry;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use session::Session;
pub use stats::{Metrics, compute_metrics};
