//! Stats module for computing and displaying text statistics
//!
//! `metrics` holds the pure counting engine, `stats_render` the side panel
//! that shows the counts.

mod metrics;
pub mod stats_render;

pub use metrics::{Metrics, compute_metrics, format_count};
