//! Session module
//!
//! The single mutable cell of the app: the current text, its metrics,
//! and the copy/reset actions with their debounced telemetry.

mod debouncer;
mod session_state;

pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use session_state::{DEFAULT_LABEL_THRESHOLD, Session};
