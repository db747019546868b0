//! Notification module for charcount
//!
//! Transient toast-style notices. Actions report their outcome here and the
//! renderer draws the current one on top of the UI until it expires.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, Severity};
