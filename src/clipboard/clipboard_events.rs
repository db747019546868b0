use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Copy the text on Ctrl+Y
///
/// Returns whether the key was consumed. With no text the key is still
/// consumed but nothing is written. The outcome of the write reaches the user
/// through the session's notification.
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code != KeyCode::Char('y') || !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    if app.session.is_empty() {
        return true;
    }

    if let Err(_err) = app.session.copy() {
        #[cfg(debug_assertions)]
        log::debug!("Copy failed: {}", _err);
    }
    true
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
