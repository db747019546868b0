use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that act regardless of the editor: quit, reset and dismiss
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            #[cfg(debug_assertions)]
            log::debug!("Quit requested");
            app.should_quit = true;
            true
        }
        KeyCode::Char('r') if ctrl => {
            if !app.session.is_empty() {
                app.reset();
            }
            true
        }
        KeyCode::Esc if app.session.notification.is_visible() => {
            app.session.notification.dismiss();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
