use crate::config::Config;
use crate::input::InputState;
use crate::session::Session;

pub struct App {
    pub session: Session,
    pub input: InputState,
    pub should_quit: bool,
}

impl App {
    /// App for the configured collaborators, optionally preloaded with text
    pub fn new(config: &Config, initial_text: Option<&str>) -> Self {
        let mut app = Self::with_session(Session::from_config(config));
        if let Some(text) = initial_text {
            app.load_text(text);
        }
        app
    }

    /// App around an existing session; the editor starts with its text
    pub fn with_session(session: Session) -> Self {
        let input = InputState::with_text(session.text());
        Self {
            session,
            input,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replace the editor content wholesale
    pub fn load_text(&mut self, text: &str) {
        self.input = InputState::with_text(text);
        self.sync_text();
    }

    /// Push the editor content into the session if it changed
    ///
    /// Cursor movement leaves the text alone and must not restart the
    /// input-size timer, so unchanged content is skipped.
    pub fn sync_text(&mut self) {
        let text = self.input.text();
        if text != self.session.text() {
            self.session.set_text(text);
        }
    }

    /// Clear both the session and the editor
    pub fn reset(&mut self) {
        self.session.reset();
        self.input.clear();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
