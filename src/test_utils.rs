//! Shared test utilities for charcount
//!
//! Recording stand-ins for the clipboard and telemetry collaborators, and
//! helpers for building sessions and apps around them.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::app::App;
    use crate::clipboard::{ClipboardResult, ClipboardWriter, CopyError};
    use crate::session::{DEFAULT_DEBOUNCE_MS, DEFAULT_LABEL_THRESHOLD, Session};
    use crate::telemetry::{TelemetryEvent, TelemetrySink};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Telemetry sink that keeps every event it receives
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        events: Rc<RefCell<Vec<TelemetryEvent>>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events.borrow().clone()
        }

        pub fn names(&self) -> Vec<String> {
            self.events.borrow().iter().map(|e| e.name.clone()).collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn emit(&self, event: &TelemetryEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    /// Clipboard that records writes and answers with a fixed outcome
    #[derive(Clone)]
    pub struct ScriptedClipboard {
        outcome: Result<(), CopyError>,
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl ScriptedClipboard {
        pub fn working() -> Self {
            Self {
                outcome: Ok(()),
                writes: Rc::default(),
            }
        }

        pub fn failing(error: CopyError) -> Self {
            Self {
                outcome: Err(error),
                writes: Rc::default(),
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.borrow().clone()
        }
    }

    impl ClipboardWriter for ScriptedClipboard {
        fn write_text(&mut self, text: &str) -> ClipboardResult {
            self.writes.borrow_mut().push(text.to_string());
            self.outcome
        }
    }

    pub const TEST_DEBOUNCE: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

    /// Session plus handles on its recording collaborators
    pub struct Harness {
        pub session: Session,
        pub clipboard: ScriptedClipboard,
        pub sink: RecordingSink,
    }

    pub fn harness_with(clipboard: ScriptedClipboard) -> Harness {
        let sink = RecordingSink::default();
        let session = Session::new(
            Box::new(clipboard.clone()),
            Box::new(sink.clone()),
            TEST_DEBOUNCE,
            DEFAULT_LABEL_THRESHOLD,
        );
        Harness {
            session,
            clipboard,
            sink,
        }
    }

    pub fn harness() -> Harness {
        harness_with(ScriptedClipboard::working())
    }

    /// App around a session with recording collaborators
    pub fn test_app() -> (App, ScriptedClipboard, RecordingSink) {
        let Harness {
            session,
            clipboard,
            sink,
        } = harness();
        (App::with_session(session), clipboard, sink)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}
