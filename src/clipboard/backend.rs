use thiserror::Error;

use crate::config::ClipboardBackend;

use super::osc52;
use super::system::SystemClipboard;

pub type ClipboardResult = Result<(), CopyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("system clipboard is unavailable")]
    SystemUnavailable,

    #[error("failed to write to the clipboard")]
    WriteError,
}

/// Anything that can take the text for a copy action
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// Clipboard writer backed by the configured backend
///
/// Auto tries the system clipboard first and falls back to OSC 52.
#[derive(Default)]
pub struct BackendClipboard {
    backend: ClipboardBackend,
    system: SystemClipboard,
}

impl BackendClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self {
            backend,
            system: SystemClipboard::default(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }
}

impl ClipboardWriter for BackendClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardResult {
        #[cfg(debug_assertions)]
        log::debug!(
            "Writing {} bytes to clipboard via {:?}",
            text.len(),
            self.backend
        );

        match self.backend {
            ClipboardBackend::System => self.system.write(text),
            ClipboardBackend::Osc52 => osc52::copy(text),
            ClipboardBackend::Auto => self.system.write(text).or_else(|_| osc52::copy(text)),
        }
    }
}
