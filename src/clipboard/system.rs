use arboard::Clipboard;

use super::backend::{ClipboardResult, CopyError};

/// Lazily opened handle to the OS clipboard
///
/// The handle lives as long as the session. On X11 and Wayland this process
/// serves the copied text, which vanishes once the handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn write(&mut self, text: &str) -> ClipboardResult {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|_| CopyError::SystemUnavailable)?,
        };

        self.handle
            .insert(clipboard)
            .set_text(text)
            .map_err(|_| CopyError::WriteError)
    }
}
