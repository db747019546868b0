use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

const PLACEHOLDER: &str = "Type or paste text here...";

pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(Vec::new()),
        }
    }

    /// Editor preloaded with `text`, cursor at the start
    pub fn with_text(text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(String::from).collect()
        };
        Self {
            textarea: new_textarea(lines),
        }
    }

    /// Full editor content, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    pub fn clear(&mut self) {
        self.textarea = new_textarea(Vec::new());
    }

    /// Insert pasted text at the cursor
    ///
    /// Terminals may deliver line breaks in a paste as `\r` or `\r\n`; both
    /// become `\n` so the editor splits lines the same way typing does.
    pub fn insert_paste(&mut self, text: &str) -> bool {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.textarea.insert_str(normalized)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn new_textarea(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = if lines.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(lines)
    };

    // Tab inserts '\t', and there is no undo history
    textarea.set_hard_tab_indent(true);
    textarea.set_max_histories(0);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
    textarea
}
