use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

/// A key hint and whether its action can run right now
struct Hint {
    key: &'static str,
    desc: &'static str,
    enabled: bool,
}

macro_rules! hints {
    ($($key:literal => $desc:literal if $enabled:expr),+ $(,)?) => {
        vec![$(Hint { key: $key, desc: $desc, enabled: $enabled }),+]
    };
}

fn get_context_hints(app: &App) -> Vec<Hint> {
    let has_text = !app.session.is_empty();
    let has_notice = app.session.notification.is_visible();

    let mut hints = hints![
        "Ctrl+Y" => "Copy" if has_text,
        "Ctrl+R" => "Reset" if has_text,
        "Ctrl+C" => "Quit" if true,
    ];
    if has_notice {
        hints.push(Hint {
            key: "Esc",
            desc: "Dismiss",
            enabled: true,
        });
    }
    hints
}

fn build_styled_spans(hints: &[Hint]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        let (key, desc) = if hint.enabled {
            (key_style, desc_style)
        } else {
            (theme::help_line::DISABLED, theme::help_line::DISABLED)
        };
        spans.push(Span::styled(hint.key, key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(hint.desc, desc));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
