use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;
use crate::theme;

/// Draw the editor pane and return the area it occupies
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(" Text ", theme::input::TITLE)))
        .border_style(Style::default().fg(theme::input::BORDER));

    app.input.textarea.set_block(block);
    app.input
        .textarea
        .set_style(Style::default().fg(theme::input::TEXT));

    frame.render_widget(&app.input.textarea, area);
    area
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
