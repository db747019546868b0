use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::metrics::{Metrics, format_count};
use crate::theme;

/// Width the app layout reserves for the panel
pub const PANEL_WIDTH: u16 = 30;

const CARD_HEIGHT: u16 = 4;

/// Render the stats column: two character cards and a words/lines box
pub fn render_panel(metrics: &Metrics, frame: &mut Frame, area: Rect) {
    let layout = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    render_card(
        frame,
        layout[0],
        " Characters ",
        metrics.total_chars,
        "(spaces included)",
        theme::stats::TOTAL_BORDER,
    );
    render_card(
        frame,
        layout[1],
        " Characters ",
        metrics.chars_without_spaces,
        "(spaces excluded)",
        theme::stats::NO_SPACES_BORDER,
    );
    render_details(frame, layout[2], metrics);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    value: usize,
    caption: &'static str,
    border: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border));

    let lines = vec![
        Line::from(Span::styled(format_count(value), theme::stats::VALUE)),
        Line::from(Span::styled(
            caption,
            Style::default().fg(theme::stats::CAPTION),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_details(frame: &mut Frame, area: Rect, metrics: &Metrics) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .border_style(Style::default().fg(theme::stats::DETAILS_BORDER));

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        label_value_line("Words", metrics.words, inner_width),
        label_value_line("Lines", metrics.lines, inner_width),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// ` label ....... value ` with the value pushed to the right edge
fn label_value_line(label: &'static str, value: usize, width: usize) -> Line<'static> {
    let value = format_count(value);
    // One space of padding on each side
    let used = label.len() + value.len() + 2;
    let gap = width.saturating_sub(used).max(1);

    Line::from(vec![
        Span::raw(" "),
        Span::styled(label, Style::default().fg(theme::stats::LABEL)),
        Span::raw(" ".repeat(gap)),
        Span::styled(value, theme::stats::VALUE),
        Span::raw(" "),
    ])
}

#[cfg(test)]
#[path = "stats_render_tests.rs"]
mod stats_render_tests;
