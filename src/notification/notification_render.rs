//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;
const HEIGHT: u16 = 3;

/// Render the active notice in the top-right corner of the frame
///
/// Call after everything else so it draws on top. Expired notices are
/// dropped here.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let title = format!(" {} ", notif.title);
    let body = format!(" {} ", notif.description);

    // Borders (2) plus one column of breathing room on each side
    let content_width = title.chars().count().max(body.chars().count()) as u16;
    let notification_width = content_width + 4;

    let notification_area = popup::top_right(frame.area(), notification_width, HEIGHT, MARGIN);

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let style = &notif.style;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(style.fg)
                .bg(style.bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(body, Style::default().fg(style.fg).bg(style.bg)));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
