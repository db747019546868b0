use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::stats::stats_render::{self, PANEL_WIDTH};

/// Narrowest editor the layout keeps before squeezing the stats panel
const MIN_EDITOR_WIDTH: u16 = 20;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (main_area, help_area) = (layout[0], layout[1]);

        let columns = Layout::horizontal([
            Constraint::Min(MIN_EDITOR_WIDTH),
            Constraint::Length(PANEL_WIDTH),
        ])
        .split(main_area);

        crate::input::input_render::render_field(self, frame, columns[0]);
        stats_render::render_panel(&self.session.metrics(), frame, columns[1]);
        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.session.notification);
    }
}
