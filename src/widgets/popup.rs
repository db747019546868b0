use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of `width` x `height` anchored `margin` cells in from the top-right
/// corner, shrunk to fit inside the margins
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + margin),
        y: frame_area.y + margin,
        width: width.min(frame_area.width.saturating_sub(margin * 2)),
        height: height.min(frame_area.height.saturating_sub(margin * 2)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
