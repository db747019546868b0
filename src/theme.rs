//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` and never hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Text editor pane
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const TITLE: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;
}

/// Stats panel cards
pub mod stats {
    use super::*;

    pub const TOTAL_BORDER: Color = palette::PINK;
    pub const NO_SPACES_BORDER: Color = palette::PURPLE;
    pub const DETAILS_BORDER: Color = palette::TEXT_MUTED;

    pub const VALUE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const CAPTION: Color = palette::TEXT_MUTED;
    pub const LABEL: Color = palette::TEXT_MUTED;
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: palette::RED,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    /// Actions that have nothing to act on
    pub const DISABLED: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .add_modifier(Modifier::DIM);
}
