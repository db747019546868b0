//! Notification state management
//!
//! Holds the single transient notice shown in the top-right corner.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Notice severity - determines style and how long it stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Confirmations like "Copied"
    #[default]
    Info,
    /// Problems the user can fix, like an invalid config file
    Warning,
    /// Failed actions
    Error,
}

impl Severity {
    fn duration(self) -> Duration {
        match self {
            Severity::Info => Duration::from_millis(1500),
            Severity::Warning => Duration::from_secs(10),
            Severity::Error => Duration::from_secs(5),
        }
    }

    fn style(self) -> NotificationStyle {
        let colors = match self {
            Severity::Info => &theme::notification::INFO,
            Severity::Warning => &theme::notification::WARNING,
            Severity::Error => &theme::notification::ERROR,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Severity::Info.style()
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub style: NotificationStyle,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            style: severity.style(),
            created_at: Instant::now(),
            duration: severity.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing with a new notice
    pub fn show(&mut self, title: &str, description: &str, severity: Severity) {
        #[cfg(debug_assertions)]
        log::debug!("Notification [{:?}] {}: {}", severity, title, description);

        self.current = Some(Notification::new(title, description, severity));
    }

    pub fn show_info(&mut self, title: &str, description: &str) {
        self.show(title, description, Severity::Info);
    }

    pub fn show_warning(&mut self, title: &str, description: &str) {
        self.show(title, description, Severity::Warning);
    }

    pub fn show_error(&mut self, title: &str, description: &str) {
        self.show(title, description, Severity::Error);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub fn current_title(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.title.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
