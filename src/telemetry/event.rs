//! Telemetry event definitions

use serde::Serialize;

pub const TEXT_INPUT: &str = "text_input";
pub const COPY_TEXT: &str = "copy_text";
pub const RESET_TEXT: &str = "reset_text";

pub const DEFAULT_CATEGORY: &str = "engagement";
pub const USER_INTERACTION: &str = "user_interaction";

/// A named analytics event with optional label and value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryEvent {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

impl TelemetryEvent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            label: None,
            value: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[cfg(test)]
    pub fn with_value(mut self, value: u64) -> Self {
        self.value = Some(value);
        self
    }

    /// Input size event, bucketed so every size above `threshold` shares a label
    pub fn text_input(char_count: usize, threshold: usize) -> Self {
        Self::new(TEXT_INPUT)
            .with_category(USER_INTERACTION)
            .with_label(input_size_label(char_count, threshold))
    }

    pub fn copy_text() -> Self {
        Self::new(COPY_TEXT).with_category(USER_INTERACTION)
    }

    pub fn reset_text() -> Self {
        Self::new(RESET_TEXT).with_category(USER_INTERACTION)
    }
}

/// `chars_<n>` up to the threshold, `chars_<threshold>+` past it
pub fn input_size_label(char_count: usize, threshold: usize) -> String {
    if char_count > threshold {
        format!("chars_{}+", threshold)
    } else {
        format!("chars_{}", char_count)
    }
}
