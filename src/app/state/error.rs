use crate::app::keymap::KeyMap;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: ErrorSeverity) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
            suggestions: Vec::new(),
        }
    }

    /// Fills in recovery hints, naming keys as currently bound.
    #[must_use]
    pub fn with_suggestions(mut self, keymap: &KeyMap) -> Self {
        self.suggestions = crate::app::recovery::get_suggestions(&self.message, keymap);
        self
    }
}
