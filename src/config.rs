//! Picker configuration.
//!
//! Built once before a session and read-only afterwards.

use std::time::Duration;

use crate::types::Theme;

/// Quiet period after which an ambiguous typed index is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Value returned when the user quits without confirming.
pub const CANCEL_SENTINEL: &str = "quit";

/// Option labels that mark the "do nothing" entry.
pub const CANCEL_LABELS: [&str; 2] = ["Cancel", "Exit"];

#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Debounce interval for typed indices.
    pub debounce: Duration,
    /// Character that quits the picker.
    pub quit_char: char,
    /// Literal option values detected as the cancel entry (first match wins).
    pub cancel_labels: Vec<String>,
    /// Value reported by a cancelled session.
    pub cancel_sentinel: String,
    pub theme: Theme,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            quit_char: 'q',
            cancel_labels: CANCEL_LABELS.iter().map(|s| s.to_string()).collect(),
            cancel_sentinel: CANCEL_SENTINEL.to_string(),
            theme: Theme::default(),
        }
    }
}

impl PickerConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
