// SPDX-License-Identifier: MPL-2.0
//! Editable toast form backing the demo control panel.

use crate::config::{Config, MAX_DURATION_MS};
use crate::ui::notifications::Category;
use std::time::Duration;

const DEFAULT_MESSAGE: &str = "Saved";

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub message: String,
    pub category: Category,
    /// Raw duration field in milliseconds, parsed on use.
    pub duration_input: String,
    pub show_progress_bar: bool,
    pub dismissible: bool,
    pub with_action: bool,
    pub with_tap_callback: bool,
}

impl Draft {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            category: Category::Success,
            duration_input: config.default_duration().as_millis().to_string(),
            show_progress_bar: config.show_progress_bar.unwrap_or(true),
            dismissible: config.dismissible.unwrap_or(true),
            with_action: false,
            with_tap_callback: false,
        }
    }

    /// Parsed duration, `None` while the field doesn't hold a number.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration_input
            .trim()
            .parse::<u64>()
            .ok()
            .map(|ms| Duration::from_millis(ms.min(MAX_DURATION_MS)))
    }

    /// Copies duration and flags into `config` as the new defaults.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(duration) = self.duration() {
            config.default_duration_ms = Some(duration.as_millis() as u64);
        }
        config.show_progress_bar = Some(self.show_progress_bar);
        config.dismissible = Some(self.dismissible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_starts_from_configured_defaults() {
        let config = Config {
            default_duration_ms: Some(5000),
            dismissible: Some(false),
            ..Config::default()
        };
        let draft = Draft::from_config(&config);
        assert_eq!(draft.duration_input, "5000");
        assert!(!draft.dismissible);
        assert!(draft.show_progress_bar);
    }

    #[test]
    fn duration_parses_trimmed_milliseconds_and_clamps() {
        let mut draft = Draft::from_config(&Config::default());
        draft.duration_input = " 1500 ".into();
        assert_eq!(draft.duration(), Some(Duration::from_millis(1500)));

        draft.duration_input = "999999".into();
        assert_eq!(draft.duration(), Some(Duration::from_millis(MAX_DURATION_MS)));

        draft.duration_input = "soon".into();
        assert_eq!(draft.duration(), None);
    }

    #[test]
    fn apply_to_keeps_previous_duration_when_input_is_invalid() {
        let mut config = Config::default();
        let mut draft = Draft::from_config(&config);
        draft.duration_input = "abc".into();
        draft.show_progress_bar = false;

        draft.apply_to(&mut config);
        assert_eq!(config.default_duration_ms, Config::default().default_duration_ms);
        assert_eq!(config.show_progress_bar, Some(false));
    }
}
