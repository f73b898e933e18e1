// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Category};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frames, timers and gestures for the toast overlay.
    Notification(notifications::NotificationMessage),
    MessageChanged(String),
    CategorySelected(Category),
    DurationChanged(String),
    ProgressBarToggled(bool),
    DismissibleToggled(bool),
    ActionToggled(bool),
    TapCallbackToggled(bool),
    /// Show a toast built from the draft, replacing the current one.
    Show,
    /// Remove the current toast immediately.
    Dismiss,
    /// Persist the draft's duration and flags as the new defaults.
    SaveDefaults,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Toast to show as soon as the window opens.
    pub message: Option<String>,
    pub category: Option<Category>,
    /// Display time of the startup toast, overriding the configured default.
    pub duration_ms: Option<u64>,
    /// Optional settings file overriding the platform config directory.
    pub config_path: Option<PathBuf>,
    /// Theme override; takes precedence over the configured mode.
    pub theme: Option<ThemeMode>,
    /// Space reserved at the top of the window before the toast.
    pub top_inset: Option<f32>,
}
