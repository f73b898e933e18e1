// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable [`NotificationSpec`] handed to the
//! arbitrator on every `show` call, along with the [`Category`] enum and the
//! [`Generation`] counter used to tell a live notification from a replaced one.

use crate::config::DEFAULT_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::widget::{image, svg};
use iced::Color;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Identity of one `show` call.
///
/// Generations increase monotonically; timer and gesture deliveries carry the
/// generation they were created for and are dropped when it no longer matches
/// the notification on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Returns the generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category selects the accent color and default icon. It has no
/// behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Category {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something needs attention but nothing failed (orange).
    Warning,
    /// Operation failed (red).
    Error,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Info,
        Category::Success,
        Category::Warning,
        Category::Error,
    ];

    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Info => palette::INFO_500,
            Category::Warning => palette::WARNING_500,
            Category::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Category::Info),
            "success" => Ok(Category::Success),
            "warning" | "warn" => Ok(Category::Warning),
            "error" => Ok(Category::Error),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Zero-argument user callback.
///
/// Panics raised by the callback are not caught; they propagate to the
/// host like any other panic on the UI thread.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Icon override replacing the category glyph.
#[derive(Debug, Clone)]
pub enum Icon {
    Svg(svg::Handle),
    Image(image::Handle),
}

/// Everything needed to display one notification.
///
/// A spec is fully determined when built and never changes afterwards; the
/// builder methods consume `self` and return the updated value.
#[derive(Debug, Clone)]
pub struct NotificationSpec {
    message: String,
    category: Category,
    duration: Duration,
    show_progress_bar: bool,
    dismissible: bool,
    action_label: Option<String>,
    on_tap: Option<Callback>,
    on_action_pressed: Option<Callback>,
    icon: Option<Icon>,
}

impl NotificationSpec {
    /// Creates an info notification with the default duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: Category::default(),
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            show_progress_bar: true,
            dismissible: true,
            action_label: None,
            on_tap: None,
            on_action_pressed: None,
            icon: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Error)
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets how long the notification stays before dismissing itself.
    /// `Duration::ZERO` keeps it until dismissed explicitly.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_progress_bar(mut self, show: bool) -> Self {
        self.show_progress_bar = show;
        self
    }

    /// Controls whether taps, swipes and the close button may dismiss the
    /// notification. Timers and explicit `dismiss` calls are not affected.
    #[must_use]
    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, on_pressed: Callback) -> Self {
        self.action_label = Some(label.into());
        self.on_action_pressed = Some(on_pressed);
        self
    }

    /// Replaces the default dismiss-on-tap behavior.
    #[must_use]
    pub fn with_on_tap(mut self, callback: Callback) -> Self {
        self.on_tap = Some(callback);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether the notification dismisses itself.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Returns whether a countdown bar is drawn. Requires a non-zero duration.
    #[must_use]
    pub fn has_progress_bar(&self) -> bool {
        self.show_progress_bar && self.auto_dismisses()
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action_label.as_deref()
    }

    #[must_use]
    pub fn tap_callback(&self) -> Option<&Callback> {
        self.on_tap.as_ref()
    }

    #[must_use]
    pub fn action_callback(&self) -> Option<&Callback> {
        self.on_action_pressed.as_ref()
    }

    #[must_use]
    pub fn icon_override(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }
}
