// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the toast arbitrator into an Iced window.
//!
//! The `App` owns one [`Manager`] and its [`OverlayHost`]. Every `update`
//! reads the clock once, routes the message, then drains the timer tasks
//! the host queued so Iced can run them. The view stacks the toast overlay
//! above the control panel.

mod draft;
mod message;
mod subscription;
mod view;

pub use draft::Draft;
pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::notifications::{
    Callback, Manager, NotificationSpec, OverlayHost, Phase, Toast,
};
use crate::ui::theming::ThemeMode;
use iced::widget::Stack;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 560.0;
const MIN_WINDOW_WIDTH: f32 = 400.0;
const MIN_WINDOW_HEIGHT: f32 = 420.0;
const APP_TITLE: &str = "Iced Toast";

/// Root application state.
pub struct App {
    manager: Manager<OverlayHost>,
    host: OverlayHost,
    config: Config,
    config_path: Option<PathBuf>,
    theme_mode: ThemeMode,
    draft: Draft,
    now: Instant,
    taps: Arc<AtomicUsize>,
    actions: Arc<AtomicUsize>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("manager", &self.manager)
            .field("host", &self.host)
            .field("config", &self.config)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), None)
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 boots through `Fn`, flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => config::load_from_path(path),
        Some(_) => Ok(Config::default()),
        None => config::load(),
    }
}

impl App {
    fn with_config(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            manager: Manager::with_timing(config.timing()),
            host: OverlayHost::new(),
            theme_mode: config.theme_mode,
            draft: Draft::from_config(&config),
            config,
            config_path,
            now: Instant::now(),
            taps: Arc::new(AtomicUsize::new(0)),
            actions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Initializes application state and optionally shows a startup toast.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, load_error) = match load_config(flags.config_path.as_ref()) {
            Ok(config) => (config, None),
            Err(err) => {
                log::warn!("falling back to default settings: {err}");
                (Config::default(), Some(err))
            }
        };

        let mut app = Self::with_config(config, flags.config_path);
        if let Some(theme) = flags.theme {
            app.theme_mode = theme;
        }
        if let Some(inset) = flags.top_inset {
            app.host.set_top_inset(inset);
        }

        if let Some(err) = load_error {
            app.show(NotificationSpec::error(format!("Settings not loaded: {err}")));
        } else if let Some(message) = flags.message {
            let duration = flags
                .duration_ms
                .map(|ms| std::time::Duration::from_millis(ms.min(config::MAX_DURATION_MS)))
                .unwrap_or_else(|| app.config.default_duration());
            let spec = NotificationSpec::new(message)
                .with_category(flags.category.unwrap_or_default())
                .with_duration(duration)
                .with_progress_bar(app.config.show_progress_bar.unwrap_or(true))
                .with_dismissible(app.config.dismissible.unwrap_or(true));
            app.show(spec);
        }

        let task = app.host.take_tasks().map(Message::Notification);
        (app, task)
    }

    pub fn title(&self) -> String {
        match self.manager.active() {
            Some(notification) => format!("{APP_TITLE} - {}", notification.spec().category()),
            None => APP_TITLE.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::frame_subscription(self.manager.is_animating())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::Notification(message) => {
                self.manager
                    .handle_message(&message, &mut self.host, self.now);
            }
            Message::MessageChanged(value) => self.draft.message = value,
            Message::CategorySelected(category) => self.draft.category = category,
            Message::DurationChanged(value) => self.draft.duration_input = value,
            Message::ProgressBarToggled(value) => self.draft.show_progress_bar = value,
            Message::DismissibleToggled(value) => self.draft.dismissible = value,
            Message::ActionToggled(value) => self.draft.with_action = value,
            Message::TapCallbackToggled(value) => self.draft.with_tap_callback = value,
            Message::Show => {
                let spec = self.spec_from_draft();
                self.show(spec);
            }
            Message::Dismiss => self.manager.dismiss(&mut self.host),
            Message::SaveDefaults => self.save_defaults(),
        }

        self.host.take_tasks().map(Message::Notification)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let panel = view::panel(
            &self.draft,
            view::PanelContext {
                phase: self.manager.phase(),
                taps: self.taps.load(Ordering::Relaxed),
                actions: self.actions.load(Ordering::Relaxed),
            },
        );
        let overlay =
            Toast::view_overlay(&self.manager, &self.host, self.now).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(panel)
            .push(overlay)
            .into()
    }

    /// Phase of the toast on screen, if any.
    #[must_use]
    pub fn toast_phase(&self) -> Option<Phase> {
        self.manager.phase()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn show(&mut self, spec: NotificationSpec) {
        let generation = self.manager.show(spec, &mut self.host, self.now);
        log::debug!("showing toast {generation}");
    }

    fn spec_from_draft(&self) -> NotificationSpec {
        let duration = self
            .draft
            .duration()
            .unwrap_or_else(|| self.config.default_duration());
        let mut spec = NotificationSpec::new(self.draft.message.clone())
            .with_category(self.draft.category)
            .with_duration(duration)
            .with_progress_bar(self.draft.show_progress_bar)
            .with_dismissible(self.draft.dismissible);

        if self.draft.with_action {
            let actions = Arc::clone(&self.actions);
            spec = spec.with_action(
                "Undo",
                Callback::new(move || {
                    let count = actions.fetch_add(1, Ordering::Relaxed) + 1;
                    log::info!("undo pressed ({count} so far)");
                }),
            );
        }
        if self.draft.with_tap_callback {
            let taps = Arc::clone(&self.taps);
            spec = spec.with_on_tap(Callback::new(move || {
                let count = taps.fetch_add(1, Ordering::Relaxed) + 1;
                log::info!("toast tapped ({count} so far)");
            }));
        }
        spec
    }

    fn save_defaults(&mut self) {
        self.draft.apply_to(&mut self.config);
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };

        let spec = match result {
            Ok(()) => NotificationSpec::success("Defaults saved"),
            Err(err) => {
                log::error!("could not save settings: {err}");
                NotificationSpec::error(format!("Could not save settings: {err}"))
            }
        };
        self.show(spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Category, Gesture, NotificationMessage};
    use std::time::Duration;
    use tempfile::tempdir;

    fn flags_with_config(path: PathBuf) -> Flags {
        Flags {
            config_path: Some(path),
            ..Flags::default()
        }
    }

    #[test]
    fn new_without_message_starts_idle() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(flags_with_config(dir.path().join("settings.toml")));
        assert_eq!(app.toast_phase(), None);
        assert_eq!(app.title(), APP_TITLE);
    }

    #[test]
    fn startup_message_is_shown_with_flag_category() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            message: Some("Welcome".into()),
            category: Some(Category::Warning),
            ..flags_with_config(dir.path().join("settings.toml"))
        };
        let (app, _task) = App::new(flags);

        let active = app.manager.active().expect("startup toast");
        assert_eq!(active.spec().message(), "Welcome");
        assert_eq!(active.spec().category(), Category::Warning);
        assert_eq!(app.toast_phase(), Some(Phase::Entering));
        assert!(app.title().contains(Category::Warning.label()));
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "default_duration_ms = \"soon\"").expect("write settings");

        let (app, _task) = App::new(flags_with_config(path));
        assert_eq!(app.config(), &Config::default());
    }

    #[test]
    fn show_replaces_current_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let first = app.manager.generation().expect("first toast");

        let _ = app.update(Message::MessageChanged("Second".into()));
        let _ = app.update(Message::Show);
        let active = app.manager.active().expect("second toast");

        assert_ne!(active.generation(), first);
        assert_eq!(active.spec().message(), "Second");
        assert_eq!(app.host.mounted().map(|m| m.generation), Some(active.generation()));
    }

    #[test]
    fn dismiss_clears_overlay() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let _ = app.update(Message::Dismiss);
        assert_eq!(app.toast_phase(), None);
        assert!(app.host.mounted().is_none());
    }

    #[test]
    fn invalid_duration_uses_configured_default() {
        let mut app = App::default();
        let _ = app.update(Message::DurationChanged("later".into()));
        let _ = app.update(Message::Show);
        let active = app.manager.active().expect("toast shown");
        assert_eq!(active.spec().duration(), app.config().default_duration());
    }

    #[test]
    fn tap_callback_increments_counter_without_dismissing() {
        let mut app = App::default();
        let _ = app.update(Message::TapCallbackToggled(true));
        let _ = app.update(Message::Show);
        let generation = app.manager.generation().expect("toast shown");

        let _ = app.update(Message::Notification(NotificationMessage::Gesture(
            generation,
            Gesture::Tap,
        )));
        assert_eq!(app.taps.load(Ordering::Relaxed), 1);
        assert!(matches!(
            app.toast_phase(),
            Some(Phase::Entering | Phase::Visible)
        ));
    }

    #[test]
    fn action_callback_runs_once_per_press() {
        let mut app = App::default();
        let _ = app.update(Message::ActionToggled(true));
        let _ = app.update(Message::Show);
        let generation = app.manager.generation().expect("toast shown");
        let settled = app.now + Duration::from_secs(1);
        let _ = app.update(Message::Notification(NotificationMessage::Frame(settled)));
        assert_eq!(app.toast_phase(), Some(Phase::Visible));

        let _ = app.update(Message::Notification(NotificationMessage::Gesture(
            generation,
            Gesture::Action,
        )));
        assert_eq!(app.actions.load(Ordering::Relaxed), 1);
        assert_eq!(app.toast_phase(), Some(Phase::Exiting));
    }

    #[test]
    fn view_builds_panel_and_overlay() {
        let mut app = App::default();
        let _ = app.view();

        let _ = app.update(Message::ActionToggled(true));
        let _ = app.update(Message::TapCallbackToggled(true));
        let _ = app.update(Message::Show);
        let _ = app.view();
        assert!(app.draft().with_action && app.draft().with_tap_callback);
    }

    #[test]
    fn stale_timer_message_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let stale = app.manager.generation().expect("first toast");
        let _ = app.update(Message::Show);

        let _ = app.update(Message::Notification(NotificationMessage::TimerElapsed(stale)));
        assert!(app.manager.is_active());
    }

    #[test]
    fn frames_finish_entrance() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let later = app.now + Duration::from_secs(1);

        let _ = app.update(Message::Notification(NotificationMessage::Frame(later)));
        assert_eq!(app.toast_phase(), Some(Phase::Visible));
    }

    #[test]
    fn save_defaults_writes_settings_and_confirms() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");
        let (mut app, _task) = App::new(flags_with_config(path.clone()));

        let _ = app.update(Message::DurationChanged("4200".into()));
        let _ = app.update(Message::DismissibleToggled(false));
        let _ = app.update(Message::SaveDefaults);

        let saved = config::load_from_path(&path).expect("settings written");
        assert_eq!(saved.default_duration_ms, Some(4200));
        assert_eq!(saved.dismissible, Some(false));

        let active = app.manager.active().expect("confirmation toast");
        assert_eq!(active.spec().category(), Category::Success);
    }
}
