// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! toast preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.default_duration_ms, Some(5000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::Timing;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display time applied to notifications that don't set their own.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub show_progress_bar: Option<bool>,
    #[serde(default)]
    pub dismissible: Option<bool>,
    #[serde(default)]
    pub entrance_ms: Option<u64>,
    #[serde(default)]
    pub settle_margin_ms: Option<u64>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            show_progress_bar: Some(true),
            dismissible: Some(true),
            entrance_ms: Some(ENTRANCE_DURATION_MS),
            settle_margin_ms: Some(SETTLE_MARGIN_MS),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl Config {
    /// Display duration for new notifications, clamped to `MAX_DURATION_MS`.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        let ms = self
            .default_duration_ms
            .unwrap_or(DEFAULT_DURATION_MS)
            .min(MAX_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Animation timing for the arbitrator.
    ///
    /// The settle margin is kept strictly longer than the entrance so the
    /// safety-net timer cannot fire while an exit is still animating.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let entrance_ms = self
            .entrance_ms
            .unwrap_or(ENTRANCE_DURATION_MS)
            .clamp(MIN_ENTRANCE_DURATION_MS, MAX_ENTRANCE_DURATION_MS);
        let settle_ms = self
            .settle_margin_ms
            .unwrap_or(SETTLE_MARGIN_MS)
            .max(entrance_ms + FRAME_INTERVAL_MS);

        Timing {
            entrance: Duration::from_millis(entrance_ms),
            settle_margin: Duration::from_millis(settle_ms),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid settings at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            default_duration_ms: Some(4500),
            show_progress_bar: Some(false),
            dismissible: Some(false),
            entrance_ms: Some(300),
            settle_margin_ms: Some(800),
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_missing_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "default_duration_ms = 0\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_duration(), Duration::ZERO);
        assert!(loaded.show_progress_bar.is_none());
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn default_duration_is_clamped() {
        let config = Config {
            default_duration_ms: Some(MAX_DURATION_MS * 10),
            ..Config::default()
        };
        assert_eq!(
            config.default_duration(),
            Duration::from_millis(MAX_DURATION_MS)
        );
    }

    #[test]
    fn timing_keeps_settle_margin_past_entrance() {
        let config = Config {
            entrance_ms: Some(1500),
            settle_margin_ms: Some(100),
            ..Config::default()
        };
        let timing = config.timing();
        assert_eq!(timing.entrance, Duration::from_millis(1500));
        assert!(timing.settle_margin > timing.entrance);
    }

    #[test]
    fn default_timing_matches_constants() {
        let timing = Config::default().timing();
        assert_eq!(timing.entrance, Duration::from_millis(ENTRANCE_DURATION_MS));
        assert_eq!(timing.settle_margin, Duration::from_millis(SETTLE_MARGIN_MS));
    }
}
