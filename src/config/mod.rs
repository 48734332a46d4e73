// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.can_tap_to_dismiss = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.can_tap_to_dismiss, Some(true));
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::snackbar::{AnimationDuration, DisplayDuration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub default_duration_secs: Option<f64>,
    #[serde(default)]
    pub can_tap_to_dismiss: Option<bool>,
    #[serde(default)]
    pub enter_animation_ms: Option<u64>,
    #[serde(default)]
    pub exit_animation_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_duration_secs: Some(DEFAULT_SNACKBAR_DURATION_SECS),
            can_tap_to_dismiss: Some(DEFAULT_CAN_TAP_TO_DISMISS),
            enter_animation_ms: Some(DEFAULT_ENTER_ANIMATION_MS),
            exit_animation_ms: Some(DEFAULT_EXIT_ANIMATION_MS),
        }
    }
}

impl Config {
    /// On-screen duration for snackbars that don't pick their own.
    #[must_use]
    pub fn default_duration(&self) -> DisplayDuration {
        DisplayDuration::from_secs_f64(
            self.default_duration_secs
                .unwrap_or(DEFAULT_SNACKBAR_DURATION_SECS),
        )
    }

    #[must_use]
    pub fn enter_animation(&self) -> AnimationDuration {
        AnimationDuration::from_millis(
            self.enter_animation_ms
                .unwrap_or(DEFAULT_ENTER_ANIMATION_MS),
        )
    }

    #[must_use]
    pub fn exit_animation(&self) -> AnimationDuration {
        AnimationDuration::from_millis(self.exit_animation_ms.unwrap_or(DEFAULT_EXIT_ANIMATION_MS))
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

/// Reads a config file. Malformed TOML yields the defaults rather than an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
