// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Every field is optional in the file; missing or malformed content falls
//! back to the defaults in [`defaults`] so a damaged settings file degrades
//! to stock behavior instead of an error dialog.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::slider::SliderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LayerSlider";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub autoplay_delay_ms: Option<u64>,
    #[serde(default)]
    pub animation_duration_ms: Option<u64>,
    #[serde(default)]
    pub pause_on_hover: Option<bool>,
    #[serde(default)]
    pub keyboard: Option<bool>,
    #[serde(default)]
    pub swipe: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            autoplay: Some(DEFAULT_AUTOPLAY),
            autoplay_delay_ms: Some(DEFAULT_AUTOPLAY_DELAY_MS),
            animation_duration_ms: Some(DEFAULT_ANIMATION_DURATION_MS),
            pause_on_hover: Some(DEFAULT_PAUSE_ON_HOVER),
            keyboard: Some(DEFAULT_KEYBOARD),
            swipe: Some(DEFAULT_SWIPE),
        }
    }
}

impl Config {
    /// Resolves the stored preferences into the options consumed by the
    /// slider, clamping durations to their supported ranges. A stored
    /// autoplay delay of 0 is kept as-is; it disables autoplay.
    pub fn slider_options(&self) -> SliderOptions {
        let delay_ms = self
            .autoplay_delay_ms
            .unwrap_or(DEFAULT_AUTOPLAY_DELAY_MS)
            .min(MAX_AUTOPLAY_DELAY_MS);
        let animation_ms = self
            .animation_duration_ms
            .unwrap_or(DEFAULT_ANIMATION_DURATION_MS)
            .clamp(1, MAX_ANIMATION_DURATION_MS);

        SliderOptions {
            autoplay: self.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            autoplay_delay: Duration::from_millis(delay_ms),
            animation_duration: Duration::from_millis(animation_ms),
            pause_on_hover: self.pause_on_hover.unwrap_or(DEFAULT_PAUSE_ON_HOVER),
            keyboard: self.keyboard.unwrap_or(DEFAULT_KEYBOARD),
            swipe: self.swipe.unwrap_or(DEFAULT_SWIPE),
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
