// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The intro-seen flag lives here on purpose: the intro widget itself holds no
//! global state, and the application shell injects the decision at boot.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scale change per mouse wheel notch.
    #[serde(default)]
    pub zoom_step: Option<f32>,
    /// Upper scale bound for the lightbox.
    #[serde(default)]
    pub max_scale: Option<f32>,
    /// Whether the intro reveal should play at all.
    #[serde(default)]
    pub show_intro: Option<bool>,
    /// Set once the intro has played; read once at boot.
    #[serde(default)]
    pub intro_seen: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_step: Some(WHEEL_ZOOM_STEP),
            max_scale: Some(MAX_SCALE),
            show_intro: Some(true),
            intro_seen: Some(false),
        }
    }
}

impl Config {
    /// Returns the wheel zoom step, clamped to the supported range.
    #[must_use]
    pub fn effective_zoom_step(&self) -> f32 {
        self.zoom_step
            .unwrap_or(WHEEL_ZOOM_STEP)
            .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
    }

    /// Returns the maximum scale, clamped to the supported range.
    #[must_use]
    pub fn effective_max_scale(&self) -> f32 {
        self.max_scale.unwrap_or(MAX_SCALE).clamp(MIN_SCALE, MAX_SCALE)
    }

    /// Whether the intro reveal should play this launch.
    #[must_use]
    pub fn intro_pending(&self) -> bool {
        self.show_intro.unwrap_or(true) && !self.intro_seen.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an optional directory override.
fn resolve_config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    }
}

pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = resolve_config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = resolve_config_path(dir_override) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            zoom_step: Some(0.2),
            max_scale: Some(4.0),
            show_intro: Some(false),
            intro_seen: Some(true),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.zoom_step, config.zoom_step);
        assert_eq!(loaded.max_scale, config.max_scale);
        assert_eq!(loaded.show_intro, config.show_intro);
        assert_eq!(loaded.intro_seen, config.intro_seen);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.zoom_step, Some(WHEEL_ZOOM_STEP));
    }

    #[test]
    fn load_with_dir_override_reads_from_that_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            zoom_step: Some(0.5),
            ..Config::default()
        };
        save(&config, Some(temp_dir.path())).expect("failed to save config");

        let loaded = load(Some(temp_dir.path())).expect("failed to load config");
        assert_eq!(loaded.zoom_step, Some(0.5));
    }

    #[test]
    fn effective_zoom_step_clamps_out_of_range_values() {
        let config = Config {
            zoom_step: Some(100.0),
            ..Config::default()
        };
        assert_eq!(config.effective_zoom_step(), MAX_ZOOM_STEP);

        let config = Config {
            zoom_step: Some(-1.0),
            ..Config::default()
        };
        assert_eq!(config.effective_zoom_step(), MIN_ZOOM_STEP);
    }

    #[test]
    fn effective_max_scale_clamps_to_supported_range() {
        let config = Config {
            max_scale: Some(50.0),
            ..Config::default()
        };
        assert_eq!(config.effective_max_scale(), MAX_SCALE);
    }

    #[test]
    fn intro_pending_honors_both_flags() {
        assert!(Config::default().intro_pending());

        let seen = Config {
            intro_seen: Some(true),
            ..Config::default()
        };
        assert!(!seen.intro_pending());

        let disabled = Config {
            show_intro: Some(false),
            ..Config::default()
        };
        assert!(!disabled.intro_pending());
    }
}
