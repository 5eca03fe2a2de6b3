// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[timeline]` - Delays between the popup's state transitions
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_POPUP_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_popup::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the countdown down
//! config.timeline.timer_duration_ms = Some(8000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::TimelineConfig;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Delays between popup transitions, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineSection {
    #[serde(default = "default_appear_delay_ms", skip_serializing_if = "Option::is_none")]
    pub appear_delay_ms: Option<u64>,

    #[serde(default = "default_expand_delay_ms", skip_serializing_if = "Option::is_none")]
    pub expand_delay_ms: Option<u64>,

    #[serde(
        default = "default_timer_start_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub timer_start_delay_ms: Option<u64>,

    #[serde(
        default = "default_timer_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub timer_duration_ms: Option<u64>,

    #[serde(
        default = "default_collapse_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub collapse_delay_ms: Option<u64>,
}

impl Default for TimelineSection {
    fn default() -> Self {
        Self {
            appear_delay_ms: default_appear_delay_ms(),
            expand_delay_ms: default_expand_delay_ms(),
            timer_start_delay_ms: default_timer_start_delay_ms(),
            timer_duration_ms: default_timer_duration_ms(),
            collapse_delay_ms: default_collapse_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timeline: TimelineSection,
}

impl Config {
    /// Resolves the `[timeline]` section, falling back to defaults for unset
    /// values and clamping each delay to `MIN_DELAY_MS..=MAX_DELAY_MS`.
    #[must_use]
    pub fn timeline_config(&self) -> TimelineConfig {
        let section = &self.timeline;
        let resolve = |value: Option<u64>, default: u64| clamp_delay(value.unwrap_or(default));

        TimelineConfig {
            appear_delay_ms: resolve(section.appear_delay_ms, DEFAULT_APPEAR_DELAY_MS),
            expand_delay_ms: resolve(section.expand_delay_ms, DEFAULT_EXPAND_DELAY_MS),
            timer_start_delay_ms: resolve(
                section.timer_start_delay_ms,
                DEFAULT_TIMER_START_DELAY_MS,
            ),
            timer_duration_ms: resolve(section.timer_duration_ms, DEFAULT_TIMER_DURATION_MS),
            collapse_delay_ms: resolve(section.collapse_delay_ms, DEFAULT_COLLAPSE_DELAY_MS),
        }
    }
}

/// Keeps a configured delay inside `MIN_DELAY_MS..=MAX_DELAY_MS`.
fn clamp_delay(value: u64) -> u64 {
    value.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_appear_delay_ms() -> Option<u64> {
    Some(DEFAULT_APPEAR_DELAY_MS)
}

fn default_expand_delay_ms() -> Option<u64> {
    Some(DEFAULT_EXPAND_DELAY_MS)
}

fn default_timer_start_delay_ms() -> Option<u64> {
    Some(DEFAULT_TIMER_START_DELAY_MS)
}

fn default_timer_duration_ms() -> Option<u64> {
    Some(DEFAULT_TIMER_DURATION_MS)
}

fn default_collapse_delay_ms() -> Option<u64> {
    Some(DEFAULT_COLLAPSE_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_resolves_to_default_timeline() {
        assert_eq!(Config::default().timeline_config(), TimelineConfig::default());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            timeline: TimelineSection {
                timer_duration_ms: Some(6000),
                ..TimelineSection::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.timeline_config().timer_duration_ms, 6000);
    }

    #[test]
    fn partial_timeline_section_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[timeline]\nexpand_delay_ms = 50\n")
            .expect("failed to write config");

        let timeline = load_from_path(&config_path)
            .expect("failed to load config")
            .timeline_config();

        assert_eq!(timeline.expand_delay_ms, 50);
        assert_eq!(timeline.appear_delay_ms, DEFAULT_APPEAR_DELAY_MS);
        assert_eq!(timeline.timer_duration_ms, DEFAULT_TIMER_DURATION_MS);
    }

    #[test]
    fn oversized_delays_are_clamped() {
        let config = Config {
            timeline: TimelineSection {
                timer_duration_ms: Some(MAX_DELAY_MS * 10),
                ..TimelineSection::default()
            },
            ..Config::default()
        };
        assert_eq!(config.timeline_config().timer_duration_ms, MAX_DELAY_MS);
    }

    #[test]
    fn theme_mode_parses_lowercase_names() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n")
            .expect("failed to parse config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timeline\nbroken")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("portable");
        let mut config = Config::default();
        config.timeline.appear_delay_ms = Some(250);

        save_with_override(&config, Some(base.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.timeline.appear_delay_ms, Some(250));
    }
}
