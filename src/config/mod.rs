// SPDX-License-Identifier: MPL-2.0
//! This module handles the dashboard's configuration, loading and saving
//! settings to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Mount target of the root view
//! - `[i18n]` - Default locale, preference key, missing-key policy, overrides
//! - `[log]` - Tracing filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `OG_DASHBOARD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use og_dashboard::config::{self, MissingKeyMode};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Render missing translations as a visible placeholder
//! config.i18n.missing_key = MissingKeyMode::Placeholder;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::i18n::{BootstrapOptions, LocaleTag, MissingKeyPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// How a lookup renders a key missing from the active dictionary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MissingKeyMode {
    #[default]
    Key,
    Placeholder,
    DefaultLocale,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Presentation target passed to the host on mount.
    #[serde(default = "default_mount_target")]
    pub mount_target: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mount_target: default_mount_target(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Locale used when the stored preference is absent or unusable.
    #[serde(default = "default_locale")]
    pub default_locale: LocaleTag,

    /// Preference store key holding the user's language.
    #[serde(default = "default_preference_key")]
    pub preference_key: String,

    #[serde(default)]
    pub missing_key: MissingKeyMode,

    /// Template for [`MissingKeyMode::Placeholder`]; `{key}` is substituted.
    #[serde(default = "default_missing_placeholder")]
    pub missing_placeholder: String,

    /// Per-locale message overrides, keyed by locale tag then translation key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            preference_key: default_preference_key(),
            missing_key: MissingKeyMode::default(),
            missing_placeholder: default_missing_placeholder(),
            overrides: BTreeMap::new(),
        }
    }
}

impl I18nConfig {
    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        match self.missing_key {
            MissingKeyMode::Key => MissingKeyPolicy::Key,
            MissingKeyMode::Placeholder => {
                MissingKeyPolicy::Placeholder(self.missing_placeholder.clone())
            }
            MissingKeyMode::DefaultLocale => MissingKeyPolicy::DefaultLocale,
        }
    }

    pub fn bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            preference_key: self.preference_key.clone(),
            default_locale: self.default_locale,
            missing_key: self.missing_key_policy(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub log: LogConfig,
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns defaults plus a notification key when the file exists but
/// cannot be read or parsed.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notifications.config-parse-error".to_string()),
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

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.mount_target = "#dashboard".into();
        config.i18n.default_locale = LocaleTag::ZhHant;
        config.i18n.missing_key = MissingKeyMode::DefaultLocale;
        config.i18n.overrides.insert(
            "zh-Hans".into(),
            BTreeMap::from([("buttons.submit".to_string(), "确定".to_string())]),
        );
        config.log.filter = "debug".into();

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[i18n]\nmissing_key = \"placeholder\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.i18n.preference_key, "LOCALE");
        assert_eq!(
            loaded.i18n.missing_key_policy(),
            MissingKeyPolicy::Placeholder("MISSING: {key}".into())
        );
    }

    #[test]
    fn default_locale_is_canonicalized() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[i18n]\ndefault_locale = \"zh-hant\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.i18n.default_locale, LocaleTag::ZhHant);
    }

    #[test]
    fn unknown_default_locale_is_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[i18n]\ndefault_locale = \"fr-FR\"\n").expect("write");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notifications.config-parse-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn bootstrap_options_follow_i18n_section() {
        let mut section = I18nConfig::default();
        section.preference_key = "lang".into();
        section.default_locale = LocaleTag::ZhHans;
        let options = section.bootstrap_options();
        assert_eq!(options.preference_key, "lang");
        assert_eq!(options.default_locale, LocaleTag::ZhHans);
        assert_eq!(options.missing_key, MissingKeyPolicy::Key);
    }
}
