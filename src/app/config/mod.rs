// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[contact]` - Mail backend used by the contact form
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ALOK_SITE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use alok_site::app::config::{self, ContactBackend};
//!
//! let (mut config, _warning) = config::load();
//! config.contact.backend = ContactBackend::Resend;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "nb-NO", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Which adapter delivers contact form submissions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactBackend {
    /// Waits, logs the payload, and reports success.
    #[default]
    Simulated,
    /// Sends an e-mail through the Resend API.
    Resend,
}

/// Contact form delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    #[serde(default)]
    pub backend: ContactBackend,

    /// Delay of the simulated backend in milliseconds.
    #[serde(
        default = "default_simulated_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_delay_ms: Option<u64>,

    /// Address that receives the requests.
    #[serde(default = "default_recipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Sender address shown on delivered mails.
    #[serde(default = "default_sender", skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Name of the environment variable that holds the API key.
    #[serde(default = "default_api_key_env", skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            backend: ContactBackend::default(),
            simulated_delay_ms: default_simulated_delay_ms(),
            recipient: default_recipient(),
            sender: default_sender(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl ContactConfig {
    /// Simulated delay, capped at [`MAX_SIMULATED_DELAY_MS`].
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        let ms = self
            .simulated_delay_ms
            .unwrap_or(DEFAULT_SIMULATED_DELAY_MS)
            .min(MAX_SIMULATED_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or(DEFAULT_RECIPIENT)
    }

    #[must_use]
    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(DEFAULT_SENDER)
    }

    #[must_use]
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Serde Default Functions
// =============================================================================

fn default_simulated_delay_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_DELAY_MS)
}

fn default_recipient() -> Option<String> {
    Some(DEFAULT_RECIPIENT.to_string())
}

fn default_sender() -> Option<String> {
    Some(DEFAULT_SENDER.to_string())
}

fn default_api_key_env() -> Option<String> {
    Some(DEFAULT_API_KEY_ENV.to_string())
}

// =============================================================================
// Path Functions
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
/// default config with the i18n key of a warning to show the user.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            contact: ContactConfig {
                backend: ContactBackend::Resend,
                simulated_delay_ms: Some(10),
                recipient: Some("test@alok.no".to_string()),
                sender: Some(DEFAULT_SENDER.to_string()),
                api_key_env: Some("ALOK_TEST_KEY".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
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
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"nb-NO\"\n").expect("write file");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("nb-NO"));
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn backend_parses_kebab_case() {
        let config: Config =
            toml::from_str("[contact]\nbackend = \"resend\"\n").expect("valid toml");
        assert_eq!(config.contact.backend, ContactBackend::Resend);
        assert_eq!(config.contact.recipient(), DEFAULT_RECIPIENT);
    }

    #[test]
    fn simulated_delay_is_capped() {
        let contact = ContactConfig {
            simulated_delay_ms: Some(u64::MAX),
            ..ContactConfig::default()
        };
        assert_eq!(
            contact.simulated_delay(),
            Duration::from_millis(MAX_SIMULATED_DELAY_MS)
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("config");

        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&Config::default(), &config_path).expect("save should succeed");

        let content = fs::read_to_string(&config_path).expect("read back");
        assert!(content.contains("[contact]"));
        assert!(content.contains("backend = \"simulated\""));
    }
}
