//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with automatic load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazystake/config.json`
//! - macOS: `~/Library/Application Support/lazystake/config.json`
//! - Windows: `%APPDATA%/lazystake/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
pub const APP_NAME: &str = "lazystake";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Log file name, next to the configuration file.
const LOG_FILE: &str = "lazystake.log";

/// Default tracing filter when neither the environment nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// # Fields
///
/// * `explorer` - Name of the explorer to open links in, when the currency has it
/// * `claim_context_default` - Open `select` in the claim-rewards flow by default
/// * `last_snapshot` - Snapshot opened most recently, reused when none is given
/// * `log_filter` - Tracing filter directive (e.g. `lazystake=debug`)
/// * `open_links` - Whether explorer links are opened in the browser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Preferred explorer name.
    #[serde(default)]
    pub explorer: Option<String>,
    /// Whether `select` starts in the claim-rewards flow.
    #[serde(default)]
    pub claim_context_default: bool,
    /// Snapshot opened most recently.
    #[serde(default)]
    pub last_snapshot: Option<PathBuf>,
    /// Tracing filter directive.
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Whether explorer links are opened in the browser.
    #[serde(default = "default_open_links")]
    pub open_links: bool,
}

const fn default_open_links() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            explorer: None,
            claim_context_default: false,
            last_snapshot: None,
            log_filter: None,
            open_links: true,
        }
    }
}

impl AppConfig {
    /// Returns the configuration directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_dir() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory is unavailable.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the path of the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory is unavailable.
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(LOG_FILE))
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The configuration cannot be serialized
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Tracing filter to use: `env_filter` first, then the config, then the default.
    #[must_use]
    pub fn effective_log_filter(&self, env_filter: Option<String>) -> String {
        env_filter
            .filter(|f| !f.trim().is_empty())
            .or_else(|| self.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.explorer.is_none());
        assert!(!config.claim_context_default);
        assert!(config.last_snapshot.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.open_links);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = AppConfig {
            explorer: Some("Solscan".to_string()),
            claim_context_default: true,
            last_snapshot: Some(PathBuf::from("/tmp/delegate.json")),
            log_filter: Some("lazystake=debug".to_string()),
            open_links: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized = AppConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_effective_log_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.effective_log_filter(None), DEFAULT_LOG_FILTER);

        config.log_filter = Some("info".to_string());
        assert_eq!(config.effective_log_filter(None), "info");
        assert_eq!(config.effective_log_filter(Some("  ".to_string())), "info");
        assert_eq!(
            config.effective_log_filter(Some("lazystake=trace".to_string())),
            "lazystake=trace"
        );
    }
}
