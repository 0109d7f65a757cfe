//! Configuration management for depot.
//!
//! Loads configuration from ${DEPOT_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default base URL for the inventory backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Locale settings for date/number/currency rendering.
///
/// The backend's tenants run with a single locale; this is configuration,
/// not a full i18n layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale tag (e.g. "es-AR").
    pub locale: String,
    /// ISO 4217 currency code (e.g. "ARS").
    pub currency: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: "es-AR".to_string(),
            currency: "ARS".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the inventory backend.
    pub base_url: String,

    /// Locale settings.
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: LocaleConfig::default(),
        }
    }
}

impl Config {
    /// Loads the config from ${DEPOT_HOME}/config.toml.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Writes the commented default config template to `path`.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Resolves the effective base URL.
    ///
    /// Resolution order:
    /// 1. `DEPOT_BASE_URL` env var (if set and non-empty)
    /// 2. `base_url` from the config file
    ///
    /// Trailing slashes are trimmed so path building stays uniform.
    pub fn resolved_base_url(&self) -> String {
        if let Ok(url) = std::env::var("DEPOT_BASE_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                return trimmed.trim_end_matches('/').to_string();
            }
        }
        self.base_url.trim_end_matches('/').to_string()
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for depot configuration and data.
    //!
    //! DEPOT_HOME resolution order:
    //! 1. DEPOT_HOME environment variable (if set)
    //! 2. ~/.config/depot (default)

    use std::path::PathBuf;

    /// Returns the depot home directory.
    ///
    /// Checks DEPOT_HOME env var first, falls back to ~/.config/depot
    pub fn depot_home() -> PathBuf {
        if let Ok(home) = std::env::var("DEPOT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("depot"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        depot_home().join("config.toml")
    }

    /// Returns the path to the local key/value store.
    pub fn store_path() -> PathBuf {
        depot_home().join("store.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.locale.locale, "es-AR");
        assert_eq!(config.locale.currency, "ARS");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://inv.example.com/\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://inv.example.com/");
        assert_eq!(config.locale.currency, "ARS");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.locale.locale, "es-AR");
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }

    #[test]
    fn resolved_base_url_trims_trailing_slash() {
        let config = Config {
            base_url: "http://localhost:5000///".to_string(),
            ..Config::default()
        };
        assert_eq!(config.resolved_base_url(), "http://localhost:5000");
    }
}
