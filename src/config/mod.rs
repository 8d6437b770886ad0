//
//  jenkins-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module manages the `jk` configuration file: which Jenkins server to
//! talk to and the credentials to use. Settings are stored as TOML in the
//! platform-specific configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/jk/config.toml`
//! - **macOS**: `~/Library/Application Support/jk/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\jk\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [server]
//! url = "https://ci.example.com"
//! user = "deploy-bot"
//! token = "11a2b3c4d5e6f7"
//! timeout_secs = 30
//! ```
//!
//! Command-line flags and the `JENKINS_URL`, `JENKINS_USER` and
//! `JENKINS_TOKEN` environment variables take precedence over the file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jenkins_cli::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("server.url", "https://ci.example.com")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["server.url", "server.user", "server.token", "server.timeout_secs"];

/// Configuration container for the `jk` CLI.
///
/// # Examples
///
/// ```rust
/// use jenkins_cli::config::Config;
///
/// let config = Config::default();
/// assert!(config.server.url.is_none());
/// assert_eq!(config.get("server.url"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// The Jenkins server and the account used against it.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server address and credentials.
///
/// All fields are optional; a missing user and token means anonymous
/// read-only access.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the server, such as `https://ci.example.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Account name used for Basic authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// API token of `user`, generated from the user's configuration page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value by key.
    ///
    /// # Returns
    ///
    /// `None` if the key is unknown or not set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jenkins_cli::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.server.timeout_secs = Some(30);
    /// assert_eq!(config.get("server.timeout_secs"), Some("30".to_string()));
    /// assert_eq!(config.get("server.user"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server.url" => self.server.url.clone(),
            "server.user" => self.server.user.clone(),
            "server.token" => self.server.token.clone(),
            "server.timeout_secs" => self.server.timeout_secs.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// Changes are only persisted when [`Config::save`] is called.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key, or when `server.timeout_secs` is not a
    /// whole number of seconds.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match key {
            "server.url" => {
                url::Url::parse(&value).with_context(|| format!("'{value}' is not an absolute URL"))?;
                self.server.url = Some(value);
            }
            "server.user" => self.server.user = Some(value),
            "server.token" => self.server.token = Some(value),
            "server.timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .with_context(|| format!("'{value}' is not a number of seconds"))?;
                self.server.timeout_secs = Some(secs);
            }
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Clears a configuration value. Returns `false` for an unknown key.
    pub fn unset(&mut self, key: &str) -> bool {
        match key {
            "server.url" => self.server.url = None,
            "server.user" => self.server.user = None,
            "server.token" => self.server.token = None,
            "server.timeout_secs" => self.server.timeout_secs = None,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("server.url", "https://ci.example.com").unwrap();
        config.set("server.user", "alice").unwrap();
        config.set("server.timeout_secs", "45").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("server.timeout_secs"), Some("45".to_string()));
        assert_eq!(loaded.get("server.token"), None);
    }

    #[test]
    fn test_parses_hand_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nurl = \"http://localhost:8080\"\ntoken = \"abc\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.server.token.as_deref(), Some("abc"));
        assert!(config.server.user.is_none());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nurl = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_validates() {
        let mut config = Config::default();
        assert!(config.set("server.timeout_secs", "soon").is_err());
        assert!(config.set("server.url", "ci.example.com").is_err());
        assert!(config.set("editor", "vim").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unset() {
        let mut config = Config::default();
        config.set("server.user", "alice").unwrap();
        assert!(config.unset("server.user"));
        assert!(!config.unset("server.editor"));
        assert_eq!(config.get("server.user"), None);
    }
}
