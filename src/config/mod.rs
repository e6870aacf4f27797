//! Configuration management

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Location opened when no `--url` is given
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// Event poll interval in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Show the tooltip while hovering the trigger
    #[serde(default = "default_show_tooltip")]
    pub show_tooltip: bool,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_start_url() -> String {
    "http://localhost:3000/".to_string()
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_show_tooltip() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            poll_interval_ms: default_poll_interval(),
            show_tooltip: default_show_tooltip(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.keys.merge_defaults();
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agent-selector")
            .join("config.json")
    }

    /// Parse [`Self::start_url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured start URL is not an absolute URL
    pub fn start_url(&self) -> Result<Url> {
        Url::parse(&self.start_url)
            .with_context(|| format!("Invalid start_url in config: {:?}", self.start_url))
    }
}
