//! Settings and configuration utilities.
//!
//! This module reads settings from $HOME/.vergil/settings.json. The file
//! supplies defaults for the helpers (join delimiter, range inclusivity)
//! and a map of environment variable fallbacks.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::convert;
use crate::utils::general::DEFAULT_DELIMITER;

/// Environment variable overriding the join delimiter.
pub const DELIMITER_ENV: &str = "VERGIL_DELIMITER";

/// Environment variable overriding range inclusivity.
pub const INCLUSIVE_ENV: &str = "VERGIL_INCLUSIVE";

/// Settings loaded from $HOME/.vergil/settings.json.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Defaults used when neither a flag nor an environment variable is set.
    #[serde(default)]
    pub defaults: Defaults,
}

/// Built-in defaults for the helpers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    /// Delimiter for joins.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether range checks include their bounds.
    #[serde(default)]
    pub inclusive: bool,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            inclusive: false,
        }
    }
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings = serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".vergil").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }

    /// Resolves the join delimiter.
    pub fn delimiter(&self) -> String {
        self.get_env_var(DELIMITER_ENV)
            .unwrap_or_else(|| self.defaults.delimiter.clone())
    }

    /// Resolves range inclusivity. Fails if the override is not a bool.
    pub fn inclusive(&self) -> Result<bool> {
        match self.get_env_var(INCLUSIVE_ENV) {
            Some(raw) => convert::parse::<bool>(&raw)
                .with_context(|| format!("Invalid value for {INCLUSIVE_ENV}")),
            None => Ok(self.defaults.inclusive),
        }
    }

    /// Returns the defaults after applying environment overrides.
    pub fn resolved(&self) -> Result<Defaults> {
        Ok(Defaults {
            delimiter: self.delimiter(),
            inclusive: self.inclusive()?,
        })
    }
}
