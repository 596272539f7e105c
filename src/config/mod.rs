//! Configuration management for `lanes`.
//!
//! Configuration is loaded from `<workspace>/config.yaml` with support for:
//! - Built-in defaults for missing files or keys
//! - Environment variable overrides (`LANES_LANE_PREFIX`, `LANES_NOTE_PREFIX`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE: &str = "config.yaml";

const LANE_PREFIX_ENV: &str = "LANES_LANE_PREFIX";
const NOTE_PREFIX_ENV: &str = "LANES_NOTE_PREFIX";

/// Template written by `lanes init`.
pub const CONFIG_TEMPLATE: &str = r"# Lanes Board Configuration
# lane_prefix: lane
# note_prefix: note
# default_lanes:
#   - Todo
#   - Doing
#   - Done
";

/// Effective workspace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for generated lane ids.
    pub lane_prefix: String,
    /// Prefix for generated note ids.
    pub note_prefix: String,
    /// Lanes created by `lanes init`.
    pub default_lanes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lane_prefix: "lane".to_string(),
            note_prefix: "note".to_string(),
            default_lanes: Vec::new(),
        }
    }
}

impl Config {
    /// Load `config.yaml` from a workspace directory and apply env overrides.
    ///
    /// # Errors
    ///
    /// Returns `Yaml` if the file is malformed, or `Config` if a value is invalid.
    pub fn load(workspace_dir: &Path) -> Result<Self> {
        let path = workspace_dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::parse(&fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Parse YAML text; a document with only comments yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Yaml` on malformed input.
    pub fn parse(text: &str) -> Result<Self> {
        let has_content = text
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Override values from the environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(LANE_PREFIX_ENV) {
            self.lane_prefix = prefix;
        }
        if let Some(prefix) = lookup(NOTE_PREFIX_ENV) {
            self.note_prefix = prefix;
        }
    }

    /// Check that id prefixes are usable.
    ///
    /// # Errors
    ///
    /// Returns `Config` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("lane_prefix", &self.lane_prefix),
            ("note_prefix", &self.note_prefix),
        ] {
            if value.is_empty() {
                return Err(CliError::config(format!("{key} cannot be empty")));
            }
            if !value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(CliError::config(format!(
                    "{key} must be ASCII letters, digits or '_', got '{value}'"
                )));
            }
        }
        Ok(())
    }
}
