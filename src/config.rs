use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User configuration, stored as TOML in the platform config
/// directory. Every field has a default, so a missing or partial file
/// is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL the share action builds links against.
    pub share_base_url: String,
    /// Artificial delay before revealing events, in milliseconds.
    pub reveal_delay_ms: u64,
    /// Last revealed date; restored into the input on the next run.
    pub last_date: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_base_url: "https://echoes.example".to_string(),
            reveal_delay_ms: 1000,
            last_date: None,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "echoes").map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Loads the config, falling back to defaults when the file is
    /// missing or unreadable. A malformed file is reported and
    /// ignored rather than aborting startup.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path().context("no config directory for this platform")?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_behavior() {
        let config = Config::default();
        assert_eq!(config.reveal_delay_ms, 1000);
        assert!(config.last_date.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("reveal_delay_ms = 250").unwrap();
        assert_eq!(config.reveal_delay_ms, 250);
        assert_eq!(config.share_base_url, Config::default().share_base_url);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = Config::default();
        config.last_date = Some("2020-08-20".to_string());
        let raw = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back.last_date.as_deref(), Some("2020-08-20"));
    }
}
