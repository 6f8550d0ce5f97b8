//! Application configuration management.
//!
//! Configuration is stored at `~/.config/careowner/config.json` and holds
//! the optional seed-data override directory, the page to open at launch
//! and the owner's display name.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::navigation::Page;

/// Application name used for config/cache directory paths
pub const APP_NAME: &str = "careowner";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides `data_dir`
pub const DATA_DIR_ENV: &str = "CAREOWNER_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub start_page: Option<String>,
    pub practice_owner: Option<String>,
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the log file
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Seed-data override directory, with the environment taking precedence
    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.data_dir.clone())
    }

    pub fn start_page(&self) -> Page {
        self.start_page
            .as_deref()
            .map(Page::from_key)
            .unwrap_or_default()
    }

    pub fn owner_name(&self) -> &str {
        self.practice_owner.as_deref().unwrap_or("Practice Owner")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(&tmp.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.start_page(), Page::Dashboard);
        assert_eq!(config.owner_name(), "Practice Owner");
    }

    #[test]
    fn test_load_written_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/careowner")),
            start_page: Some("offers".to_string()),
            practice_owner: Some("Dr. Emily Chen".to_string()),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.start_page(), Page::Offers);
    }

    #[test]
    fn test_unknown_start_page_falls_back_to_dashboard() {
        let config = Config {
            start_page: Some("nowhere".to_string()),
            ..Config::default()
        };
        assert_eq!(config.start_page(), Page::Dashboard);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
