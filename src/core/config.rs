use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::progress::ProgressOptions;
use crate::ui::scroll::ScrollOptions;

/// User defaults for the consolekit commands, stored as JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Progress bar defaults, validated when read through [`Config::progress_options`]
    #[serde(default)]
    pub progress: Map<String, Value>,
    /// Delay between scrolled characters, in milliseconds
    #[serde(default)]
    pub scroll_speed_ms: Option<u64>,
    /// Delay after a pause character, in milliseconds
    #[serde(default)]
    pub scroll_pause_ms: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing, empty or unreadable-as-JSON file
    /// yields the default config.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_slice(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config file {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_vec_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("consolekit").join("config.json"))
    }

    /// Progress bar defaults from the config file
    pub fn progress_options(&self) -> Result<ProgressOptions> {
        let options = ProgressOptions::from_json(&Value::Object(self.progress.clone()))
            .context("Invalid progress section in config")?;
        Ok(options)
    }

    pub fn set_progress_options(&mut self, options: &ProgressOptions) {
        if let Value::Object(map) = options.to_json() {
            self.progress = map;
        }
    }

    /// Scroll defaults, falling back to the built-in timings
    pub fn scroll_options(&self) -> ScrollOptions {
        let mut options = ScrollOptions::default();
        if let Some(ms) = self.scroll_speed_ms {
            options.speed = std::time::Duration::from_millis(ms);
        }
        if let Some(ms) = self.scroll_pause_ms {
            options.pause_duration = std::time::Duration::from_millis(ms);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_wrong_kind_in_progress_section_is_reported() {
        let mut config = Config::default();
        config.progress.insert("width".into(), json!("20"));
        let err = config.progress_options().unwrap_err();
        assert!(format!("{:#}", err).contains("width must be a positive integer"));
    }

    #[test]
    fn test_scroll_options_override_defaults() {
        let config = Config {
            scroll_speed_ms: Some(5),
            ..Default::default()
        };
        let options = config.scroll_options();
        assert_eq!(options.speed, std::time::Duration::from_millis(5));
        assert_eq!(options.pause_duration, ScrollOptions::default().pause_duration);
    }
}
