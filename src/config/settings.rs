//! Application settings

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::PageSize;

/// How many mock records each page is seeded with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordCounts {
    pub attack_logs: usize,
    pub external_logs: usize,
    pub exposure_logs: usize,
    pub mapping_assets: usize,
}

impl Default for RecordCounts {
    fn default() -> Self {
        Self {
            attack_logs: 240,
            external_logs: 160,
            exposure_logs: 80,
            mapping_assets: 60,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Database file path for favorites and saved filters
    pub database_path: String,

    /// Rows per page when a table is first shown
    pub default_page_size: PageSize,

    /// Auto-refresh period of the live log pages, in seconds
    pub refresh_interval_secs: u64,

    /// Fixed seed for mock data; random when unset
    pub mock_seed: Option<u64>,

    pub record_counts: RecordCounts,

    /// Log level
    pub log_level: String,

    /// Theme name
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: Self::default_db_path()
                .to_string_lossy()
                .to_string(),
            default_page_size: PageSize::default(),
            refresh_interval_secs: 120,
            mock_seed: None,
            record_counts: RecordCounts::default(),
            log_level: "info".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from file or create default
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Self = serde_json::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get default config directory
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("com", "threatwatch", "threatwatch-tui")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
                    .join("threatwatch-tui")
            })
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get default database path
    pub fn default_db_path() -> PathBuf {
        Self::config_dir().join("threatwatch.db")
    }

    pub fn log_path() -> PathBuf {
        Self::config_dir().join("threatwatch.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let settings = Settings::load(path.to_str()).unwrap();
        assert_eq!(settings.refresh_interval_secs, 120);
        assert_eq!(settings.default_page_size, PageSize::Twenty);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_page_size": 50, "mock_seed": 42 }"#).unwrap();

        let settings = Settings::load(path.to_str()).unwrap();
        assert_eq!(settings.default_page_size, PageSize::Fifty);
        assert_eq!(settings.mock_seed, Some(42));
        assert_eq!(settings.record_counts.attack_logs, 240);
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_page_size": 30 }"#).unwrap();
        assert!(Settings::load(path.to_str()).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.json");
        let mut settings = Settings::default();
        settings.theme = "light".to_string();
        settings.save(path.to_str()).unwrap();

        let loaded = Settings::load(path.to_str()).unwrap();
        assert_eq!(loaded.theme, "light");
    }
}
