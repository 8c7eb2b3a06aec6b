//! TOML configuration with sensible defaults.
//!
//! A missing config file is written out with defaults on first load, so
//! users always have something concrete to edit.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// File holding every named list, one JSON object keyed by list name.
    #[serde(default = "default_lists_file")]
    pub lists_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Hostname extraction is willing to talk to.
    #[serde(default = "default_expected_host")]
    pub expected_host: String,
    /// How long to wait for a page to answer an extraction request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_lists_file() -> PathBuf {
    data_dir().join("lists.json")
}

fn default_expected_host() -> String {
    "music.youtube.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            page: PageConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lists_file: default_lists_file(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            expected_host: default_expected_host(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load the config file, creating it with defaults on first run.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            info!("Config loaded from: {:?}", path);
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            info!("Created default config at: {:?}", path);
            Ok(config)
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl PageConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Data directory for the persisted lists.
pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".local")
            .join("share")
            .join("tracklift")
    }
    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tracklift")
    }
}

/// Config directory for the TOML file.
pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".config")
            .join("tracklift")
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tracklift")
    }
}
