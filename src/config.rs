//! Loading and saving user preferences from `settings.toml`.
//!
//! The file lives in the user config directory
//! (`~/.config/ink-gallery/settings.toml` on Linux). A missing file means
//! defaults; fields missing from the file take their default values.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ink-gallery";

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_FETCH_LATENCY_MS: u64 = 500;
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Size of the generated mock dataset
pub const DEFAULT_MOCK_ITEMS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page requested from the data source
    pub page_size: usize,
    /// Simulated network latency of the mock source
    pub fetch_latency_ms: u64,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// JSON catalog file or folder replacing the generated dataset
    pub catalog_path: Option<PathBuf>,
    /// Directory holding the favorites database
    pub data_dir: Option<PathBuf>,
    pub mock_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fetch_latency_ms: DEFAULT_FETCH_LATENCY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            catalog_path: None,
            data_dir: None,
            mock_items: DEFAULT_MOCK_ITEMS,
        }
    }
}

impl Config {
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load from the default location, or defaults when there is no file
pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
