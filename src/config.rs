//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Marker shown for completed tasks in list output
    #[serde(default = "default_done_marker")]
    pub done_marker: String,

    /// Marker shown for pending tasks in list output
    #[serde(default = "default_pending_marker")]
    pub pending_marker: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            done_marker: default_done_marker(),
            pending_marker: default_pending_marker(),
        }
    }
}

fn default_done_marker() -> String {
    "X".to_string()
}

fn default_pending_marker() -> String {
    " ".to_string()
}

impl Config {
    /// Load config.toml from the data directory, falling back to defaults
    /// when the file does not exist.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.toml");
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
