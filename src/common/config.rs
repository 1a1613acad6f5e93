//! User configuration
//!
//! Config file location: ~/.config/davinci_helper/config.toml
//! (or `$DAVINCI_HELPER_CONFIG`). A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::paths;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Distribution descriptor to read during detection
    pub os_release: PathBuf,
    /// Packages installed by `setup` on top of the built-in set
    pub extra_packages: Vec<String>,
    /// Record child processes to the JSONL command log in debug mode
    pub command_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            os_release: PathBuf::from(paths::OS_RELEASE),
            extra_packages: Vec::new(),
            command_log: true,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        paths::config_file()
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}
