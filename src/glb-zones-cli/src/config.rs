//! Configuration management for glb-zones CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Zone name prefix used when `--prefix` is not given
    pub prefix: Option<String>,
    /// Output directory used when `--output-dir` is not given
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("glb-zones");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Prefix from the command line, then config, then `ZONE_`
    pub fn resolve_prefix(&self, provided: Option<&str>) -> String {
        provided
            .or(self.prefix.as_deref())
            .unwrap_or(glb_zones::DEFAULT_PREFIX)
            .to_string()
    }

    /// Output directory from the command line, then config, then `.`
    pub fn resolve_output_dir(&self, provided: Option<&Path>) -> PathBuf {
        provided
            .or(self.output_dir.as_deref())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    }
}
