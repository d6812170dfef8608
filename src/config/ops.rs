use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Settings file location under `home`.
    #[must_use]
    pub fn path_in(home: &Path) -> PathBuf {
        home.join(".config").join("opn").join("config.toml")
    }

    /// Read settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails on an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "open.command" => Ok(self.open.command.clone().unwrap_or_default()),
            "add.duplicates" => Ok(self.add.duplicates.as_str().to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or a value the key does not accept.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "open.command" => {
                self.open.command = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "add.duplicates" => {
                self.add.duplicates = value.parse()?;
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
