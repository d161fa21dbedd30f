//! Configuration persistence
//!
//! JSON config under the platform config directory
//! (`~/.config/portanav/config.json` on Linux).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persisted settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// "dark" or "light".
    pub theme: String,
    /// Viewport width (in columns) at or below which the compact layout
    /// is used and the indicator is hidden.
    pub mobile_breakpoint: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mobile_breakpoint: 90,
        }
    }
}

pub trait ConfigService {
    fn load_config(&self) -> Result<AppConfig>;
    fn save_config(&self, config: &AppConfig) -> Result<()>;
}

pub struct LocalConfigService {
    config_path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().context("no config directory available")?;
        Ok(Self {
            config_path: dir.join("portanav").join("config.json"),
        })
    }

    #[cfg(test)]
    fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

impl ConfigService for LocalConfigService {
    fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.config_path)
            .with_context(|| format!("reading {}", self.config_path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.config_path.display()))?;
        Ok(config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, raw)
            .with_context(|| format!("writing {}", self.config_path.display()))?;
        Ok(())
    }
}
