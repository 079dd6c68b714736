use crate::error::{CleanError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub normalize: NormalizeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Marker written into fields that are known to be inapplicable rather
    /// than merely unobserved (e.g. the health of a dead tree).
    pub inapplicable_marker: String,
    /// Pretty-print the batch report JSON.
    pub report_pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::default(),
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            inapplicable_marker: "Not Applicable".to_string(),
            report_pretty: true,
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory. A missing file is not
    /// an error; defaults apply.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_content = fs::read_to_string(path).map_err(|e| {
            CleanError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
