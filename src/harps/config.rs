use crate::error::{HarpsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for harps, stored in `$HARPS_HOME/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HarpsConfig {
    /// Turn a trailing `/e` or `?e` in a pattern into an end-of-match offset
    #[serde(default)]
    pub infer_offset: bool,

    /// Ask for an explicit offset every time a search harp is set
    #[serde(default)]
    pub ask_offset: bool,
}

/// Keys accepted by `harps config`.
pub const CONFIG_KEYS: [&str; 2] = ["infer-offset", "ask-offset"];

impl HarpsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HarpsError::Io)?;
        let config: HarpsConfig =
            serde_json::from_str(&content).map_err(HarpsError::Serialization)?;
        Ok(config)
    }

    /// Like [`HarpsConfig::load`], but an unreadable or corrupt file is logged
    /// and yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref();
        Self::load(config_dir).unwrap_or_else(|e| {
            tracing::warn!(
                path = %config_dir.join(CONFIG_FILENAME).display(),
                error = %e,
                "ignoring unreadable config, using defaults"
            );
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HarpsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HarpsError::Serialization)?;
        fs::write(config_path, content).map_err(HarpsError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<bool> {
        match key {
            "infer-offset" => Ok(self.infer_offset),
            "ask-offset" => Ok(self.ask_offset),
            other => Err(HarpsError::Api(format!("Unknown config key: {}", other))),
        }
    }

    /// Set a key from its CLI spelling. Values are `true`/`false` (also `on`/`off`, `yes`/`no`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let flag = parse_flag(value)?;
        match key {
            "infer-offset" => self.infer_offset = flag,
            "ask-offset" => self.ask_offset = flag,
            other => return Err(HarpsError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(HarpsError::Api(format!(
            "Invalid value {:?}: expected true or false",
            value
        ))),
    }
}
