// Engine settings, loaded from a JSON config file or left at defaults
use crate::error::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::costing::status::DEFAULT_EXPIRING_SOON_DAYS;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Location of the item feed (JSON array or `{ "items": [...] }`).
    pub feed_path: PathBuf,
    /// Warranty window, in days, for the "expiring soon" status.
    pub expiring_soon_days: i64,
    /// Fallback log filter when `RUST_LOG` is not set.
    pub log_level: String,
    pub pretty_output: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            feed_path: PathBuf::from("items.json"),
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            log_level: "info".to_string(),
            pretty_output: true,
        }
    }
}

impl EngineSettings {
    /// Loads settings from a JSON file. Keys missing from the file keep their
    /// default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_feed_path(mut self, feed_path: impl Into<PathBuf>) -> Self {
        self.feed_path = feed_path.into();
        self
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.expiring_soon_days < 0 {
            return Err(EngineError::ConfigError(format!(
                "expiring_soon_days must not be negative (got {})",
                self.expiring_soon_days
            )));
        }
        if self.feed_path.as_os_str().is_empty() {
            return Err(EngineError::ConfigError("feed_path must not be empty".to_string()));
        }
        Ok(())
    }
}
