//! Tracker configuration

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{TrackerError, Result};
use crate::{CURRENCY_LABEL, DATABASE_FILENAME};

/// Settings for opening a tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Location of the SQLite database file
    pub database_path: PathBuf,
    /// Label prefixed to displayed amounts
    pub currency_label: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DATABASE_FILENAME),
            currency_label: CURRENCY_LABEL.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Config storing the database inside `folder`
    pub fn in_folder(folder: &Path) -> Self {
        Self {
            database_path: folder.join(DATABASE_FILENAME),
            ..Self::default()
        }
    }

    /// Parse config from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.currency_label.trim().is_empty() {
            return Err(TrackerError::Config("currency_label must not be empty".to_string()));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(TrackerError::Config("database_path must not be empty".to_string()));
        }
        Ok(())
    }
}
