//! Dashboard Configuration
//! Input locations and the daily date source, optionally read from `dashboard.json`.

use crate::data::DateSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub hour_csv: PathBuf,
    pub day_csv: PathBuf,
    pub logo: PathBuf,
    pub daily_date_source: DateSource,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            hour_csv: PathBuf::from("hour.csv"),
            day_csv: PathBuf::from("day.csv"),
            logo: PathBuf::from("bicycle.png"),
            daily_date_source: DateSource::default(),
        }
    }
}

impl DashboardConfig {
    /// Read the configuration at `path`, or the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "loaded dashboard configuration");
        Ok(config)
    }
}
