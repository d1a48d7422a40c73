//! Tunable parameters with JSON load/save
//!
//! The geometric ratios are fixed (see [`crate::constants`]); the config
//! covers the parameters an operator may want to vary between rigs: the
//! calibration range multiplier and where the reference table lives.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::calibration::STD_MULTIPLIER;
use crate::error::{Result, ScanError};

/// Scanner and calibration configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Accept-range half-width in standard deviations
    #[serde(default = "default_std_multiplier")]
    pub std_multiplier: f32,

    /// Path of the persisted reference table
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,
}

fn default_std_multiplier() -> f32 {
    STD_MULTIPLIER
}

fn default_table_path() -> PathBuf {
    PathBuf::from("calibrated.json")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            std_multiplier: default_std_multiplier(),
            table_path: default_table_path(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScanError::table_io(format!("failed to read {}", path.display()), e))?;
        serde_json::from_str(&content)
            .map_err(|e| ScanError::table_io(format!("failed to parse {}", path.display()), e))
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::table_io("failed to serialize config", e))?;
        std::fs::write(path, json)
            .map_err(|e| ScanError::table_io(format!("failed to write {}", path.display()), e))
    }
}
