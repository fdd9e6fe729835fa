//! User settings for tripbudget
//!
//! Manages user preferences such as the warning threshold used for status
//! badges, the navigation debounce interval, and display formats.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::TripBudgetPaths;
use crate::error::TripBudgetError;

/// User settings for tripbudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Percentage of the daily budget at which a day is flagged as a warning
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_percent: f64,

    /// Minimum interval between two step gestures in the day browser
    #[serde(default = "default_step_debounce_ms")]
    pub step_debounce_ms: u64,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of decimals used when printing amounts
    #[serde(default = "default_amount_decimals")]
    pub amount_decimals: usize,

    /// Trip file to use instead of the one in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_trip_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_warning_threshold() -> f64 {
    80.0
}

fn default_step_debounce_ms() -> u64 {
    300
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_amount_decimals() -> usize {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            warning_threshold_percent: default_warning_threshold(),
            step_debounce_ms: default_step_debounce_ms(),
            date_format: default_date_format(),
            amount_decimals: default_amount_decimals(),
            default_trip_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TripBudgetPaths) -> Result<Self, TripBudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TripBudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TripBudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TripBudgetPaths) -> Result<(), TripBudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TripBudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            TripBudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), TripBudgetError> {
        if !(self.warning_threshold_percent > 0.0 && self.warning_threshold_percent <= 100.0) {
            return Err(TripBudgetError::Config(format!(
                "warning_threshold_percent must be in (0, 100], got {}",
                self.warning_threshold_percent
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(TripBudgetError::Config(format!(
                "date_format '{}' is not a valid strftime format",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Resolve which trip file to open: explicit flag, then settings, then data dir
    pub fn trip_file(&self, paths: &TripBudgetPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.default_trip_file.clone())
            .unwrap_or_else(|| paths.default_trip_file())
    }
}
