//! Path management for tripbudget
//!
//! Provides XDG-compliant path resolution for settings, trip files, and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `TRIPBUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tripbudget` or `~/.config/tripbudget`
//! 3. Windows: `%APPDATA%\tripbudget`

use std::path::PathBuf;

use crate::error::TripBudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TRIPBUDGET_DATA_DIR";

/// Manages all paths used by tripbudget
#[derive(Debug, Clone)]
pub struct TripBudgetPaths {
    /// Base directory for all tripbudget data
    base_dir: PathBuf,
}

impl TripBudgetPaths {
    /// Create a new TripBudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TripBudgetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TripBudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/tripbudget/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory holding trip files
    pub fn trips_dir(&self) -> PathBuf {
        self.base_dir.join("trips")
    }

    /// Get the trip file used when none is configured
    pub fn default_trip_file(&self) -> PathBuf {
        self.trips_dir().join("trip.json")
    }

    /// Get the directory exports are written to by default
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TripBudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TripBudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.trips_dir())
            .map_err(|e| TripBudgetError::Io(format!("Failed to create trips directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir()).map_err(|e| {
            TripBudgetError::Io(format!("Failed to create exports directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if tripbudget has been initialized (default trip file exists)
    pub fn is_initialized(&self) -> bool {
        self.default_trip_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TripBudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                TripBudgetError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("tripbudget"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TripBudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TripBudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tripbudget"))
}
