//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the storage and service layers.

pub mod export;
pub mod navigate;
pub mod report;
pub mod stats;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use navigate::{handle_step_command, StepArgs};
pub use report::{handle_report_command, ReportCommands};
pub use stats::{handle_stats_command, StatsArgs};

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::config::{Settings, TripBudgetPaths};
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::models::{Category, Expense, Trip};
use crate::services::StatusClassifier;
use crate::storage::{JsonTripStore, TripSource};

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> TripBudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        TripBudgetError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD format",
            value
        ))
    })
}

/// The current date, or the `--today` override
pub fn resolve_today(today: Option<&str>) -> TripBudgetResult<NaiveDate> {
    match today {
        Some(value) => parse_date(value),
        None => Ok(Local::now().date_naive()),
    }
}

/// Everything a command needs to work on one trip
#[derive(Debug, Clone)]
pub struct TripContext {
    pub path: PathBuf,
    pub trip: Trip,
    pub categories: Vec<Category>,
    pub expenses: Vec<Expense>,
    pub settings: Settings,
    pub today: NaiveDate,
}

impl TripContext {
    /// Load the trip file selected by `--trip`, settings, or the data dir
    pub fn load(
        paths: &TripBudgetPaths,
        settings: &Settings,
        trip_path: Option<PathBuf>,
        today: NaiveDate,
    ) -> TripBudgetResult<Self> {
        let path = settings.trip_file(paths, trip_path);
        Self::from_store(&JsonTripStore::open(&path)?, settings, today)
    }

    /// Pull trip data through the `TripSource` interface
    pub fn from_store(
        store: &JsonTripStore,
        settings: &Settings,
        today: NaiveDate,
    ) -> TripBudgetResult<Self> {
        let trip_id = store.trip().id;
        let trip = store.get_trip(trip_id)?;
        let categories = store.get_categories(trip_id)?;
        let expenses = store.get_expenses(trip_id, Some((trip.start_date, trip.end_date)))?;

        Ok(Self {
            path: store.path().to_path_buf(),
            trip,
            categories,
            expenses,
            settings: settings.clone(),
            today,
        })
    }

    pub fn classifier(&self) -> StatusClassifier {
        StatusClassifier::from_settings(&self.settings)
    }

    pub fn decimals(&self) -> usize {
        self.settings.amount_decimals
    }

    pub fn date_format(&self) -> &str {
        &self.settings.date_format
    }
}
