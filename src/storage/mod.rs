//! Storage layer for tripbudget
//!
//! Trips are read from JSON trip files. The engine only ever sees trip data
//! through the `TripSource` trait, so another backend can stand in for the
//! file store without touching the services.

pub mod bundle;
pub mod file_io;
pub mod init;

pub use bundle::{TripBundle, TRIP_FILE_SCHEMA_VERSION};
pub use file_io::{read_json_required, write_json_atomic};
pub use init::initialize_trip_file;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{TripBudgetError, TripBudgetResult};
use crate::models::{Category, Expense, Trip, TripId};

/// Read access to trips, their categories and their expenses
pub trait TripSource {
    fn get_trip(&self, trip_id: TripId) -> TripBudgetResult<Trip>;

    fn get_categories(&self, trip_id: TripId) -> TripBudgetResult<Vec<Category>>;

    /// Expenses of a trip, optionally limited to those overlapping `range`.
    ///
    /// The range is only a pre-filter; per-day amounts are always derived
    /// by the allocator.
    fn get_expenses(
        &self,
        trip_id: TripId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> TripBudgetResult<Vec<Expense>>;
}

/// A single trip file loaded into memory
#[derive(Debug, Clone)]
pub struct JsonTripStore {
    path: PathBuf,
    bundle: TripBundle,
}

impl JsonTripStore {
    /// Load and validate a trip file
    pub fn open(path: impl AsRef<Path>) -> TripBudgetResult<Self> {
        let path = path.as_ref().to_path_buf();
        let bundle: TripBundle = read_json_required(&path)?;

        if bundle.schema_version > TRIP_FILE_SCHEMA_VERSION {
            return Err(TripBudgetError::Storage(format!(
                "{} uses schema version {}, newer than supported version {}",
                path.display(),
                bundle.schema_version,
                TRIP_FILE_SCHEMA_VERSION
            )));
        }
        bundle.validate()?;

        let trip = &bundle.trip;
        for expense in &bundle.expenses {
            if expense.trip_id != trip.id {
                warn!(expense = %expense.id, "expense belongs to another trip");
            }
            if !expense.overlaps(trip.start_date, trip.end_date) {
                warn!(expense = %expense.id, start = %expense.start_date, "expense falls outside the trip");
            }
        }

        info!(
            path = %path.display(),
            trip = %trip.name,
            categories = bundle.categories.len(),
            expenses = bundle.expenses.len(),
            "loaded trip file"
        );

        Ok(Self { path, bundle })
    }

    /// Wrap an in-memory bundle
    pub fn from_bundle(path: impl Into<PathBuf>, bundle: TripBundle) -> Self {
        Self {
            path: path.into(),
            bundle,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The trip stored in this file
    pub fn trip(&self) -> &Trip {
        &self.bundle.trip
    }

    pub fn bundle(&self) -> &TripBundle {
        &self.bundle
    }

    fn ensure_trip(&self, trip_id: TripId) -> TripBudgetResult<()> {
        if self.bundle.trip.id == trip_id {
            Ok(())
        } else {
            Err(TripBudgetError::trip_not_found(trip_id.to_string()))
        }
    }
}

impl TripSource for JsonTripStore {
    fn get_trip(&self, trip_id: TripId) -> TripBudgetResult<Trip> {
        self.ensure_trip(trip_id)?;
        Ok(self.bundle.trip.clone())
    }

    fn get_categories(&self, trip_id: TripId) -> TripBudgetResult<Vec<Category>> {
        self.ensure_trip(trip_id)?;
        let mut categories = self.bundle.categories.clone();
        categories.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(categories)
    }

    fn get_expenses(
        &self,
        trip_id: TripId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> TripBudgetResult<Vec<Expense>> {
        self.ensure_trip(trip_id)?;
        let expenses = self
            .bundle
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .filter(|e| range.map_or(true, |(from, to)| e.overlaps(from, to)))
            .cloned()
            .collect();
        Ok(expenses)
    }
}
