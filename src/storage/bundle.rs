//! Trip file format
//!
//! A trip file holds one trip together with its categories and expenses.

use serde::{Deserialize, Serialize};

use crate::error::TripBudgetResult;
use crate::models::{validate_allocations, Category, Expense, Trip};

/// Current trip file schema version
pub const TRIP_FILE_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    TRIP_FILE_SCHEMA_VERSION
}

/// Serialized contents of a trip file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripBundle {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub trip: Trip,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl TripBundle {
    pub fn new(trip: Trip, categories: Vec<Category>, expenses: Vec<Expense>) -> Self {
        Self {
            schema_version: TRIP_FILE_SCHEMA_VERSION,
            trip,
            categories,
            expenses,
        }
    }

    /// Validate every record in the bundle
    pub fn validate(&self) -> TripBudgetResult<()> {
        self.trip.validate()?;
        for category in &self.categories {
            category.validate()?;
        }
        validate_allocations(&self.categories)?;
        for expense in &self.expenses {
            expense.validate()?;
        }
        Ok(())
    }
}
