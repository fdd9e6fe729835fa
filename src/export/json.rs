//! JSON Export functionality
//!
//! Exports a trip, its summary and its full timeline with schema versioning.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TripBudgetError, TripBudgetResult};
use crate::models::{BudgetStatus, Category, DailyBudgetStatistics, Expense, Trip};
use crate::reports::TripTimeline;
use crate::services::{StatusClassifier, TripSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A timeline day as exported: the statistics snapshot plus its status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedDay {
    pub status: BudgetStatus,
    #[serde(flatten)]
    pub statistics: DailyBudgetStatistics,
}

/// Full trip export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Date statuses were classified against
    pub as_of: NaiveDate,

    pub trip: Trip,
    pub categories: Vec<Category>,
    pub expenses: Vec<Expense>,
    pub summary: TripSummary,
    pub days: Vec<ExportedDay>,
}

impl TripExport {
    pub fn build(
        trip: &Trip,
        categories: &[Category],
        expenses: &[Expense],
        classifier: &StatusClassifier,
        today: NaiveDate,
    ) -> TripBudgetResult<Self> {
        let summary = TripSummary::generate(trip, categories, expenses)?;
        let timeline = TripTimeline::generate(trip, categories, expenses, classifier, today)?;
        let days = timeline
            .entries
            .into_iter()
            .map(|entry| ExportedDay {
                status: entry.status,
                statistics: entry.statistics,
            })
            .collect();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of: today,
            trip: trip.clone(),
            categories: categories.to_vec(),
            expenses: expenses.to_vec(),
            summary,
            days,
        })
    }
}

/// Export a trip to JSON
pub fn export_trip_json<W: Write>(
    export: &TripExport,
    writer: &mut W,
    pretty: bool,
) -> TripBudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| TripBudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Read an export back, checking its schema version
pub fn import_from_json(json_str: &str) -> TripBudgetResult<TripExport> {
    let export: TripExport = serde_json::from_str(json_str)
        .map_err(|e| TripBudgetError::Export(format!("Invalid JSON: {}", e)))?;

    if export.schema_version != EXPORT_SCHEMA_VERSION {
        return Err(TripBudgetError::Export(format!(
            "Schema version mismatch: expected {}, got {}",
            EXPORT_SCHEMA_VERSION, export.schema_version
        )));
    }

    Ok(export)
}
