//! Export module for tripbudget
//!
//! Machine-readable export of a trip:
//! - CSV: the day-by-day timeline, or the raw expense list
//! - JSON: trip data, summary and timeline with schema versioning

pub mod csv;
pub mod json;

pub use self::csv::{export_expenses_csv, export_timeline_csv};
pub use json::{export_trip_json, import_from_json, ExportedDay, TripExport, EXPORT_SCHEMA_VERSION};
