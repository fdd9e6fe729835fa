//! Reports module for tripbudget
//!
//! Terminal and CSV rendering of daily snapshots, the day-by-day trip
//! timeline, and the whole-trip summary.

pub mod daily;
pub mod summary;
pub mod timeline;

pub use daily::{format_hints, DailyReport};
pub use summary::{export_summary_csv, format_summary_terminal};
pub use timeline::{TimelineEntry, TripTimeline};
