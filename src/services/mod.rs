//! Service layer for tripbudget
//!
//! The budget engine: calendar arithmetic, expense pro-ration, daily
//! statistics, status classification and the bounded date cursor. Every
//! function here is pure and works on data already loaded from storage.

pub mod allocator;
pub mod calendar;
pub mod cursor;
pub mod statistics;
pub mod status;
pub mod summary;

pub use allocator::{daily_amount, spent_between, spent_on, DaySpend};
pub use cursor::{DateCursor, NavigationGesture, NavigationHints};
pub use statistics::{compute_daily_statistics, DailyStatisticsCalculator};
pub use status::{classify_status, StatusClassifier};
pub use summary::TripSummary;
