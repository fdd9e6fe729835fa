//! tripbudget - daily budget statistics for trips
//!
//! Given a trip with an optional total budget, its spending categories and
//! its expenses, tripbudget computes a statistics snapshot for any day of
//! the trip: spend against the daily budget, per-category allowances,
//! rollover from earlier days, and an adjusted daily budget for the rest of
//! the trip. Multi-day expenses are pro-rated evenly over the days they
//! cover.
//!
//! # Architecture
//!
//! - `config`: data directory and settings
//! - `error`: error types
//! - `models`: trips, categories, expenses, statistics snapshots
//! - `services`: the pure budget engine and the date cursor
//! - `storage`: JSON trip files behind the `TripSource` trait
//! - `reports`, `export`, `display`: terminal, CSV and JSON output
//! - `cli`, `tui`: command handlers and the interactive day browser
//!
//! # Example
//!
//! ```rust,ignore
//! use tripbudget::services::{classify_status, compute_daily_statistics};
//!
//! let stats = compute_daily_statistics(&trip, &categories, &expenses, date)?;
//! let status = classify_status(&stats, today);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TripBudgetError, TripBudgetResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG`, with `tripbudget=warn` added.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "tripbudget=warn".parse() {
            filter = filter.add_directive(directive);
        }

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
