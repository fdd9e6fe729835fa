//! Starter trip file creation

use std::path::Path;

use chrono::{Days, NaiveDate};
use tracing::info;

use super::bundle::TripBundle;
use super::file_io::write_json_atomic;
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::models::{default_categories, DefaultCategory, Expense, Trip};

/// Length of the starter trip in days
const SAMPLE_TRIP_DAYS: u64 = 7;
const SAMPLE_DAILY_BUDGET: f64 = 200.0;

/// Write a week-long starter trip beginning on `today`, with the default
/// categories and a few sample expenses. Refuses to replace an existing file
/// unless `force` is set.
pub fn initialize_trip_file(
    path: &Path,
    today: NaiveDate,
    force: bool,
) -> TripBudgetResult<TripBundle> {
    if path.exists() && !force {
        return Err(TripBudgetError::Storage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let bundle = sample_bundle(today)?;
    write_json_atomic(path, &bundle)?;
    info!(path = %path.display(), "created starter trip file");
    Ok(bundle)
}

fn day(start: NaiveDate, offset: u64) -> TripBudgetResult<NaiveDate> {
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| TripBudgetError::Validation(format!("{} + {} days overflows", start, offset)))
}

fn sample_bundle(today: NaiveDate) -> TripBudgetResult<TripBundle> {
    let end = day(today, SAMPLE_TRIP_DAYS - 1)?;
    let mut trip = Trip::new("Sample Trip", today, end, "EUR")
        .with_daily_budget(SAMPLE_DAILY_BUDGET)?;
    trip.description = Some("Edit this file to describe your own trip".to_string());

    let categories = default_categories();
    let category_id = |which: DefaultCategory| {
        categories
            .iter()
            .find(|c| c.name == which.name())
            .map(|c| c.id)
            .ok_or_else(|| TripBudgetError::Validation(format!("missing {}", which.name())))
    };

    let expenses = vec![
        Expense::new(
            trip.id,
            category_id(DefaultCategory::Accommodation)?,
            "Hotel, three nights",
            420.0,
            today,
        )
        .spanning_until(day(today, 2)?)
        .paid_with("card"),
        Expense::new(
            trip.id,
            category_id(DefaultCategory::FoodAndDining)?,
            "Welcome dinner",
            45.0,
            today,
        )
        .paid_with("cash"),
        Expense::new(
            trip.id,
            category_id(DefaultCategory::Transportation)?,
            "Train to the coast",
            60.0,
            day(today, 1)?,
        )
        .paid_with("card"),
    ];

    let bundle = TripBundle::new(trip, categories, expenses);
    bundle.validate()?;
    Ok(bundle)
}
