//! Calendar arithmetic over inclusive date ranges
//!
//! All ranges in tripbudget are inclusive on both ends: a trip from the 1st
//! to the 10th lasts ten days.

use chrono::NaiveDate;

use crate::error::{TripBudgetError, TripBudgetResult};

/// Number of calendar days from `start` to `end`, both included.
///
/// Fails with `InvalidRange` when `end` precedes `start`, so a day count is
/// never zero or negative.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> TripBudgetResult<i64> {
    if end < start {
        return Err(TripBudgetError::InvalidRange { start, end });
    }
    Ok((end - start).num_days() + 1)
}

/// 1-based position of `date` within a trip starting on `trip_start`
pub fn day_index(trip_start: NaiveDate, date: NaiveDate) -> TripBudgetResult<i64> {
    days_inclusive(trip_start, date)
}

/// Bound `date` into `[lo, hi]`
pub fn clamp(date: NaiveDate, lo: NaiveDate, hi: NaiveDate) -> NaiveDate {
    if date < lo {
        lo
    } else if date > hi {
        hi
    } else {
        date
    }
}

/// Whether `date` lies in `[lo, hi]`
pub fn contains(date: NaiveDate, lo: NaiveDate, hi: NaiveDate) -> bool {
    date >= lo && date <= hi
}

/// Every date from `start` through `end`; empty when `end < start`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
