//! Trip model
//!
//! A trip is a fixed, inclusive calendar span with an optional total budget
//! expressed in the trip's currency.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TripId;
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::services::calendar;

/// A trip with its date span and budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,

    /// Trip name
    pub name: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// First day of the trip (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,

    /// Total budget for the whole trip; `None` means no budget configured
    #[serde(default)]
    pub total_budget: Option<f64>,

    /// ISO 4217 currency code all amounts are expressed in
    pub currency_code: String,
}

impl Trip {
    /// Create a new trip without a budget
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            id: TripId::new(),
            name: name.into(),
            description: None,
            start_date,
            end_date,
            total_budget: None,
            currency_code: currency_code.into().trim().to_uppercase(),
        }
    }

    /// Set the total budget
    pub fn with_total_budget(mut self, total_budget: f64) -> Self {
        self.total_budget = Some(total_budget);
        self
    }

    /// Derive the total budget from a per-day amount
    pub fn with_daily_budget(mut self, daily_budget: f64) -> TripBudgetResult<Self> {
        let days = self.total_days()?;
        self.total_budget = Some(daily_budget * days as f64);
        Ok(self)
    }

    /// Number of days in the trip, both ends included
    pub fn total_days(&self) -> TripBudgetResult<i64> {
        calendar::days_inclusive(self.start_date, self.end_date)
    }

    /// Total budget spread evenly over every day of the trip
    pub fn daily_budget(&self) -> Option<f64> {
        let total = self.total_budget?;
        match self.total_days() {
            Ok(days) if days > 0 => Some(total / days as f64),
            _ => None,
        }
    }

    /// Check if a date falls within the trip
    pub fn contains(&self, date: NaiveDate) -> bool {
        calendar::contains(date, self.start_date, self.end_date)
    }

    /// Fail with `OutOfRange` unless the date lies within the trip
    pub fn ensure_contains(&self, date: NaiveDate) -> TripBudgetResult<()> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(TripBudgetError::OutOfRange {
                date,
                start: self.start_date,
                end: self.end_date,
            })
        }
    }

    /// Validate the trip
    pub fn validate(&self) -> Result<(), TripValidationError> {
        if self.name.trim().is_empty() {
            return Err(TripValidationError::EmptyName);
        }

        if self.name.len() > 255 {
            return Err(TripValidationError::NameTooLong(self.name.len()));
        }

        if self.end_date < self.start_date {
            return Err(TripValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(TripValidationError::InvalidCurrency(
                self.currency_code.clone(),
            ));
        }

        if let Some(budget) = self.total_budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(TripValidationError::NegativeBudget);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} to {})",
            self.name,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for trips
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripValidationError {
    EmptyName,
    NameTooLong(usize),
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    InvalidCurrency(String),
    NegativeBudget,
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Trip name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Trip name too long ({} chars, max 255)", len),
            Self::EndBeforeStart { start, end } => {
                write!(f, "Trip ends ({}) before it starts ({})", end, start)
            }
            Self::InvalidCurrency(code) => {
                write!(f, "Invalid currency code '{}': expected 3 letters", code)
            }
            Self::NegativeBudget => write!(f, "Total budget cannot be negative"),
        }
    }
}

impl std::error::Error for TripValidationError {}

impl From<TripValidationError> for TripBudgetError {
    fn from(err: TripValidationError) -> Self {
        match err {
            TripValidationError::EndBeforeStart { start, end } => {
                TripBudgetError::InvalidRange { start, end }
            }
            other => TripBudgetError::Validation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ten_day_trip() -> Trip {
        Trip::new("Lisbon", date(2025, 7, 1), date(2025, 7, 10), "eur")
    }

    #[test]
    fn test_new_trip_normalizes_currency() {
        let trip = ten_day_trip();
        assert_eq!(trip.currency_code, "EUR");
        assert!(trip.total_budget.is_none());
        assert!(trip.validate().is_ok());
    }

    #[test]
    fn test_daily_budget_from_total() {
        let trip = ten_day_trip().with_total_budget(1000.0);
        assert_eq!(trip.total_days().unwrap(), 10);
        assert_eq!(trip.daily_budget(), Some(100.0));
    }

    #[test]
    fn test_total_budget_from_daily() {
        let trip = ten_day_trip().with_daily_budget(45.0).unwrap();
        assert_eq!(trip.total_budget, Some(450.0));
    }

    #[test]
    fn test_no_budget_means_no_daily_budget() {
        assert!(ten_day_trip().daily_budget().is_none());
    }

    #[test]
    fn test_contains() {
        let trip = ten_day_trip();
        assert!(trip.contains(date(2025, 7, 1)));
        assert!(trip.contains(date(2025, 7, 10)));
        assert!(!trip.contains(date(2025, 7, 11)));
        assert!(trip.ensure_contains(date(2025, 6, 30)).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_validation() {
        let mut trip = ten_day_trip();

        trip.name = " ".into();
        assert_eq!(trip.validate(), Err(TripValidationError::EmptyName));

        trip.name = "Lisbon".into();
        trip.total_budget = Some(-1.0);
        assert_eq!(trip.validate(), Err(TripValidationError::NegativeBudget));

        trip.total_budget = None;
        trip.currency_code = "EURO".into();
        assert!(matches!(
            trip.validate(),
            Err(TripValidationError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_reversed_dates_map_to_invalid_range() {
        let trip = Trip::new("Backwards", date(2025, 7, 10), date(2025, 7, 1), "EUR");
        let err: TripBudgetError = trip.validate().unwrap_err().into();
        assert!(matches!(err, TripBudgetError::InvalidRange { .. }));
        assert!(trip.total_days().is_err());
        assert!(trip.daily_budget().is_none());
    }
}
