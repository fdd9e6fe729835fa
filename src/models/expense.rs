//! Expense model
//!
//! An expense belongs to one category and covers either a single day or an
//! inclusive span of days. A spanning expense is one total cost that is
//! spread evenly over the days it covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, TripId};

/// A single expense, already expressed in the trip's currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Trip this expense belongs to
    pub trip_id: TripId,

    /// Category this expense is booked against
    pub category_id: CategoryId,

    /// Short description ("Hotel", "Lunch")
    pub title: String,

    /// Total amount in trip currency
    pub amount: f64,

    /// First day covered by the expense
    pub start_date: NaiveDate,

    /// Last day covered, when the expense spans several days
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// How it was paid ("cash", "card")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Where it was spent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    /// Create a new single-day expense
    pub fn new(
        trip_id: TripId,
        category_id: CategoryId,
        title: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            trip_id,
            category_id,
            title: title.into(),
            amount,
            start_date: date,
            end_date: None,
            payment_method: None,
            location: None,
            notes: None,
        }
    }

    /// Make this expense span through `end_date` (inclusive)
    pub fn spanning_until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the payment method
    pub fn paid_with(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// Whether the expense covers more than one day
    pub fn is_multi_day(&self) -> bool {
        matches!(self.end_date, Some(end) if end != self.start_date)
    }

    /// Last day covered by the expense
    pub fn last_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// Whether the expense overlaps the inclusive range `[from, to]`
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.last_date() >= from
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ExpenseValidationError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_multi_day() {
            write!(
                f,
                "{} {:.2} ({} to {})",
                self.title,
                self.amount,
                self.start_date,
                self.last_date()
            )
        } else {
            write!(f, "{} {:.2} ({})", self.title, self.amount, self.start_date)
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    NonPositiveAmount(f64),
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::EndBeforeStart { start, end } => {
                write!(f, "Expense ends ({}) before it starts ({})", end, start)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for crate::error::TripBudgetError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::EndBeforeStart { start, end } => {
                crate::error::TripBudgetError::InvalidRange { start, end }
            }
            other => crate::error::TripBudgetError::Validation(other.to_string()),
        }
    }
}
