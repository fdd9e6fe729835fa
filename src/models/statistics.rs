//! Daily budget statistics snapshot
//!
//! A snapshot is derived, never persisted, and recomputed whenever the viewed
//! date changes. Field names and nullability form the JSON contract consumed
//! by front ends, so `Option` fields serialize as `null` rather than being
//! skipped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// Spend and allowance of one category on the viewed day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDailyBudget {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_color: String,
    pub category_icon: Option<String>,
    /// Pro-rated spend booked to this category on the day
    pub total_spent: f64,
    /// `budget_share * daily_budget`, zero when the trip has no budget
    pub category_daily_budget: f64,
    /// May be negative: overspending is reported, not clamped
    pub remaining_budget: f64,
}

impl CategoryDailyBudget {
    /// Whether spend in this category exceeds its daily allowance
    pub fn is_over(&self) -> bool {
        self.remaining_budget < 0.0
    }
}

/// Complete per-day statistics for one trip date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBudgetStatistics {
    pub date: NaiveDate,
    pub daily_budget: Option<f64>,
    pub total_spent_today: f64,
    pub remaining_today: Option<f64>,
    pub percentage_used_today: Option<f64>,
    /// Number of expenses that touch this date
    pub expense_count_today: usize,
    pub by_category_today: Vec<CategoryDailyBudget>,
    pub is_over_budget: bool,
    /// 1-based position of the date within the trip
    pub days_into_trip: i64,
    pub total_days: i64,
    pub cumulative_budget_past: Option<f64>,
    pub cumulative_spent_past: Option<f64>,
    /// Positive when earlier days came in under budget
    pub cumulative_savings_past: Option<f64>,
    pub adjusted_daily_budget: Option<f64>,
}

impl DailyBudgetStatistics {
    /// Whether a budget is configured for the trip
    pub fn has_budget(&self) -> bool {
        self.daily_budget.is_some()
    }

    /// Days left after this one
    pub fn days_remaining_after(&self) -> i64 {
        self.total_days - self.days_into_trip
    }

    /// Percentage used, treating an unset value as zero
    pub fn percentage_or_zero(&self) -> f64 {
        self.percentage_used_today.unwrap_or(0.0)
    }
}
