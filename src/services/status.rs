//! Status classification for a statistics snapshot

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{BudgetStatus, DailyBudgetStatistics};

/// Percentage of the daily budget at which a day turns to `Warning`
pub const DEFAULT_WARNING_THRESHOLD: f64 = 80.0;

/// Maps a statistics snapshot and the current date to a `BudgetStatus`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusClassifier {
    warning_threshold: f64,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self {
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }
}

impl StatusClassifier {
    pub fn new(warning_threshold: f64) -> Self {
        Self { warning_threshold }
    }

    /// Classifier using the threshold from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.warning_threshold_percent)
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    /// Classify `stats` as seen on `today`.
    ///
    /// Rules are checked in order; the first match wins:
    /// 1. a future day no expense touches is `NotStarted`
    /// 2. spend above the daily budget is `OverBudget`
    /// 3. spend at or above the warning threshold is `Warning`
    /// 4. any other past day is `Completed`
    /// 5. otherwise `OnTrack`
    pub fn classify(&self, stats: &DailyBudgetStatistics, today: NaiveDate) -> BudgetStatus {
        if stats.date > today && stats.expense_count_today == 0 {
            BudgetStatus::NotStarted
        } else if stats.is_over_budget {
            BudgetStatus::OverBudget
        } else if stats.percentage_or_zero() >= self.warning_threshold {
            BudgetStatus::Warning
        } else if stats.date < today {
            BudgetStatus::Completed
        } else {
            BudgetStatus::OnTrack
        }
    }
}

/// Classify with the default warning threshold
pub fn classify_status(stats: &DailyBudgetStatistics, today: NaiveDate) -> BudgetStatus {
    StatusClassifier::default().classify(stats, today)
}
