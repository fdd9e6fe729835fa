//! Daily Report
//!
//! Renders the statistics snapshot of one trip day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::{
    format_amount, format_amount_colored, format_bar, format_optional_amount, format_percentage,
    format_status_badge, separator, truncate,
};
use crate::error::TripBudgetResult;
use crate::models::{BudgetStatus, Category, DailyBudgetStatistics, Expense, Trip};
use crate::services::{DailyStatisticsCalculator, NavigationHints, StatusClassifier};

const WIDTH: usize = 72;

/// One day's statistics together with its status
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub trip_name: String,
    pub currency_code: String,
    pub status: BudgetStatus,
    pub statistics: DailyBudgetStatistics,
}

impl DailyReport {
    pub fn generate(
        trip: &Trip,
        categories: &[Category],
        expenses: &[Expense],
        date: NaiveDate,
        classifier: &StatusClassifier,
        today: NaiveDate,
    ) -> TripBudgetResult<Self> {
        let statistics =
            DailyStatisticsCalculator::new(trip, categories, expenses).compute(date)?;
        let status = classifier.classify(&statistics, today);
        Ok(Self {
            trip_name: trip.name.clone(),
            currency_code: trip.currency_code.clone(),
            status,
            statistics,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, decimals: usize, date_format: &str) -> String {
        let stats = &self.statistics;
        let currency = self.currency_code.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "{}: {}  (day {} of {})  {}\n",
            self.trip_name,
            stats.date.format(date_format),
            stats.days_into_trip,
            stats.total_days,
            format_status_badge(self.status)
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<22} {}\n",
            "Spent today:",
            format_amount(stats.total_spent_today, decimals, currency)
        ));
        output.push_str(&format!(
            "{:<22} {}\n",
            "Daily budget:",
            format_optional_amount(stats.daily_budget, decimals, currency)
        ));
        if let Some(remaining) = stats.remaining_today {
            output.push_str(&format!(
                "{:<22} {}\n",
                "Remaining today:",
                format_amount_colored(remaining, decimals, currency)
            ));
        }
        if let (Some(pct), Some(budget)) = (stats.percentage_used_today, stats.daily_budget) {
            output.push_str(&format!(
                "{:<22} {} {}\n",
                "Used:",
                format_bar(stats.total_spent_today, budget, 30),
                format_percentage(pct)
            ));
        }
        output.push_str(&format!(
            "{:<22} {}\n",
            "Expenses today:", stats.expense_count_today
        ));

        if !stats.by_category_today.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<24} {:>14} {:>14} {:>14}\n",
                "Category", "Spent", "Allowance", "Remaining"
            ));
            output.push_str(&separator(WIDTH));
            output.push('\n');
            for category in &stats.by_category_today {
                output.push_str(&format!(
                    "{:<24} {:>14.*} {:>14.*} {:>14.*}{}\n",
                    truncate(&category.category_name, 24),
                    decimals,
                    category.total_spent,
                    decimals,
                    category.category_daily_budget,
                    decimals,
                    category.remaining_budget,
                    if category.is_over() { " !" } else { "" }
                ));
            }
        }

        if stats.has_budget() {
            output.push('\n');
            output.push_str(&format!(
                "{:<22} {}\n",
                "Budget so far:",
                format_optional_amount(stats.cumulative_budget_past, decimals, currency)
            ));
            output.push_str(&format!(
                "{:<22} {}\n",
                "Spent so far:",
                format_optional_amount(stats.cumulative_spent_past, decimals, currency)
            ));
            if let Some(savings) = stats.cumulative_savings_past {
                output.push_str(&format!(
                    "{:<22} {}\n",
                    "Saved so far:",
                    format_amount_colored(savings, decimals, currency)
                ));
            }
            output.push_str(&format!(
                "{:<22} {}\n",
                "Adjusted daily budget:",
                format_optional_amount(stats.adjusted_daily_budget, decimals, currency)
            ));
        }

        output
    }
}

/// One-line hint of where the cursor can still move
pub fn format_hints(hints: NavigationHints) -> String {
    match (hints.can_step_back, hints.can_step_forward) {
        (true, true) => "◀ earlier days | later days ▶".to_string(),
        (true, false) => "◀ earlier days | last day of the trip".to_string(),
        (false, true) => "first day of the trip | later days ▶".to_string(),
        (false, false) => "single-day trip".to_string(),
    }
}
