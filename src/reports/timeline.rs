//! Trip Timeline Report
//!
//! Statistics for every day of a trip, in date order.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::{double_separator, format_amount, format_optional_amount, format_status_badge};
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::models::{BudgetStatus, Category, DailyBudgetStatistics, Expense, Trip};
use crate::services::{DailyStatisticsCalculator, StatusClassifier};

/// One row of the timeline
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub status: BudgetStatus,
    pub statistics: DailyBudgetStatistics,
}

/// Day-by-day statistics for a whole trip
#[derive(Debug, Clone, Serialize)]
pub struct TripTimeline {
    pub trip_name: String,
    pub currency_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: Option<f64>,
    pub entries: Vec<TimelineEntry>,
}

/// Flat CSV row
#[derive(Debug, Serialize)]
struct TimelineCsvRow<'a> {
    date: NaiveDate,
    day: i64,
    status: &'a str,
    daily_budget: Option<f64>,
    spent: f64,
    remaining: Option<f64>,
    percentage_used: Option<f64>,
    expense_count: usize,
    cumulative_budget_past: Option<f64>,
    cumulative_spent_past: Option<f64>,
    cumulative_savings_past: Option<f64>,
    adjusted_daily_budget: Option<f64>,
}

impl TripTimeline {
    pub fn generate(
        trip: &Trip,
        categories: &[Category],
        expenses: &[Expense],
        classifier: &StatusClassifier,
        today: NaiveDate,
    ) -> TripBudgetResult<Self> {
        let entries = DailyStatisticsCalculator::new(trip, categories, expenses)
            .compute_all()?
            .into_iter()
            .map(|statistics| TimelineEntry {
                status: classifier.classify(&statistics, today),
                statistics,
            })
            .collect();

        Ok(Self {
            trip_name: trip.name.clone(),
            currency_code: trip.currency_code.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            total_budget: trip.total_budget,
            entries,
        })
    }

    pub fn total_spent(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.statistics.total_spent_today)
            .sum()
    }

    /// Days whose spend exceeded the daily budget
    pub fn over_budget_days(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.statistics.is_over_budget)
            .count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, decimals: usize, date_format: &str) -> String {
        let currency = self.currency_code.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "Timeline: {} ({} to {})\n",
            self.trip_name,
            self.start_date.format(date_format),
            self.end_date.format(date_format)
        ));
        output.push_str(&double_separator(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>4} {:>14} {:>14} {:>8} {:>14} {:<18}\n",
            "Date", "Day", "Spent", "Budget", "Used", "Saved before", "Status"
        ));

        for entry in &self.entries {
            let stats = &entry.statistics;
            let used = stats
                .percentage_used_today
                .map(|p| format!("{:.0}%", p))
                .unwrap_or_else(|| "—".to_string());
            let saved = stats
                .cumulative_savings_past
                .map(|s| format!("{:.*}", decimals, s))
                .unwrap_or_else(|| "—".to_string());
            let budget = stats
                .daily_budget
                .map(|b| format!("{:.*}", decimals, b))
                .unwrap_or_else(|| "—".to_string());

            output.push_str(&format!(
                "{:<12} {:>4} {:>14.*} {:>14} {:>8} {:>14} {:<18}\n",
                stats.date.format(date_format).to_string(),
                stats.days_into_trip,
                decimals,
                stats.total_spent_today,
                budget,
                used,
                saved,
                format_status_badge(entry.status)
            ));
        }

        output.push_str(&double_separator(96));
        output.push('\n');
        output.push_str(&format!(
            "Total spent: {}   Budget: {}   Days over budget: {}\n",
            format_amount(self.total_spent(), decimals, currency),
            format_optional_amount(self.total_budget, decimals, currency),
            self.over_budget_days()
        ));

        output
    }

    /// Export the timeline to CSV, one row per day
    pub fn export_csv<W: Write>(&self, writer: W) -> TripBudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for entry in &self.entries {
            let stats = &entry.statistics;
            csv_writer.serialize(TimelineCsvRow {
                date: stats.date,
                day: stats.days_into_trip,
                status: entry.status.label(),
                daily_budget: stats.daily_budget,
                spent: stats.total_spent_today,
                remaining: stats.remaining_today,
                percentage_used: stats.percentage_used_today,
                expense_count: stats.expense_count_today,
                cumulative_budget_past: stats.cumulative_budget_past,
                cumulative_spent_past: stats.cumulative_spent_past,
                cumulative_savings_past: stats.cumulative_savings_past,
                adjusted_daily_budget: stats.adjusted_daily_budget,
            })?;
        }
        csv_writer
            .flush()
            .map_err(|e| TripBudgetError::Export(e.to_string()))?;
        Ok(())
    }
}
