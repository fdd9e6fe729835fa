//! CSV Export functionality
//!
//! Exports the trip timeline and the raw expense list to CSV.

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{TripBudgetError, TripBudgetResult};
use crate::models::{Category, Expense};
use crate::reports::TripTimeline;

#[derive(Debug, Serialize)]
struct ExpenseCsvRow<'a> {
    id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: i64,
    title: &'a str,
    category: &'a str,
    amount: f64,
    payment_method: &'a str,
    location: &'a str,
    notes: &'a str,
}

/// Export the day-by-day timeline to CSV
pub fn export_timeline_csv<W: Write>(timeline: &TripTimeline, writer: W) -> TripBudgetResult<()> {
    timeline.export_csv(writer)
}

/// Export every expense to CSV, with category names resolved
pub fn export_expenses_csv<W: Write>(
    categories: &[Category],
    expenses: &[Expense],
    writer: W,
) -> TripBudgetResult<()> {
    let category_names: HashMap<_, _> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    for expense in expenses {
        let last = expense.last_date();
        csv_writer.serialize(ExpenseCsvRow {
            id: expense.id.to_string(),
            start_date: expense.start_date,
            end_date: last,
            days: (last - expense.start_date).num_days() + 1,
            title: &expense.title,
            category: category_names
                .get(&expense.category_id)
                .copied()
                .unwrap_or("Unknown"),
            amount: expense.amount,
            payment_method: expense.payment_method.as_deref().unwrap_or(""),
            location: expense.location.as_deref().unwrap_or(""),
            notes: expense.notes.as_deref().unwrap_or(""),
        })?;
    }
    csv_writer
        .flush()
        .map_err(|e| TripBudgetError::Export(e.to_string()))?;
    Ok(())
}
