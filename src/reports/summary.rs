//! Trip Summary Report
//!
//! Terminal and CSV rendering of `TripSummary`.

use std::io::Write;

use serde::Serialize;

use crate::display::{
    double_separator, format_amount, format_bar, format_optional_amount, format_percentage,
    separator, truncate,
};
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::services::TripSummary;

#[derive(Debug, Serialize)]
struct CategoryCsvRow<'a> {
    category: &'a str,
    total: f64,
    count: usize,
    percentage: f64,
}

/// Format the summary for terminal display
pub fn format_summary_terminal(summary: &TripSummary, decimals: usize) -> String {
    let currency = summary.currency_code.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "Trip Summary: {} ({} to {}, {} days)\n",
        summary.trip_name, summary.start_date, summary.end_date, summary.total_days
    ));
    output.push_str(&double_separator(72));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {}\n",
        "Total spent:",
        format_amount(summary.total_spent, decimals, currency)
    ));
    output.push_str(&format!(
        "{:<24} {}\n",
        "Total budget:",
        format_optional_amount(summary.total_budget, decimals, currency)
    ));
    output.push_str(&format!(
        "{:<24} {}\n",
        "Remaining:",
        format_optional_amount(summary.remaining_budget, decimals, currency)
    ));
    if let Some(pct) = summary.percentage_used {
        output.push_str(&format!(
            "{:<24} {} {}\n",
            "Used:",
            format_bar(pct, 100.0, 30),
            format_percentage(pct)
        ));
    }
    output.push_str(&format!(
        "{:<24} {}\n",
        "Average per day:",
        format_amount(summary.average_daily_spending, decimals, currency)
    ));
    output.push_str(&format!(
        "{:<24} {}\n\n",
        "Expenses:", summary.total_expenses
    ));

    output.push_str(&format!(
        "{:<30} {:>16} {:>8} {:>8}\n",
        "Category", "Amount", "Count", "%"
    ));
    output.push_str(&separator(72));
    output.push('\n');
    for category in &summary.by_category {
        output.push_str(&format!(
            "{:<30} {:>16.*} {:>8} {:>7.1}%\n",
            truncate(&category.category_name, 30),
            decimals,
            category.total,
            category.count,
            category.percentage
        ));
    }

    if !summary.by_payment_method.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>16} {:>8}\n",
            "Payment method", "Amount", "Count"
        ));
        output.push_str(&separator(72));
        output.push('\n');
        for method in &summary.by_payment_method {
            output.push_str(&format!(
                "{:<30} {:>16.*} {:>8}\n",
                truncate(&method.payment_method, 30),
                decimals,
                method.total,
                method.count
            ));
        }
    }

    output
}

/// Export the category breakdown to CSV
pub fn export_summary_csv<W: Write>(summary: &TripSummary, writer: W) -> TripBudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for category in &summary.by_category {
        csv_writer.serialize(CategoryCsvRow {
            category: &category.category_name,
            total: category.total,
            count: category.count,
            percentage: category.percentage,
        })?;
    }
    csv_writer.serialize(CategoryCsvRow {
        category: "TOTAL",
        total: summary.total_spent,
        count: summary.total_expenses,
        percentage: if summary.total_spent > 0.0 { 100.0 } else { 0.0 },
    })?;
    csv_writer
        .flush()
        .map_err(|e| TripBudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Trip};
    use chrono::NaiveDate;

    fn summary() -> TripSummary {
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        let trip = Trip::new("Lisbon", start, end, "EUR").with_total_budget(500.0);
        let food = Category::new("Food", "#F59E0B").with_share(1.0);
        let expenses = vec![
            Expense::new(trip.id, food.id, "Lunch", 30.0, start).paid_with("cash"),
            Expense::new(trip.id, food.id, "Dinner", 70.0, end).paid_with("card"),
        ];
        TripSummary::generate(&trip, &[food], &expenses).unwrap()
    }

    #[test]
    fn test_format_summary_terminal() {
        let output = format_summary_terminal(&summary(), 2);
        assert!(output.contains("Trip Summary: Lisbon"));
        assert!(output.contains("100.00 EUR"));
        assert!(output.contains("400.00 EUR"));
        assert!(output.contains("card"));
    }

    #[test]
    fn test_export_summary_csv() {
        let mut buffer = Vec::new();
        export_summary_csv(&summary(), &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("category,total,count,percentage\n"));
        assert!(csv.contains("Food,100.0,2,100.0"));
        assert!(csv.contains("TOTAL,100.0,2,100.0"));
    }
}
