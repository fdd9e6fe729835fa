//! Whole-trip spending summary
//!
//! Totals over every expense of a trip, broken down by category and payment
//! method, plus the pro-rated spend of each trip day.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{allocator, calendar};
use crate::error::TripBudgetResult;
use crate::models::{Category, CategoryId, Expense, Trip};

/// Label used for expenses without a payment method
pub const UNSPECIFIED_PAYMENT_METHOD: &str = "unspecified";

/// Spend of one category over the whole trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_color: String,
    pub total: f64,
    pub count: usize,
    /// Share of the trip's total spend
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodTotal {
    pub payment_method: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Spending summary for a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_name: String,
    pub currency_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub total_expenses: usize,
    pub total_spent: f64,
    pub total_budget: Option<f64>,
    pub remaining_budget: Option<f64>,
    /// Capped at 100
    pub percentage_used: Option<f64>,
    /// Largest spend first
    pub by_category: Vec<CategoryTotal>,
    /// Largest spend first
    pub by_payment_method: Vec<PaymentMethodTotal>,
    /// One entry per trip day, pro-rated
    pub daily_spending: Vec<DailySpending>,
    pub average_daily_spending: f64,
}

impl TripSummary {
    pub fn generate(
        trip: &Trip,
        categories: &[Category],
        expenses: &[Expense],
    ) -> TripBudgetResult<Self> {
        let total_days = calendar::days_inclusive(trip.start_date, trip.end_date)?;
        let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();

        let mut category_totals: HashMap<CategoryId, (f64, usize)> = HashMap::new();
        let mut method_totals: HashMap<String, (f64, usize)> = HashMap::new();
        for expense in expenses {
            let entry = category_totals
                .entry(expense.category_id)
                .or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;

            let method = expense
                .payment_method
                .clone()
                .unwrap_or_else(|| UNSPECIFIED_PAYMENT_METHOD.to_string());
            let entry = method_totals.entry(method).or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let lookup: HashMap<CategoryId, &Category> =
            categories.iter().map(|c| (c.id, c)).collect();
        let mut by_category: Vec<CategoryTotal> = category_totals
            .into_iter()
            .map(|(category_id, (total, count))| {
                let category = lookup.get(&category_id).copied();
                CategoryTotal {
                    category_id,
                    category_name: category
                        .map_or_else(|| "Unknown".to_string(), |c| c.name.clone()),
                    category_color: category
                        .map_or_else(|| "#000000".to_string(), |c| c.color.clone()),
                    total,
                    count,
                    percentage: if total_spent > 0.0 {
                        total / total_spent * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();
        by_category.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        let mut by_payment_method: Vec<PaymentMethodTotal> = method_totals
            .into_iter()
            .map(|(payment_method, (total, count))| PaymentMethodTotal {
                payment_method,
                total,
                count,
            })
            .collect();
        by_payment_method.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.payment_method.cmp(&b.payment_method))
        });

        let mut daily_spending = Vec::with_capacity(total_days as usize);
        for date in calendar::days_between(trip.start_date, trip.end_date) {
            daily_spending.push(DailySpending {
                date,
                amount: allocator::daily_total(expenses, date)?,
            });
        }

        let remaining_budget = trip.total_budget.map(|budget| budget - total_spent);
        let percentage_used = trip.total_budget.map(|budget| {
            if budget > 0.0 {
                (total_spent / budget * 100.0).min(100.0)
            } else {
                0.0
            }
        });

        Ok(Self {
            trip_name: trip.name.clone(),
            currency_code: trip.currency_code.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            total_days,
            total_expenses: expenses.len(),
            total_spent,
            total_budget: trip.total_budget,
            remaining_budget,
            percentage_used,
            by_category,
            by_payment_method,
            daily_spending,
            average_daily_spending: total_spent / total_days as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn test_generate_summary() {
        let trip = Trip::new("Lisbon", date(1), date(4), "EUR").with_total_budget(400.0);
        let hotel = Category::new("Hotel", "#3B82F6").with_share(0.5);
        let food = Category::new("Food", "#F59E0B").with_share(0.5);
        let expenses = vec![
            Expense::new(trip.id, hotel.id, "Guesthouse", 200.0, date(1))
                .spanning_until(date(2))
                .paid_with("card"),
            Expense::new(trip.id, food.id, "Dinner", 40.0, date(2)).paid_with("cash"),
            Expense::new(trip.id, food.id, "Lunch", 10.0, date(3)),
        ];

        let summary = TripSummary::generate(&trip, &[hotel, food], &expenses).unwrap();
        assert_eq!(summary.total_days, 4);
        assert_eq!(summary.total_expenses, 3);
        assert_eq!(summary.total_spent, 250.0);
        assert_eq!(summary.remaining_budget, Some(150.0));
        assert_eq!(summary.percentage_used, Some(62.5));
        assert_eq!(summary.average_daily_spending, 62.5);

        assert_eq!(summary.by_category[0].category_name, "Hotel");
        assert_eq!(summary.by_category[0].percentage, 80.0);
        assert_eq!(summary.by_category[1].count, 2);

        assert_eq!(summary.by_payment_method.len(), 3);
        assert_eq!(summary.by_payment_method[0].payment_method, "card");

        let per_day: Vec<f64> = summary.daily_spending.iter().map(|d| d.amount).collect();
        assert_eq!(per_day, vec![100.0, 140.0, 10.0, 0.0]);
    }

    #[test]
    fn test_percentage_used_is_capped() {
        let trip = Trip::new("Short", date(1), date(2), "EUR").with_total_budget(100.0);
        let food = Category::new("Food", "#F59E0B");
        let expenses = vec![Expense::new(trip.id, food.id, "Banquet", 300.0, date(1))];

        let summary = TripSummary::generate(&trip, &[food], &expenses).unwrap();
        assert_eq!(summary.percentage_used, Some(100.0));
        assert_eq!(summary.remaining_budget, Some(-200.0));
    }

    #[test]
    fn test_summary_without_budget_or_expenses() {
        let trip = Trip::new("Open", date(1), date(5), "EUR");
        let summary = TripSummary::generate(&trip, &[], &[]).unwrap();

        assert_eq!(summary.total_spent, 0.0);
        assert!(summary.percentage_used.is_none());
        assert!(summary.remaining_budget.is_none());
        assert!(summary.by_category.is_empty());
        assert_eq!(summary.daily_spending.len(), 5);
    }

    #[test]
    fn test_unknown_category_is_labelled() {
        let trip = Trip::new("Lisbon", date(1), date(2), "EUR");
        let stray = Category::new("Gone", "#123456");
        let expenses = vec![Expense::new(trip.id, stray.id, "Taxi", 12.0, date(1))];

        let summary = TripSummary::generate(&trip, &[], &expenses).unwrap();
        assert_eq!(summary.by_category[0].category_name, "Unknown");
        assert_eq!(summary.by_category[0].category_color, "#000000");
    }
}
