//! Expense allocation across trip days
//!
//! Multi-day expenses are pro-rated evenly over every day they cover, with no
//! weighting by weekday or category. Everything here is pure: the same
//! expenses and date always give the same amounts.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{trace, warn};

use super::calendar;
use crate::error::TripBudgetResult;
use crate::models::{Category, CategoryId, Expense};

/// Relative tolerance for comparing allocated amounts
pub const AMOUNT_TOLERANCE: f64 = 1e-9;

/// Compare two amounts within `AMOUNT_TOLERANCE` scaled by their magnitude
pub fn amounts_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= AMOUNT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Spend of one category on one day
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category_id: CategoryId,
    pub total_spent: f64,
}

/// Aggregated spend on one day
#[derive(Debug, Clone, PartialEq)]
pub struct DaySpend {
    pub date: NaiveDate,
    pub total: f64,
    /// Categories with spend or a budget share, in category order; spend on
    /// categories missing from the category set follows at the end
    pub by_category: Vec<CategorySpend>,
    /// Expenses that touch this date
    pub expense_count: usize,
}

impl DaySpend {
    /// Spend booked to a category, zero when it has none
    pub fn spent_in(&self, category_id: CategoryId) -> f64 {
        self.by_category
            .iter()
            .find(|c| c.category_id == category_id)
            .map(|c| c.total_spent)
            .unwrap_or(0.0)
    }
}

/// Portion of `expense` that falls on `date`.
///
/// A single-day expense (no end date, or an end date equal to the start)
/// counts in full on its start date. A spanning expense contributes
/// `amount / days` to every day of its span. Zero outside the expense.
pub fn daily_amount(expense: &Expense, date: NaiveDate) -> TripBudgetResult<f64> {
    match expense.end_date {
        Some(end) if end != expense.start_date => {
            let days = calendar::days_inclusive(expense.start_date, end)?;
            if calendar::contains(date, expense.start_date, end) {
                Ok(expense.amount / days as f64)
            } else {
                Ok(0.0)
            }
        }
        _ => Ok(if date == expense.start_date {
            expense.amount
        } else {
            0.0
        }),
    }
}

/// Total pro-rated spend on `date` across all expenses
pub fn daily_total(expenses: &[Expense], date: NaiveDate) -> TripBudgetResult<f64> {
    let mut total = 0.0;
    for expense in expenses {
        total += daily_amount(expense, date)?;
    }
    Ok(total)
}

/// Sum of daily totals over `[start, end]`; zero when the range is empty
pub fn spent_between(
    expenses: &[Expense],
    start: NaiveDate,
    end: NaiveDate,
) -> TripBudgetResult<f64> {
    let mut total = 0.0;
    for day in calendar::days_between(start, end) {
        total += daily_total(expenses, day)?;
    }
    Ok(total)
}

/// Spend on `date`, grouped by category.
///
/// A category appears in `by_category` when it has spend that day or a
/// non-zero budget share; categories with neither are left out.
pub fn spent_on(
    expenses: &[Expense],
    categories: &[Category],
    date: NaiveDate,
) -> TripBudgetResult<DaySpend> {
    let mut totals: HashMap<CategoryId, f64> = HashMap::new();
    let mut seen_order: Vec<CategoryId> = Vec::new();
    let mut total = 0.0;
    let mut expense_count = 0;

    for expense in expenses {
        let amount = daily_amount(expense, date)?;
        if amount == 0.0 {
            continue;
        }
        expense_count += 1;

        trace!(expense = %expense.id, %date, amount, "allocated expense to day");
        total += amount;
        match totals.entry(expense.category_id) {
            Entry::Vacant(entry) => {
                seen_order.push(expense.category_id);
                entry.insert(amount);
            }
            Entry::Occupied(mut entry) => *entry.get_mut() += amount,
        }
    }

    let mut by_category = Vec::new();
    for category in categories {
        let spent = totals.remove(&category.id).unwrap_or(0.0);
        if spent != 0.0 || category.has_share() {
            by_category.push(CategorySpend {
                category_id: category.id,
                total_spent: spent,
            });
        }
    }

    for category_id in seen_order {
        if let Some(spent) = totals.remove(&category_id) {
            warn!(category = %category_id, %date, "spend booked to a category outside the trip's category set");
            by_category.push(CategorySpend {
                category_id,
                total_spent: spent,
            });
        }
    }

    Ok(DaySpend {
        date,
        total,
        by_category,
        expense_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &Category, amount: f64, day: u32) -> Expense {
        Expense::new(TripId::new(), category.id, "Test", amount, date(2025, 7, day))
    }

    #[test]
    fn test_single_day_expense_counts_only_on_its_date() {
        let food = Category::new("Food", "#F59E0B");
        let lunch = expense(&food, 60.0, 3);

        assert_eq!(daily_amount(&lunch, date(2025, 7, 3)).unwrap(), 60.0);
        assert_eq!(daily_amount(&lunch, date(2025, 7, 2)).unwrap(), 0.0);
        assert_eq!(daily_amount(&lunch, date(2025, 7, 4)).unwrap(), 0.0);
    }

    #[test]
    fn test_multi_day_expense_is_prorated_evenly() {
        let hotel_cat = Category::new("Hotel", "#3B82F6");
        let hotel = expense(&hotel_cat, 300.0, 1).spanning_until(date(2025, 7, 3));

        for day in 1..=3 {
            assert_eq!(daily_amount(&hotel, date(2025, 7, day)).unwrap(), 100.0);
        }
        assert_eq!(daily_amount(&hotel, date(2025, 7, 4)).unwrap(), 0.0);
        assert_eq!(daily_amount(&hotel, date(2025, 6, 30)).unwrap(), 0.0);
    }

    #[test]
    fn test_prorated_amounts_conserve_the_total() {
        let hotel_cat = Category::new("Hotel", "#3B82F6");
        for (amount, last_day) in [(100.0, 3), (1234.56, 7), (0.01, 9), (999.99, 31)] {
            let stay = expense(&hotel_cat, amount, 1).spanning_until(date(2025, 7, last_day));
            let allocated: f64 = calendar::days_between(stay.start_date, stay.last_date())
                .map(|d| daily_amount(&stay, d).unwrap())
                .sum();
            assert!(
                amounts_match(allocated, amount),
                "{} allocated as {}",
                amount,
                allocated
            );
        }
    }

    #[test]
    fn test_reversed_expense_range_is_an_error() {
        let food = Category::new("Food", "#F59E0B");
        let broken = expense(&food, 50.0, 5).spanning_until(date(2025, 7, 2));
        assert!(daily_amount(&broken, date(2025, 7, 3)).is_err());
    }

    #[test]
    fn test_spent_on_groups_by_category() {
        let food = Category::new("Food", "#F59E0B").with_share(0.5);
        let transport = Category::new("Transport", "#10B981").with_share(0.5);
        let expenses = vec![
            expense(&food, 20.0, 3),
            expense(&food, 15.0, 3),
            expense(&transport, 8.0, 3),
            expense(&transport, 99.0, 4),
        ];

        let spend = spent_on(&expenses, &[food.clone(), transport.clone()], date(2025, 7, 3)).unwrap();
        assert_eq!(spend.total, 43.0);
        assert_eq!(spend.expense_count, 3);
        assert_eq!(spend.by_category.len(), 2);
        assert_eq!(spend.spent_in(food.id), 35.0);
        assert_eq!(spend.spent_in(transport.id), 8.0);
    }

    #[test]
    fn test_spent_on_omits_idle_categories_without_share() {
        let food = Category::new("Food", "#F59E0B").with_share(1.0);
        let other = Category::new("Other", "#6B7280");
        let spend = spent_on(&[], &[food.clone(), other], date(2025, 7, 3)).unwrap();

        assert_eq!(spend.total, 0.0);
        assert_eq!(spend.by_category.len(), 1);
        assert_eq!(spend.by_category[0].category_id, food.id);
    }

    #[test]
    fn test_spent_on_keeps_spend_in_unknown_category() {
        let food = Category::new("Food", "#F59E0B");
        let stray = Category::new("Removed", "#000000");
        let expenses = vec![expense(&stray, 12.0, 3)];

        let spend = spent_on(&expenses, &[food], date(2025, 7, 3)).unwrap();
        assert_eq!(spend.by_category.len(), 1);
        assert_eq!(spend.by_category[0].category_id, stray.id);
        assert_eq!(spend.total, 12.0);
    }

    #[test]
    fn test_multi_day_expense_counted_on_every_day_it_covers() {
        let hotel_cat = Category::new("Hotel", "#3B82F6");
        let hotel = expense(&hotel_cat, 300.0, 2).spanning_until(date(2025, 7, 4));
        let categories = [hotel_cat];

        let first = spent_on(std::slice::from_ref(&hotel), &categories, date(2025, 7, 2)).unwrap();
        let middle = spent_on(std::slice::from_ref(&hotel), &categories, date(2025, 7, 3)).unwrap();
        let after = spent_on(std::slice::from_ref(&hotel), &categories, date(2025, 7, 5)).unwrap();
        assert_eq!(first.expense_count, 1);
        assert_eq!(middle.expense_count, 1);
        assert_eq!(middle.total, 100.0);
        assert_eq!(after.expense_count, 0);
    }

    #[test]
    fn test_spent_between() {
        let food = Category::new("Food", "#F59E0B");
        let expenses = vec![
            expense(&food, 40.0, 1),
            expense(&food, 30.0, 2).spanning_until(date(2025, 7, 4)),
        ];

        assert_eq!(spent_between(&expenses, date(2025, 7, 1), date(2025, 7, 2)).unwrap(), 50.0);
        assert_eq!(spent_between(&expenses, date(2025, 7, 1), date(2025, 7, 4)).unwrap(), 70.0);
        assert_eq!(spent_between(&expenses, date(2025, 7, 2), date(2025, 7, 1)).unwrap(), 0.0);
    }
}
