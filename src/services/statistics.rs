//! Daily statistics calculator
//!
//! Turns a trip, its categories, and its expenses into the statistics
//! snapshot for one date: today's spend against the daily budget, the
//! per-category breakdown, the rollover from earlier days, and the adjusted
//! daily budget for the rest of the trip.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::{allocator, calendar};
use crate::error::TripBudgetResult;
use crate::models::{
    Category, CategoryDailyBudget, CategoryId, DailyBudgetStatistics, Expense, Trip,
};

/// Computes statistics snapshots for a fixed set of trip data
pub struct DailyStatisticsCalculator<'a> {
    trip: &'a Trip,
    categories: &'a [Category],
    expenses: &'a [Expense],
}

impl<'a> DailyStatisticsCalculator<'a> {
    /// Create a calculator over one trip's data
    pub fn new(trip: &'a Trip, categories: &'a [Category], expenses: &'a [Expense]) -> Self {
        Self {
            trip,
            categories,
            expenses,
        }
    }

    /// Compute the snapshot for `date`.
    ///
    /// Fails with `InvalidRange` when the trip ends before it starts, and with
    /// `OutOfRange` for dates outside the trip; callers route date changes
    /// through `DateCursor`, which never produces such a date.
    pub fn compute(&self, date: NaiveDate) -> TripBudgetResult<DailyBudgetStatistics> {
        let trip = self.trip;
        let total_days = calendar::days_inclusive(trip.start_date, trip.end_date)?;
        trip.ensure_contains(date)?;
        let daily_budget = match trip.total_budget {
            Some(total) if total_days > 0 => Some(total / total_days as f64),
            _ => None,
        };

        let spend = allocator::spent_on(self.expenses, self.categories, date)?;
        let total_spent_today = spend.total;

        let remaining_today = daily_budget.map(|budget| budget - total_spent_today);
        let percentage_used_today = daily_budget.map(|budget| {
            if budget > 0.0 {
                total_spent_today / budget * 100.0
            } else {
                0.0
            }
        });
        let is_over_budget = daily_budget.is_some_and(|budget| total_spent_today > budget);

        let lookup: HashMap<CategoryId, &Category> =
            self.categories.iter().map(|c| (c.id, c)).collect();
        let by_category_today = spend
            .by_category
            .iter()
            .map(|cs| {
                let category = lookup.get(&cs.category_id).copied();
                let share = category.map_or(0.0, |c| c.budget_share);
                let category_daily_budget = daily_budget.map_or(0.0, |budget| share * budget);
                CategoryDailyBudget {
                    category_id: cs.category_id,
                    category_name: category
                        .map_or_else(|| "Unknown".to_string(), |c| c.name.clone()),
                    category_color: category
                        .map_or_else(|| "#000000".to_string(), |c| c.color.clone()),
                    category_icon: category.and_then(|c| c.icon.clone()),
                    total_spent: cs.total_spent,
                    category_daily_budget,
                    remaining_budget: category_daily_budget - cs.total_spent,
                }
            })
            .collect();

        let days_before = (date - trip.start_date).num_days();
        let (cumulative_budget_past, cumulative_spent_past, cumulative_savings_past) =
            match daily_budget {
                Some(budget) if days_before > 0 => {
                    let last_past_day = date - Days::new(1);
                    let spent_past =
                        allocator::spent_between(self.expenses, trip.start_date, last_past_day)?;
                    let budget_past = budget * days_before as f64;
                    (
                        Some(budget_past),
                        Some(spent_past),
                        Some(budget_past - spent_past),
                    )
                }
                _ => (None, None, None),
            };

        let adjusted_daily_budget = match (trip.total_budget, daily_budget) {
            (Some(total), Some(_)) => {
                let remaining_days = calendar::days_inclusive(date, trip.end_date)?;
                let remaining_total = total - cumulative_spent_past.unwrap_or(0.0);
                Some(remaining_total / remaining_days as f64)
            }
            _ => None,
        };

        let days_into_trip = calendar::day_index(trip.start_date, date)?;

        debug!(
            %date,
            total_spent_today,
            ?daily_budget,
            expense_count = spend.expense_count,
            "computed daily statistics"
        );

        Ok(DailyBudgetStatistics {
            date,
            daily_budget,
            total_spent_today,
            remaining_today,
            percentage_used_today,
            expense_count_today: spend.expense_count,
            by_category_today,
            is_over_budget,
            days_into_trip,
            total_days,
            cumulative_budget_past,
            cumulative_spent_past,
            cumulative_savings_past,
            adjusted_daily_budget,
        })
    }

    /// Snapshots for every day of the trip, in order
    pub fn compute_all(&self) -> TripBudgetResult<Vec<DailyBudgetStatistics>> {
        calendar::days_inclusive(self.trip.start_date, self.trip.end_date)?;
        calendar::days_between(self.trip.start_date, self.trip.end_date)
            .map(|date| self.compute(date))
            .collect()
    }
}

/// Compute the statistics snapshot for one date of a trip
pub fn compute_daily_statistics(
    trip: &Trip,
    categories: &[Category],
    expenses: &[Expense],
    date: NaiveDate,
) -> TripBudgetResult<DailyBudgetStatistics> {
    DailyStatisticsCalculator::new(trip, categories, expenses).compute(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TripBudgetError;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    /// Ten days, 1000 total: 100 per day
    fn trip() -> Trip {
        Trip::new("Lisbon", date(1), date(10), "EUR").with_total_budget(1000.0)
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Food", "#F59E0B").with_share(0.6),
            Category::new("Transport", "#10B981").with_share(0.4),
            Category::new("Other", "#6B7280"),
        ]
    }

    fn spend(trip: &Trip, category: &Category, amount: f64, day: u32) -> Expense {
        Expense::new(trip.id, category.id, "Test", amount, date(day))
    }

    #[test]
    fn test_single_expense_day() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 60.0, 3)];

        let stats = compute_daily_statistics(&trip, &cats, &expenses, date(3)).unwrap();
        assert_eq!(stats.total_days, 10);
        assert_eq!(stats.daily_budget, Some(100.0));
        assert_eq!(stats.total_spent_today, 60.0);
        assert_eq!(stats.remaining_today, Some(40.0));
        assert_eq!(stats.percentage_used_today, Some(60.0));
        assert!(!stats.is_over_budget);
        assert_eq!(stats.expense_count_today, 1);
        assert_eq!(stats.days_into_trip, 3);
    }

    #[test]
    fn test_multi_day_expense_spreads_over_days() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 300.0, 1).spanning_until(date(3))];

        for day in 1..=3 {
            let stats = compute_daily_statistics(&trip, &cats, &expenses, date(day)).unwrap();
            assert!(approx_eq(stats.total_spent_today, 100.0));
            assert_eq!(stats.expense_count_today, 1);
        }
        let after = compute_daily_statistics(&trip, &cats, &expenses, date(4)).unwrap();
        assert_eq!(after.total_spent_today, 0.0);
        assert_eq!(after.expense_count_today, 0);
    }

    #[test]
    fn test_rollover_and_adjusted_budget() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 40.0, 1)];

        let day_two = compute_daily_statistics(&trip, &cats, &expenses, date(2)).unwrap();
        assert_eq!(day_two.cumulative_budget_past, Some(100.0));
        assert_eq!(day_two.cumulative_spent_past, Some(40.0));
        assert_eq!(day_two.cumulative_savings_past, Some(60.0));
        assert!(approx_eq(day_two.adjusted_daily_budget.unwrap(), 960.0 / 9.0));
    }

    #[test]
    fn test_first_day_has_no_rollover() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 40.0, 1)];

        let day_one = compute_daily_statistics(&trip, &cats, &expenses, date(1)).unwrap();
        assert!(day_one.cumulative_budget_past.is_none());
        assert!(day_one.cumulative_spent_past.is_none());
        assert!(day_one.cumulative_savings_past.is_none());
        assert_eq!(day_one.adjusted_daily_budget, Some(100.0));
    }

    #[test]
    fn test_overspending_shows_as_negative_savings() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![
            spend(&trip, &cats[0], 180.0, 1),
            spend(&trip, &cats[1], 150.0, 2),
        ];

        let stats = compute_daily_statistics(&trip, &cats, &expenses, date(3)).unwrap();
        assert_eq!(stats.cumulative_budget_past, Some(200.0));
        assert_eq!(stats.cumulative_spent_past, Some(330.0));
        assert_eq!(stats.cumulative_savings_past, Some(-130.0));
        assert!(approx_eq(stats.adjusted_daily_budget.unwrap(), 670.0 / 8.0));
    }

    #[test]
    fn test_over_budget_day() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 120.0, 5)];

        let stats = compute_daily_statistics(&trip, &cats, &expenses, date(5)).unwrap();
        assert!(stats.is_over_budget);
        assert_eq!(stats.remaining_today, Some(-20.0));
        assert_eq!(stats.percentage_used_today, Some(120.0));
    }

    #[test]
    fn test_category_breakdown() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 75.0, 4)];

        let stats = compute_daily_statistics(&trip, &cats, &expenses, date(4)).unwrap();
        // "Other" has no share and no spend
        assert_eq!(stats.by_category_today.len(), 2);

        let food = &stats.by_category_today[0];
        assert_eq!(food.category_name, "Food");
        assert_eq!(food.total_spent, 75.0);
        assert!(approx_eq(food.category_daily_budget, 60.0));
        assert!(approx_eq(food.remaining_budget, -15.0));
        assert!(food.is_over());

        let transport = &stats.by_category_today[1];
        assert_eq!(transport.total_spent, 0.0);
        assert!(approx_eq(transport.remaining_budget, 40.0));
    }

    #[test]
    fn test_no_budget_degrades_to_spend_only() {
        let trip = Trip::new("Open", date(1), date(10), "EUR");
        let cats = categories();
        let expenses = vec![
            spend(&trip, &cats[0], 500.0, 1),
            spend(&trip, &cats[1], 70.0, 4),
        ];

        let stats = compute_daily_statistics(&trip, &cats, &expenses, date(4)).unwrap();
        assert_eq!(stats.total_spent_today, 70.0);
        assert!(stats.daily_budget.is_none());
        assert!(stats.remaining_today.is_none());
        assert!(stats.percentage_used_today.is_none());
        assert!(!stats.is_over_budget);
        assert!(stats.cumulative_budget_past.is_none());
        assert!(stats.cumulative_spent_past.is_none());
        assert!(stats.cumulative_savings_past.is_none());
        assert!(stats.adjusted_daily_budget.is_none());
        assert!(stats
            .by_category_today
            .iter()
            .all(|c| c.category_daily_budget == 0.0));
    }

    #[test]
    fn test_zero_budget_reports_zero_percentage() {
        let trip = Trip::new("Free", date(1), date(2), "EUR").with_total_budget(0.0);
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 5.0, 1)];

        let stats = compute_daily_statistics(&trip, &cats, &expenses, date(1)).unwrap();
        assert_eq!(stats.percentage_used_today, Some(0.0));
        assert!(stats.is_over_budget);
    }

    #[test]
    fn test_empty_day() {
        let trip = trip();
        let stats = compute_daily_statistics(&trip, &[], &[], date(6)).unwrap();
        assert_eq!(stats.total_spent_today, 0.0);
        assert_eq!(stats.expense_count_today, 0);
        assert!(stats.by_category_today.is_empty());
        assert_eq!(stats.percentage_used_today, Some(0.0));
    }

    #[test]
    fn test_date_outside_trip_is_rejected() {
        let trip = trip();
        let err = compute_daily_statistics(&trip, &[], &[], date(11)).unwrap_err();
        assert!(matches!(err, TripBudgetError::OutOfRange { .. }));

        let before = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert!(compute_daily_statistics(&trip, &[], &[], before)
            .unwrap_err()
            .is_out_of_range());
    }

    #[test]
    fn test_reversed_trip_is_an_invalid_range() {
        let trip = Trip::new("Backwards", date(10), date(1), "EUR").with_total_budget(1000.0);
        let err = compute_daily_statistics(&trip, &[], &[], date(5)).unwrap_err();
        assert!(matches!(err, TripBudgetError::InvalidRange { .. }));
    }

    #[test]
    fn test_expenses_before_trip_count_toward_nothing() {
        let trip = trip();
        let cats = categories();
        let early = Expense::new(
            trip.id,
            cats[0].id,
            "Visa",
            50.0,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        );

        let stats = compute_daily_statistics(&trip, &cats, &[early], date(2)).unwrap();
        assert_eq!(stats.cumulative_spent_past, Some(0.0));
    }

    #[test]
    fn test_compute_all_covers_every_day() {
        let trip = trip();
        let cats = categories();
        let expenses = vec![spend(&trip, &cats[0], 250.0, 2).spanning_until(date(6))];

        let all = DailyStatisticsCalculator::new(&trip, &cats, &expenses)
            .compute_all()
            .unwrap();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].date, date(1));
        assert_eq!(all[9].date, date(10));

        let spent: f64 = all.iter().map(|s| s.total_spent_today).sum();
        assert!(approx_eq(spent, 250.0));
    }
}
