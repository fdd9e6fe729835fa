//! Core data models for tripbudget
//!
//! This module contains the data structures of the trip budgeting domain:
//! trips, spending categories, expenses, and the derived daily statistics.

pub mod category;
pub mod expense;
pub mod ids;
pub mod statistics;
pub mod status;
pub mod trip;

pub use category::{default_categories, validate_allocations, Category, DefaultCategory};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, TripId};
pub use statistics::{CategoryDailyBudget, DailyBudgetStatistics};
pub use status::BudgetStatus;
pub use trip::Trip;
