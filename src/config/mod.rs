//! Configuration module for tripbudget
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TripBudgetPaths;
pub use settings::Settings;
