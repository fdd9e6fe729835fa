//! Spending category model
//!
//! Each category receives a fixed share of the daily budget. Shares are
//! fractions (0.25 = a quarter of the day's budget) and may be zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Tolerance used when checking that category shares add up to one
pub const SHARE_SUM_TOLERANCE: f64 = 0.0001;

/// A spending category of a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Display colour as `#RRGGBB`
    pub color: String,

    /// Icon name used by front ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Fraction of the daily budget allocated to this category
    #[serde(default)]
    pub budget_share: f64,

    /// Whether this category was created from the defaults
    #[serde(default)]
    pub is_default: bool,

    /// Sort order for display
    #[serde(default)]
    pub display_order: i32,
}

impl Category {
    /// Create a new category with no budget share
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            icon: None,
            budget_share: 0.0,
            is_default: false,
            display_order: 0,
        }
    }

    /// Set the share of the daily budget
    pub fn with_share(mut self, budget_share: f64) -> Self {
        self.budget_share = budget_share;
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether any of the daily budget is earmarked for this category
    pub fn has_share(&self) -> bool {
        self.budget_share != 0.0
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        if !(0.0..=1.0).contains(&self.budget_share) {
            return Err(CategoryValidationError::ShareOutOfRange(self.budget_share));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Check that the shares of a category set add up to one.
///
/// A set where every share is zero is accepted: the trip simply has no
/// per-category allocation.
pub fn validate_allocations(categories: &[Category]) -> Result<(), CategoryValidationError> {
    for category in categories {
        category.validate()?;
    }

    let total: f64 = categories.iter().map(|c| c.budget_share).sum();
    if total != 0.0 && (total - 1.0).abs() > SHARE_SUM_TOLERANCE {
        return Err(CategoryValidationError::SharesDoNotSum(total));
    }

    Ok(())
}

/// Default categories created for a new trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Accommodation,
    Transportation,
    FoodAndDining,
    Activities,
    Shopping,
    HealthAndMedical,
    Entertainment,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Accommodation,
            Self::Transportation,
            Self::FoodAndDining,
            Self::Activities,
            Self::Shopping,
            Self::HealthAndMedical,
            Self::Entertainment,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Transportation => "Transportation",
            Self::FoodAndDining => "Food & Dining",
            Self::Activities => "Activities",
            Self::Shopping => "Shopping",
            Self::HealthAndMedical => "Health & Medical",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Accommodation => "#3B82F6",
            Self::Transportation => "#10B981",
            Self::FoodAndDining => "#F59E0B",
            Self::Activities => "#8B5CF6",
            Self::Shopping => "#EC4899",
            Self::HealthAndMedical => "#EF4444",
            Self::Entertainment => "#06B6D4",
            Self::Other => "#6B7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Accommodation => "home",
            Self::Transportation => "car",
            Self::FoodAndDining => "utensils",
            Self::Activities => "ticket",
            Self::Shopping => "shopping-bag",
            Self::HealthAndMedical => "heart-pulse",
            Self::Entertainment => "music",
            Self::Other => "more-horizontal",
        }
    }

    pub fn budget_share(&self) -> f64 {
        match self {
            Self::Accommodation => 0.35,
            Self::Transportation => 0.20,
            Self::FoodAndDining => 0.25,
            Self::Activities => 0.15,
            Self::Shopping => 0.05,
            Self::HealthAndMedical | Self::Entertainment | Self::Other => 0.0,
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self, display_order: i32) -> Category {
        let mut category = Category::new(self.name(), self.color())
            .with_share(self.budget_share())
            .with_icon(self.icon());
        category.is_default = true;
        category.display_order = display_order;
        category
    }
}

/// Build the full default category set in display order
pub fn default_categories() -> Vec<Category> {
    DefaultCategory::all()
        .iter()
        .enumerate()
        .map(|(i, d)| d.to_category(i as i32))
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
    ShareOutOfRange(f64),
    SharesDoNotSum(f64),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 100)", len)
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid colour '{}': expected #RRGGBB", color)
            }
            Self::ShareOutOfRange(share) => {
                write!(f, "Budget share {} must be between 0 and 1", share)
            }
            Self::SharesDoNotSum(total) => {
                write!(f, "Budget shares must sum to 1, got {:.4}", total)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

impl From<CategoryValidationError> for crate::error::TripBudgetError {
    fn from(err: CategoryValidationError) -> Self {
        crate::error::TripBudgetError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food", "#F59E0B");
        assert_eq!(category.budget_share, 0.0);
        assert!(!category.has_share());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_category_validation() {
        let mut category = Category::new("Food", "#F59E0B");

        category.color = "orange".into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));

        category.color = "#F59E0B".into();
        category.budget_share = 1.5;
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::ShareOutOfRange(1.5))
        );

        category.budget_share = 0.5;
        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_default_categories_sum_to_one() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 8);
        assert_eq!(defaults[0].name, "Accommodation");
        assert!(defaults.iter().all(|c| c.is_default));
        assert!(validate_allocations(&defaults).is_ok());
    }

    #[test]
    fn test_allocations_must_sum_to_one() {
        let categories = vec![
            Category::new("Food", "#F59E0B").with_share(0.5),
            Category::new("Hotel", "#3B82F6").with_share(0.3),
        ];
        assert!(matches!(
            validate_allocations(&categories),
            Err(CategoryValidationError::SharesDoNotSum(_))
        ));
    }

    #[test]
    fn test_all_zero_allocations_accepted() {
        let categories = vec![
            Category::new("Food", "#F59E0B"),
            Category::new("Hotel", "#3B82F6"),
        ];
        assert!(validate_allocations(&categories).is_ok());
    }
}
