//! Budget status badge for a viewed day

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete badge state derived from a statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// A future day with nothing booked yet
    NotStarted,
    OnTrack,
    /// Spend has reached the warning threshold of the daily budget
    Warning,
    OverBudget,
    /// A past day that stayed within budget
    Completed,
}

impl BudgetStatus {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::OnTrack => "On Track",
            Self::Warning => "Warning",
            Self::OverBudget => "Over Budget",
            Self::Completed => "Completed",
        }
    }

    /// Short symbol for compact terminal output
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::NotStarted => "○",
            Self::OnTrack => "●",
            Self::Warning => "▲",
            Self::OverBudget => "✗",
            Self::Completed => "✓",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_uses_snake_case() {
        let json = serde_json::to_string(&BudgetStatus::OverBudget).unwrap();
        assert_eq!(json, "\"over_budget\"");
        let status: BudgetStatus = serde_json::from_str("\"not_started\"").unwrap();
        assert_eq!(status, BudgetStatus::NotStarted);
    }

    #[test]
    fn test_display() {
        assert_eq!(BudgetStatus::OnTrack.to_string(), "On Track");
    }
}
