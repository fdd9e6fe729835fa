//! Status badge rendering

use crate::models::BudgetStatus;

/// ANSI colour code for a status
fn ansi_color(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::NotStarted => "90",
        BudgetStatus::OnTrack => "32",
        BudgetStatus::Warning => "33",
        BudgetStatus::OverBudget => "31",
        BudgetStatus::Completed => "36",
    }
}

/// Plain badge, e.g. `[▲ Warning]`
pub fn format_status_badge(status: BudgetStatus) -> String {
    format!("[{} {}]", status.symbol(), status.label())
}

/// Badge wrapped in the status colour
pub fn format_status_badge_colored(status: BudgetStatus) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m",
        ansi_color(status),
        format_status_badge(status)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge() {
        assert_eq!(format_status_badge(BudgetStatus::OverBudget), "[✗ Over Budget]");
        assert!(format_status_badge_colored(BudgetStatus::OnTrack).starts_with("\x1b[32m"));
    }
}
