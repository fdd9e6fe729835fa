//! Layout definitions for the TUI
//!
//! One screen: header, spend summary, category table beside the rollover
//! panel, and the hint bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the day browser
pub struct DayLayout {
    /// Date, day of trip, status badge
    pub header: Rect,
    /// Today's spend against the daily budget
    pub summary: Rect,
    pub categories: Rect,
    pub rollover: Rect,
    pub hint_bar: Rect,
}

impl DayLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Summary
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Hint bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            summary: vertical[1],
            categories: body[0],
            rollover: body[1],
            hint_bar: vertical[3],
        }
    }
}
