//! Display formatting for terminal output
//!
//! Amount, percentage and bar helpers shared by the reports and the CLI,
//! plus the status badge.

pub mod report;
pub mod status;

pub use report::{
    double_separator, format_amount, format_amount_colored, format_bar, format_optional_amount,
    format_percentage, separator, truncate,
};
pub use status::{format_status_badge, format_status_badge_colored};
