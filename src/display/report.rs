//! Report formatting utilities for terminal output

/// Format an amount with a fixed number of decimals and the currency code
pub fn format_amount(amount: f64, decimals: usize, currency: &str) -> String {
    format!("{:.*} {}", decimals, amount, currency)
}

/// Format an optional amount, showing a dash when it is not set
pub fn format_optional_amount(amount: Option<f64>, decimals: usize, currency: &str) -> String {
    match amount {
        Some(value) => format_amount(value, decimals, currency),
        None => "—".to_string(),
    }
}

/// Format an amount green when non-negative, red when negative
pub fn format_amount_colored(amount: f64, decimals: usize, currency: &str) -> String {
    let text = format_amount(amount, decimals, currency);
    if amount < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text)
    } else {
        format!("\x1b[32m{}\x1b[0m", text)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
