//! Day view
//!
//! Header with the status badge, today's spend gauge, the per-category
//! table, and the rollover panel.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::display::truncate;
use crate::models::{BudgetStatus, DailyBudgetStatistics};
use crate::tui::app::App;

pub(crate) fn status_color(status: BudgetStatus) -> Color {
    match status {
        BudgetStatus::NotStarted => Color::DarkGray,
        BudgetStatus::OnTrack => Color::Green,
        BudgetStatus::Warning => Color::Yellow,
        BudgetStatus::OverBudget => Color::Red,
        BudgetStatus::Completed => Color::Cyan,
    }
}

fn amount(app: &App, value: f64) -> String {
    format!("{:.*} {}", app.ctx.decimals(), value, app.ctx.trip.currency_code)
}

fn optional_amount(app: &App, value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| amount(app, v))
}

fn signed_style(value: f64) -> Style {
    if value < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Render header
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.cursor.selected();
    let mut spans = vec![
        Span::styled(
            selected.format(app.ctx.date_format()).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    if let Some(stats) = &app.statistics {
        spans.push(Span::raw(format!(
            "Day {} of {}",
            stats.days_into_trip, stats.total_days
        )));
        spans.push(Span::raw("  "));
    }

    if let Some(status) = app.status {
        spans.push(Span::styled(
            format!(" {} {} ", status.symbol(), status.label()),
            Style::default()
                .fg(Color::Black)
                .bg(status_color(status))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(format!(" {} ", app.ctx.trip.name))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render today's spend against the daily budget
pub fn render_summary(frame: &mut Frame, app: &App, stats: &DailyBudgetStatistics, area: Rect) {
    let block = Block::default()
        .title(" Today ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let color = app.status.map(status_color).unwrap_or(Color::White);

    match (stats.daily_budget, stats.percentage_used_today) {
        (Some(budget), Some(pct)) => {
            let label = format!(
                "{} of {} ({:.0}%)  {} expense(s) today",
                amount(app, stats.total_spent_today),
                amount(app, budget),
                pct,
                stats.expense_count_today
            );
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(color).bg(Color::Black))
                .ratio((pct / 100.0).clamp(0.0, 1.0))
                .label(label);
            frame.render_widget(gauge, area);
        }
        _ => {
            let text = format!(
                "Spent {}  (no budget set)  {} expense(s) today",
                amount(app, stats.total_spent_today),
                stats.expense_count_today
            );
            frame.render_widget(Paragraph::new(text).block(block), area);
        }
    }
}

/// Render the per-category table
pub fn render_categories(
    frame: &mut Frame,
    app: &App,
    stats: &DailyBudgetStatistics,
    area: Rect,
) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if stats.by_category_today.is_empty() {
        let text = Paragraph::new("Nothing spent and no category allowances")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(20), // Name
        Constraint::Length(14), // Spent
        Constraint::Length(14), // Allowance
        Constraint::Length(14), // Remaining
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Category").style(bold),
        Cell::from("Spent").style(bold),
        Cell::from("Allowance").style(bold),
        Cell::from("Remaining").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = stats
        .by_category_today
        .iter()
        .map(|category| {
            Row::new(vec![
                Cell::from(truncate(&category.category_name, 20)),
                Cell::from(amount(app, category.total_spent)),
                Cell::from(amount(app, category.category_daily_budget)),
                Cell::from(amount(app, category.remaining_budget))
                    .style(signed_style(category.remaining_budget)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// Render cumulative savings and the adjusted daily budget
pub fn render_rollover(frame: &mut Frame, app: &App, stats: &DailyBudgetStatistics, area: Rect) {
    let block = Block::default()
        .title(" Rollover ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let mut lines = vec![
        Line::from(format!(
            "Budget so far:  {}",
            optional_amount(app, stats.cumulative_budget_past)
        )),
        Line::from(format!(
            "Spent so far:   {}",
            optional_amount(app, stats.cumulative_spent_past)
        )),
    ];

    let savings_span = match stats.cumulative_savings_past {
        Some(savings) => Span::styled(amount(app, savings), signed_style(savings)),
        None => Span::raw("—"),
    };
    lines.push(Line::from(vec![Span::raw("Saved so far:   "), savings_span]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Adjusted daily: "),
        Span::styled(
            optional_amount(app, stats.adjusted_daily_budget),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(format!(
        "Days left after today: {}",
        stats.days_remaining_after()
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
