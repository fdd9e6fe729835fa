//! TUI Views module
//!
//! The day view panels and the hint bar.

pub mod day;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::DayLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DayLayout::new(frame.area());

    day::render_header(frame, app, layout.header);
    match &app.statistics {
        Some(stats) => {
            day::render_summary(frame, app, stats, layout.summary);
            day::render_categories(frame, app, stats, layout.categories);
            day::render_rollover(frame, app, stats, layout.rollover);
        }
        None => {
            let message = app
                .error_message
                .as_deref()
                .unwrap_or("No statistics for this day");
            render_error(frame, layout.summary, message);
        }
    }
    status_bar::render(frame, app, layout.hint_bar);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .block(block);
    frame.render_widget(text, area);
}
