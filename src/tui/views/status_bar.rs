//! Hint bar
//!
//! Shows which directions the cursor can still move and the key bindings.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the hint bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = app.hints();
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let spans = vec![
        Span::styled(
            " ◀ h/← ",
            if hints.can_step_back { enabled } else { disabled },
        ),
        Span::raw("│"),
        Span::styled(
            " l/→ ▶ ",
            if hints.can_step_forward { enabled } else { disabled },
        ),
        Span::raw("│ t today │ g start │ G end │ q quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
