//! Latest status headline
//!
//! Displays the most recently taken action, or the idle placeholder when
//! no action has been observed yet.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use vigil_app::App;

/// Render the latest status panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Latest Status ");

    let lines = match app.session().latest_status() {
        None => vec![Line::from(Span::styled(
            "System is monitoring... No active threats.",
            Style::default().fg(Color::Green),
        ))],
        Some(entry) => vec![
            Line::from(vec![
                Span::styled(
                    entry.threat_type.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    super::format_timestamp(entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(vec![Span::raw("Action: "), Span::raw(entry.action_taken.clone())]),
            Line::from(vec![
                Span::raw("Effectiveness: "),
                Span::styled(entry.effectiveness.clone(), Style::default().fg(Color::Yellow)),
            ]),
        ],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
