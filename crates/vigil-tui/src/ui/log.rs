//! Action log
//!
//! Displays the running action history, most recent first, with a derived
//! index badge per entry and an expandable detail view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use vigil_app::App;

/// Render the action log.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let log = app.session().action_log();
    let block =
        Block::default().borders(Borders::ALL).title(format!(" Action Log ({}) ", log.len()));

    if log.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No actions logged yet.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = log
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let index = app.session().display_index(position);
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("#{index:<4}"), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    entry.threat_type.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(entry.action_taken.clone()),
                Span::raw(" "),
                Span::styled(
                    super::format_timestamp(entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];

            if app.is_expanded(entry)
                && let Ok(detail) = serde_json::to_string_pretty(entry)
            {
                lines.extend(detail.lines().map(|line| {
                    Line::from(Span::styled(
                        format!("    {line}"),
                        Style::default().fg(Color::DarkGray),
                    ))
                }));
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
