//! Live threat feed
//!
//! Displays the rolling feed of raw events, anchored to the newest item.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use vigil_app::App;

const BORDER_SIZE: u16 = 2;

/// Render the live feed.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let feed = app.session().live_feed();
    let block =
        Block::default().borders(Borders::ALL).title(format!(" Live Feed ({}) ", feed.len()));

    let items: Vec<ListItem> = if feed.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Waiting for events...",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        feed.iter().map(|event| ListItem::new(Line::from(Span::raw(event.clone())))).collect()
    };

    // Tail-follow: the newest events stay visible.
    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
