//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod feed;
mod headline;
mod log;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use vigil_app::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const HEADLINE_HEIGHT: u16 = 5;
    const MAIN_AREA_MIN_HEIGHT: u16 = 5;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADLINE_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [headline_area, main_area, status_area] = chunks.as_ref() else {
        return;
    };

    headline::render(frame, app, *headline_area);
    render_main_area(frame, app, *main_area);
    status::render(frame, app, *status_area);
}

/// Render the main area (live feed + action log).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let [feed_area, log_area] = chunks.as_ref() else {
        return;
    };

    feed::render(frame, app, *feed_area);
    log::render(frame, app, *log_area);
}

/// Format a unix timestamp (seconds, fractional) as local wall-clock time.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn format_timestamp(timestamp: f64) -> String {
    chrono::DateTime::from_timestamp(timestamp.trunc() as i64, 0).map_or_else(
        || "--:--:--".to_string(),
        |utc| utc.with_timezone(&chrono::Local).format("%H:%M:%S").to_string(),
    )
}
