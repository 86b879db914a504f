//! Application state machine.
//!
//! The [`App`] consumes [`AppEvent`] inputs and produces [`AppAction`]
//! instructions for the runtime to execute. It is pure: no I/O, no clock.
//!
//! It owns the [`SessionState`] fold plus the view-local interaction state
//! that is deliberately *not* part of the data model: the log cursor and the
//! per-entry expand/collapse toggles. Toggles are keyed by entry identity
//! (timestamp bits) and reset whenever a snapshot recreates the log.

use std::collections::HashSet;

use vigil_proto::ActionLogEntry;

use crate::{AppAction, AppEvent, ConnectionState, KeyInput, SessionState};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal or network.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state.
    state: ConnectionState,
    /// Endpoint base URL for connection.
    endpoint: String,
    /// Projected session state, owned exclusively by the fold.
    session: SessionState,
    /// Log cursor, 0-based from the most recent entry.
    selected: usize,
    /// Expanded entries, keyed by entry identity. Collapsed by default.
    expanded: HashSet<u64>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App in disconnected state.
    pub fn new(endpoint: String) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            endpoint,
            session: SessionState::new(),
            selected: 0,
            expanded: HashSet::new(),
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Connecting => {
                self.state = ConnectionState::Connecting;
                vec![AppAction::Render]
            },
            AppEvent::Connected => {
                self.state = ConnectionState::Connected;
                self.status_message = None;
                vec![AppAction::Render]
            },
            AppEvent::Disconnected => {
                self.state = ConnectionState::Disconnected;
                self.status_message = Some("Connection lost. Press 'r' to reconnect".into());
                vec![AppAction::Render]
            },
            AppEvent::Snapshot(snapshot) => {
                self.session.apply_snapshot(snapshot);
                // The snapshot recreates every entry; toggles reset to default.
                self.expanded.clear();
                self.clamp_selection();
                vec![AppAction::Render]
            },
            AppEvent::FeedEvent(event) => {
                self.session.apply_feed_event(event);
                vec![AppAction::Render]
            },
            AppEvent::ActionLog(entry) => {
                self.session.apply_action_log(entry);
                self.clamp_selection();
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('q') | KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Char('1') => self.simulate_attack("port_scan"),
            KeyInput::Char('2') => self.simulate_attack("sql_injection"),
            KeyInput::Char('3') => self.simulate_attack("ddos"),
            KeyInput::Char('r') => self.connect(),
            KeyInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                if self.selected.saturating_add(1) < self.session.action_log().len() {
                    self.selected = self.selected.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Enter | KeyInput::Char(' ') => self.toggle_detail(),
            KeyInput::Char(_) => vec![],
        }
    }

    /// Initiate connection to the server.
    pub fn connect(&mut self) -> Vec<AppAction> {
        self.state = ConnectionState::Connecting;
        vec![AppAction::Connect { endpoint: self.endpoint.clone() }, AppAction::Render]
    }

    /// Request an attack simulation.
    fn simulate_attack(&mut self, attack_type: &str) -> Vec<AppAction> {
        self.status_message = Some(format!("Simulating {attack_type} attack..."));
        vec![
            AppAction::SimulateAttack { attack_type: attack_type.to_owned() },
            AppAction::Render,
        ]
    }

    /// Toggle the detail view of the selected log entry.
    fn toggle_detail(&mut self) -> Vec<AppAction> {
        let Some(entry) = self.session.action_log().get(self.selected) else {
            return vec![];
        };
        let key = entry.identity();
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
        vec![AppAction::Render]
    }

    /// Keep the cursor inside the (possibly shrunk) action log.
    fn clamp_selection(&mut self) {
        let len = self.session.action_log().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    /// Endpoint base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Projected session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Log cursor position, 0-based from the most recent entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the given entry's detail view is open.
    pub fn is_expanded(&self, entry: &ActionLogEntry) -> bool {
        self.expanded.contains(&entry.identity())
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use vigil_proto::Snapshot;

    use super::*;

    fn entry(timestamp: f64) -> ActionLogEntry {
        ActionLogEntry {
            timestamp,
            threat_type: "Port Scan".into(),
            action_taken: "Blocked IP: 10.0.0.1".into(),
            effectiveness: "High".into(),
            extra: serde_json::Map::new(),
        }
    }

    fn connected_app() -> App {
        let mut app = App::new("http://127.0.0.1:5000".into());
        let _ = app.handle(AppEvent::Connected);
        app
    }

    #[test]
    fn digit_keys_request_simulations() {
        let mut app = connected_app();

        let actions = app.handle(AppEvent::Key(KeyInput::Char('1')));
        assert!(matches!(
            actions.as_slice(),
            [AppAction::SimulateAttack { attack_type }, AppAction::Render]
                if attack_type == "port_scan"
        ));

        let actions = app.handle(AppEvent::Key(KeyInput::Char('3')));
        assert!(matches!(
            actions.as_slice(),
            [AppAction::SimulateAttack { attack_type }, AppAction::Render]
                if attack_type == "ddos"
        ));
    }

    #[test]
    fn esc_and_q_quit() {
        let mut app = connected_app();
        assert!(matches!(
            app.handle(AppEvent::Key(KeyInput::Esc)).as_slice(),
            [AppAction::Quit]
        ));
        assert!(matches!(
            app.handle(AppEvent::Key(KeyInput::Char('q'))).as_slice(),
            [AppAction::Quit]
        ));
    }

    #[test]
    fn reconnect_key_initiates_connection() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Disconnected);

        let actions = app.handle(AppEvent::Key(KeyInput::Char('r')));
        assert!(matches!(actions.as_slice(), [AppAction::Connect { .. }, AppAction::Render]));
        assert_eq!(app.connection_state(), ConnectionState::Connecting);
    }

    #[test]
    fn cursor_stays_clamped_to_log() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Key(KeyInput::Down));
        assert_eq!(app.selected(), 0, "cursor on empty log stays at 0");

        let _ = app.handle(AppEvent::ActionLog(entry(1.0)));
        let _ = app.handle(AppEvent::ActionLog(entry(2.0)));
        let _ = app.handle(AppEvent::Key(KeyInput::Down));
        let _ = app.handle(AppEvent::Key(KeyInput::Down));
        assert_eq!(app.selected(), 1, "cursor clamps at the oldest entry");

        let _ = app.handle(AppEvent::Key(KeyInput::Up));
        let _ = app.handle(AppEvent::Key(KeyInput::Up));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn enter_toggles_detail_of_selected_entry() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::ActionLog(entry(1000.0)));
        let selected = entry(1000.0);

        assert!(!app.is_expanded(&selected), "collapsed by default");

        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        assert!(app.is_expanded(&selected));

        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        assert!(!app.is_expanded(&selected));
    }

    #[test]
    fn toggle_on_empty_log_does_nothing() {
        let mut app = connected_app();
        assert!(app.handle(AppEvent::Key(KeyInput::Enter)).is_empty());
    }

    #[test]
    fn snapshot_resets_detail_toggles() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::ActionLog(entry(1000.0)));
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        assert!(app.is_expanded(&entry(1000.0)));

        let _ = app.handle(AppEvent::Snapshot(Snapshot {
            action_log: vec![entry(1000.0)],
            latest_status: Some(entry(1000.0)),
            ..Snapshot::default()
        }));

        assert!(!app.is_expanded(&entry(1000.0)), "recreated entries collapse");
    }

    #[test]
    fn snapshot_shrinking_log_clamps_cursor() {
        let mut app = connected_app();
        for i in 0..5 {
            let _ = app.handle(AppEvent::ActionLog(entry(f64::from(i))));
        }
        for _ in 0..4 {
            let _ = app.handle(AppEvent::Key(KeyInput::Down));
        }
        assert_eq!(app.selected(), 4);

        let _ = app.handle(AppEvent::Snapshot(Snapshot {
            action_log: vec![entry(9.0)],
            ..Snapshot::default()
        }));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn error_event_sets_status_message() {
        let mut app = connected_app();
        let _ = app.handle(AppEvent::Error { message: "connection refused".into() });
        assert_eq!(app.status_message(), Some("Error: connection refused"));
    }
}
