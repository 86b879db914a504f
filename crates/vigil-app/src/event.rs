//! UI events
//!
//! Events fed into the App state machine from terminal input and the
//! transport client.

use vigil_proto::{ActionLogEntry, ServerMessage, Snapshot};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick (for polling).
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Connection attempt started.
    Connecting,

    /// Connection established with the server.
    Connected,

    /// Connection lost. Session state stays as-is (stale, not corrupt).
    Disconnected,

    /// Full state snapshot from the server.
    Snapshot(Snapshot),

    /// One raw feed line.
    FeedEvent(String),

    /// One completed action.
    ActionLog(ActionLogEntry),

    /// Error notification.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

impl From<ServerMessage> for AppEvent {
    fn from(message: ServerMessage) -> Self {
        match message {
            ServerMessage::InitialData(snapshot) => AppEvent::Snapshot(snapshot),
            ServerMessage::NewFeedEvent(event) => AppEvent::FeedEvent(event),
            ServerMessage::NewActionLog(entry) => AppEvent::ActionLog(entry),
        }
    }
}
