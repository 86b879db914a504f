//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use vigil_proto::{ServerMessage, SimulateAttack};

use crate::{App, AppAction};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic, so the same
/// orchestration code runs against a real terminal or a test harness.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event, feeding it through the app.
    ///
    /// Returns the actions the app produced, or an empty vector when no
    /// event is ready within the driver's tick interval.
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Take the next pending server message, if one has arrived.
    ///
    /// Non-blocking. Messages must be yielded in receipt order. A driver
    /// that detects connection loss here surfaces it through
    /// [`poll_event`](Driver::poll_event) as a disconnect event.
    fn recv_message(&mut self) -> Option<ServerMessage>;

    /// Establish a connection to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    fn connect(&mut self, endpoint: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Check if connected to the server.
    fn is_connected(&self) -> bool;

    /// Send a fire-and-forget command to the server.
    ///
    /// Never blocks and never fails from the caller's perspective: delivery
    /// errors are contained (and logged) at the transport boundary.
    fn send_command(&mut self, command: SimulateAttack);

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
