//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Connect to the server.
    Connect {
        /// Endpoint base URL.
        endpoint: String,
    },

    /// Request an attack simulation. Fire-and-forget: no action ever waits
    /// on the outcome, and failures never reach session state.
    SimulateAttack {
        /// Attack tag forwarded to the server.
        attack_type: String,
    },
}
