//! Application layer for vigil
//!
//! Pure state machines and a generic runtime for the monitoring dashboard,
//! keeping state reconciliation fully decoupled from I/O so the same code
//! drives the production TUI and deterministic tests.
//!
//! # Components
//!
//! - [`SessionState`]: deterministic fold of server events into the three
//!   projections (live feed, action log, latest status)
//! - [`App`]: UI state machine (key handling, selection, detail toggles)
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod projector;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use projector::{ACTION_LOG_CAP, FEED_CAP, SessionState};
pub use runtime::Runtime;
pub use state::ConnectionState;
