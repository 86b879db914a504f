//! Terminal dashboard for vigil
//!
//! A thin shell over [`vigil_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`vigil_app::Runtime`];
//! this crate only handles terminal rendering and the transport hookup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDriver, TerminalError};
pub use vigil_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
