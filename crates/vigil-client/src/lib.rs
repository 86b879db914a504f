//! Event transport client for vigil
//!
//! Holds one WebSocket connection to the detection server and exposes the
//! decoded inbound stream through [`ConnectedClient`]; protocol folding
//! stays in `vigil-app`. The outbound command channel is a separate
//! fire-and-forget HTTP client, [`CommandClient`], whose failures are
//! contained at this boundary and never reach session state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod command;
pub mod transport;

pub use command::CommandClient;
pub use transport::{ConnectedClient, TransportError, connect};
