//! Wire protocol for the vigil monitoring client.
//!
//! The server pushes three message kinds over a WebSocket as JSON text
//! frames, wrapped in an `{"event": ..., "data": ...}` envelope:
//!
//! - `initial_data`: a full [`Snapshot`] replacing all session state
//! - `new_feed_event`: one opaque feed line
//! - `new_action_log`: one [`ActionLogEntry`]
//!
//! The outbound command channel is a single fire-and-forget
//! [`SimulateAttack`] request. Decoding is tolerant: missing collections
//! default to empty and missing scalars to absent, so a sparse or malformed
//! payload degrades to an empty projection instead of an error.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod message;

pub use error::ProtocolError;
pub use message::{ActionLogEntry, ServerMessage, SimulateAttack, Snapshot, decode, encode};
