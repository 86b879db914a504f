//! Wire-level errors.

use thiserror::Error;

/// Errors produced at the protocol boundary.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Inbound text did not match any known message shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Outbound value could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),
}
