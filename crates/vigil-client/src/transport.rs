//! WebSocket transport for the inbound event stream.
//!
//! Provides [`ConnectedClient`] which handles WebSocket I/O for message
//! transport. This is a thin layer that just receives and decodes frames -
//! all reconciliation logic lives in the pure fold in `vigil-app`.

use futures::StreamExt;
use thiserror::Error;
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, tungstenite::Message};
use url::Url;
use vigil_proto::{ServerMessage, decode};

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured endpoint is not a usable base URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    /// Connection failed.
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Handle to a connected client.
///
/// Decoded server messages arrive on `from_server` in receipt order. An
/// internal task owns the socket; [`stop`](ConnectedClient::stop) aborts it,
/// after which no further messages are delivered.
pub struct ConnectedClient {
    /// Receive decoded messages from the server.
    pub from_server: mpsc::Receiver<ServerMessage>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedClient {
    /// Stop the connection.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Connect to a vigil server's event stream.
///
/// The WebSocket URL is derived from the endpoint base: `http`/`https`
/// become `ws`/`wss` and the event path `/ws` is appended. The server
/// pushes a full snapshot shortly after the handshake.
pub async fn connect(endpoint: &str) -> Result<ConnectedClient, TransportError> {
    let url = ws_url(endpoint)?;

    let (ws, _response) = tokio_tungstenite::connect_async(url.as_str())
        .await
        .map_err(|e| TransportError::Connection(e.to_string()))?;

    let (from_server_tx, from_server_rx) = mpsc::channel::<ServerMessage>(32);
    let handle = tokio::spawn(run_connection(ws, from_server_tx));

    Ok(ConnectedClient { from_server: from_server_rx, abort_handle: handle.abort_handle() })
}

/// Derive the WebSocket URL from the endpoint base.
fn ws_url(endpoint: &str) -> Result<Url, TransportError> {
    let mut url = Url::parse(endpoint).map_err(|e| TransportError::Endpoint(e.to_string()))?;

    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(TransportError::Endpoint(format!("unsupported scheme: {other}"))),
    };
    url.set_scheme(scheme)
        .map_err(|()| TransportError::Endpoint(format!("cannot use scheme {scheme}")))?;

    let path = format!("{}/ws", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

/// Read frames until the connection or the receiver goes away.
///
/// Undecodable frames are logged and skipped: one malformed push must not
/// take the stream down or reach the fold.
async fn run_connection(
    mut ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    from_server: mpsc::Sender<ServerMessage>,
) {
    while let Some(frame) = ws.next().await {
        match frame {
            Ok(Message::Text(text)) => match decode::<ServerMessage>(&text) {
                Ok(message) => {
                    if from_server.send(message).await.is_err() {
                        // Receiver dropped; nobody is listening anymore.
                        break;
                    }
                },
                Err(e) => tracing::warn!(error = %e, "skipping undecodable frame"),
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {},
            Err(e) => {
                tracing::warn!(error = %e, "connection error");
                break;
            },
        }
    }
}
