//! Fire-and-forget command channel.
//!
//! Attack simulations go out over plain HTTP, separate from the event
//! stream. A command never produces a local state change; the caller sees
//! the effect only through events pushed back on the WebSocket. Failures
//! are logged and swallowed here so the session stays uninterrupted.

use vigil_proto::SimulateAttack;

/// HTTP client for outbound commands.
pub struct CommandClient {
    http: reqwest::Client,
    base_url: String,
}

impl CommandClient {
    /// Create a command client for the given endpoint base.
    pub fn new(endpoint: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: endpoint.trim_end_matches('/').to_owned() }
    }

    /// Request an attack simulation on the server.
    ///
    /// The request runs on a detached task; errors and non-success
    /// responses are logged at warn level and otherwise ignored.
    pub fn simulate_attack(&self, command: SimulateAttack) {
        let attack_type = command.attack_type.clone();
        let request = self.http.post(format!("{}/simulate_attack", self.base_url)).json(&command);

        drop(tokio::spawn(async move {
            match request.send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(
                        status = %response.status(),
                        attack_type = %attack_type,
                        "simulate_attack rejected"
                    );
                },
                Ok(_) => tracing::debug!(attack_type = %attack_type, "simulate_attack sent"),
                Err(e) => {
                    tracing::warn!(error = %e, attack_type = %attack_type, "simulate_attack failed");
                },
            }
        }));
    }
}
