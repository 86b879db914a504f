//! Message types and JSON codec.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// One completed detection-and-response cycle.
///
/// `timestamp` is unix seconds as emitted by the server (a float; sub-second
/// precision makes it unique per entry within a session) and serves as the
/// entry's identity key. Fields beyond the four core ones are carried
/// opaquely in `extra` for detail display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    /// Unix seconds at which the action completed.
    #[serde(default)]
    pub timestamp: f64,
    /// Classification tag for the detected threat.
    #[serde(default)]
    pub threat_type: String,
    /// Human-readable description of the response taken.
    #[serde(default)]
    pub action_taken: String,
    /// Reported effectiveness of the response.
    #[serde(default)]
    pub effectiveness: String,
    /// Any additional diagnostic fields the server attached.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ActionLogEntry {
    /// Stable identity key for this entry within a session.
    ///
    /// Timestamps are unique per entry by contract; the raw bit pattern
    /// gives a hashable key where the float itself is not.
    pub fn identity(&self) -> u64 {
        self.timestamp.to_bits()
    }
}

/// Full authoritative replacement of session state, sent on connect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Raw feed lines, oldest first.
    #[serde(default)]
    pub live_feed: Vec<String>,
    /// Completed actions, most recent first.
    #[serde(default)]
    pub action_log: Vec<ActionLogEntry>,
    /// The most recently taken action, if any.
    #[serde(default)]
    pub latest_status: Option<ActionLogEntry>,
}

/// Inbound server message envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full state snapshot; replaces everything accumulated so far.
    InitialData(Snapshot),
    /// One raw feed line.
    NewFeedEvent(String),
    /// One completed action.
    NewActionLog(ActionLogEntry),
}

/// Outbound request to simulate an attack.
///
/// The tag is forwarded verbatim; the server decides which tags it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateAttack {
    /// Attack tag, e.g. `port_scan`, `sql_injection`, `ddos`.
    pub attack_type: String,
}

/// Decode an inbound JSON text frame.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ProtocolError> {
    serde_json::from_str(text).map_err(|e| ProtocolError::Decode(e.to_string()))
}

/// Encode an outbound value as a JSON string.
pub fn encode<T: Serialize>(value: &T) -> Result<String, ProtocolError> {
    serde_json::to_string(value).map_err(|e| ProtocolError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_initial_data() {
        let text = r#"{
            "event": "initial_data",
            "data": {
                "live_feed": ["[12:00:01] [Monitor] scan from 10.0.0.1"],
                "action_log": [{
                    "timestamp": 1000.5,
                    "threat_type": "Port Scan",
                    "action_taken": "Blocked IP: 192.168.1.100",
                    "effectiveness": "High"
                }],
                "latest_status": null
            }
        }"#;

        let msg: ServerMessage = decode(text).expect("decode");
        let ServerMessage::InitialData(snapshot) = msg else {
            panic!("expected InitialData, got {msg:?}");
        };
        assert_eq!(snapshot.live_feed.len(), 1);
        assert_eq!(snapshot.action_log[0].threat_type, "Port Scan");
        assert!(snapshot.latest_status.is_none());
    }

    #[test]
    fn empty_snapshot_payload_defaults_all_fields() {
        let msg: ServerMessage =
            decode(r#"{"event": "initial_data", "data": {}}"#).expect("decode");
        let ServerMessage::InitialData(snapshot) = msg else {
            panic!("expected InitialData");
        };
        assert!(snapshot.live_feed.is_empty());
        assert!(snapshot.action_log.is_empty());
        assert!(snapshot.latest_status.is_none());
    }

    #[test]
    fn decodes_feed_event_as_opaque_string() {
        let msg: ServerMessage =
            decode(r#"{"event": "new_feed_event", "data": "[12:00:02] [Action] done"}"#)
                .expect("decode");
        assert_eq!(msg, ServerMessage::NewFeedEvent("[12:00:02] [Action] done".into()));
    }

    #[test]
    fn action_log_entry_keeps_unknown_fields() {
        let text = r#"{
            "event": "new_action_log",
            "data": {
                "timestamp": 1005.0,
                "threat_type": "DDoS",
                "action_taken": "rate-limited",
                "effectiveness": "Medium",
                "full_report": {"recommended_action": "Rate-limit source"}
            }
        }"#;

        let msg: ServerMessage = decode(text).expect("decode");
        let ServerMessage::NewActionLog(entry) = msg else {
            panic!("expected NewActionLog");
        };
        assert!(entry.extra.contains_key("full_report"));
        assert_eq!(entry.identity(), 1005.0f64.to_bits());
    }

    #[test]
    fn sparse_action_log_entry_defaults_missing_scalars() {
        let msg: ServerMessage =
            decode(r#"{"event": "new_action_log", "data": {"threat_type": "DDoS"}}"#)
                .expect("decode");
        let ServerMessage::NewActionLog(entry) = msg else {
            panic!("expected NewActionLog");
        };
        assert_eq!(entry.threat_type, "DDoS");
        assert_eq!(entry.timestamp, 0.0);
        assert!(entry.action_taken.is_empty());
    }

    #[test]
    fn unknown_event_tag_is_an_error() {
        let result: Result<ServerMessage, _> =
            decode(r#"{"event": "heartbeat", "data": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn encodes_simulate_attack_body() {
        let body = encode(&SimulateAttack { attack_type: "sql_injection".into() })
            .expect("encode");
        assert_eq!(body, r#"{"attack_type":"sql_injection"}"#);
    }
}
