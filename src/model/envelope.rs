use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::server::Server;

/// Common wrapper returned by every backend call.
///
/// Only `data` is structurally required; the metadata fields default when the
/// backend leaves them out. The timestamp is kept as whatever JSON the backend
/// sent, since its date encoding is not part of the contract.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(default, alias = "timeStamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<String>,
    #[serde(default)]
    pub data: EnvelopeData,
}

/// Payload of a [`ResponseEnvelope`].
///
/// `servers` is filled by `list`; `server` by `save`, `ping` and `delete`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvelopeData {
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

impl ResponseEnvelope {
    pub fn servers(&self) -> &[Server] {
        &self.data.servers
    }

    /// Counts of (up, down) servers in this envelope.
    pub fn status_counts(&self) -> (usize, usize) {
        let up = self.data.servers.iter().filter(|s| s.is_up()).count();
        (up, self.data.servers.len() - up)
    }
}
