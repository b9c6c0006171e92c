use serde::{Deserialize, Serialize};
use std::fmt;

/// Liveness of a monitored server as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerStatus {
    #[serde(rename = "SERVER_UP")]
    Up,
    #[serde(rename = "SERVER_DOWN")]
    Down,
}

impl ServerStatus {
    /// Human-readable label ("SERVER UP" / "SERVER DOWN").
    pub fn label(&self) -> &'static str {
        match self {
            ServerStatus::Up => "SERVER UP",
            ServerStatus::Down => "SERVER DOWN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ServerStatus::Up => ServerStatus::Down,
            ServerStatus::Down => ServerStatus::Up,
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A monitored server.
///
/// `id` is assigned by the backend; drafts submitted through `save` leave it
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub ip_address: String,
    pub name: String,
    #[serde(default)]
    pub memory: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub storage: String,
    pub status: ServerStatus,
}

impl Server {
    pub fn is_up(&self) -> bool {
        self.status == ServerStatus::Up
    }

    /// True when both values describe the same backend record.
    ///
    /// Records are matched by id; drafts without an id fall back to the IP
    /// address, which is what `ping` addresses.
    pub fn same_record(&self, other: &Server) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.ip_address == other.ip_address,
        }
    }
}
