use std::fmt;
use std::str::FromStr;

use super::server::ServerStatus;

/// Which servers the dashboard shows. Never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    ServerUp,
    ServerDown,
}

impl StatusFilter {
    /// The server status this filter selects, `None` for `All`.
    pub fn status(&self) -> Option<ServerStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::ServerUp => Some(ServerStatus::Up),
            StatusFilter::ServerDown => Some(ServerStatus::Down),
        }
    }

    pub fn matches(&self, status: ServerStatus) -> bool {
        self.status().map_or(true, |wanted| wanted == status)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::ServerUp => ServerStatus::Up.label(),
            StatusFilter::ServerDown => ServerStatus::Down.label(),
        }
    }

    /// Next filter in ALL → UP → DOWN → ALL order.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::ServerUp,
            StatusFilter::ServerUp => StatusFilter::ServerDown,
            StatusFilter::ServerDown => StatusFilter::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "up" | "server_up" => Ok(StatusFilter::ServerUp),
            "down" | "server_down" => Ok(StatusFilter::ServerDown),
            other => Err(format!(
                "unknown status filter '{}' (expected all, up or down)",
                other
            )),
        }
    }
}
