//! Backend gateway: one call per backend action, plus the local status filter.

mod error;
mod filter;
mod http;

pub use error::{GatewayResult, TransportError};
pub use filter::filter_by_status;
pub use http::HttpGateway;

use async_trait::async_trait;

use crate::model::{ResponseEnvelope, Server};

/// Operations exposed by the server-monitoring backend.
///
/// Each call resolves to exactly one envelope or one [`TransportError`].
/// Implementations do not retry.
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// Fetch all servers.
    async fn list(&self) -> GatewayResult<ResponseEnvelope>;

    /// Submit a new server. The backend assigns the id.
    async fn save(&self, server: &Server) -> GatewayResult<ResponseEnvelope>;

    /// Check liveness of one address. The refreshed server comes back in
    /// `data.server`.
    async fn ping(&self, ip_address: &str) -> GatewayResult<ResponseEnvelope>;

    /// Remove a server by id.
    async fn delete(&self, server_id: u64) -> GatewayResult<ResponseEnvelope>;
}
