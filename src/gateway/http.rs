use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use std::fmt::Display;

use crate::gateway::error::{GatewayResult, TransportError};
use crate::gateway::ServerApi;
use crate::model::{ResponseEnvelope, Server};

/// [`ServerApi`] over HTTP.
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    /// Create a gateway for the backend at `base_url`
    /// (e.g. "http://localhost:8080").
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL extended by `segments`. Each segment is percent-encoded and
    /// stays one path segment, so `/`, `?` and `#` in user input cannot reach
    /// another endpoint.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base URL '{}': {}", self.base_url, e))?;
        url.path_segments_mut()
            .map_err(|()| format!("base URL '{}' cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
    ) -> GatewayResult<RequestBuilder> {
        let url = self
            .endpoint(segments)
            .map_err(|e| handle_error(operation, 0, e))?;
        Ok(self.client.request(method, url))
    }

    /// Send the request and decode the envelope.
    ///
    /// Resolved envelopes are logged; every failure goes through
    /// [`handle_error`].
    async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> GatewayResult<ResponseEnvelope> {
        let response = request
            .send()
            .await
            .map_err(|e| handle_error(operation, e.status().map_or(0, |s| s.as_u16()), e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(handle_error(operation, status.as_u16(), reason));
        }

        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|e| handle_error(operation, 0, e))?;

        tracing::debug!(
            target: "gateway",
            operation,
            status_code = envelope.status_code,
            servers = envelope.data.servers.len(),
            message = %envelope.message,
            "resolved envelope"
        );

        Ok(envelope)
    }
}

/// Log a failed call and normalize it into a [`TransportError`].
fn handle_error(operation: &'static str, status: u16, source: impl Display) -> TransportError {
    let message = source.to_string();
    tracing::error!(target: "gateway", operation, status, error = %message, "request failed");
    TransportError::new(status, message)
}

#[async_trait]
impl ServerApi for HttpGateway {
    async fn list(&self) -> GatewayResult<ResponseEnvelope> {
        let req = self.request("list", Method::GET, &["server", "list"])?;
        self.execute("list", req).await
    }

    async fn save(&self, server: &Server) -> GatewayResult<ResponseEnvelope> {
        let req = self
            .request("save", Method::POST, &["server", "save"])?
            .json(server);
        self.execute("save", req).await
    }

    async fn ping(&self, ip_address: &str) -> GatewayResult<ResponseEnvelope> {
        let req = self.request("ping", Method::GET, &["server", "ping", ip_address])?;
        self.execute("ping", req).await
    }

    async fn delete(&self, server_id: u64) -> GatewayResult<ResponseEnvelope> {
        let id = server_id.to_string();
        let req = self.request("delete", Method::DELETE, &["server", "delete", id.as_str()])?;
        self.execute("delete", req).await
    }
}
