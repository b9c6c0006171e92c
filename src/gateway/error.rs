use thiserror::Error;

/// Normalized failure of a backend call.
///
/// `status` is the HTTP status code, or `0` when the request never got a
/// response (connection refused, DNS failure, unreadable body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An error occurred - Error code: {status}")]
pub struct TransportError {
    pub status: u16,
    /// Underlying transport message, kept for logs.
    pub message: String,
}

impl TransportError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// True when no HTTP response was received at all.
    pub fn is_connection_failure(&self) -> bool {
        self.status == 0
    }
}

pub type GatewayResult<T> = Result<T, TransportError>;
