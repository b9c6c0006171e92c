use crate::model::{EnvelopeData, ResponseEnvelope, Server, StatusFilter};

/// Narrow an already-fetched envelope to the servers matching `filter`.
///
/// Pure and synchronous. `All` keeps the server list as is; any other filter
/// keeps the matching servers in their original order. Only `message` and
/// `data.servers` differ from the input.
pub fn filter_by_status(filter: StatusFilter, envelope: &ResponseEnvelope) -> ResponseEnvelope {
    let Some(status) = filter.status() else {
        return ResponseEnvelope {
            message: format!("Servers filtered by {} status", filter.label()),
            ..envelope.clone()
        };
    };

    let servers: Vec<Server> = envelope
        .data
        .servers
        .iter()
        .filter(|server| filter.matches(server.status))
        .cloned()
        .collect();

    let message = if servers.is_empty() {
        format!("No servers of {} status found", status.label())
    } else {
        format!("Servers filtered by {} status", status.label())
    };

    tracing::debug!(
        target: "gateway",
        filter = filter.label(),
        matched = servers.len(),
        total = envelope.data.servers.len(),
        "filtered servers"
    );

    ResponseEnvelope {
        message,
        data: EnvelopeData {
            servers,
            server: envelope.data.server.clone(),
        },
        ..envelope.clone()
    }
}
