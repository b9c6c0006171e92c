//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use serverdash::model::{EnvelopeData, ResponseEnvelope, Server, ServerStatus};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL that nothing listens on.
pub fn closed_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Create a temporary config file pointing at `base_url`.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[backend]
base_url = "{}"

[ui]
tick_rate_ms = 100
"#,
        base_url
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn server(id: u64, ip: &str, status: ServerStatus) -> Server {
    Server {
        id: Some(id),
        ip_address: ip.to_string(),
        name: format!("host-{}", id),
        memory: "16 GB".to_string(),
        kind: "Dell Tower".to_string(),
        storage: "500 GB".to_string(),
        status,
    }
}

/// Two up, one down, interleaved.
pub fn sample_servers() -> Vec<Server> {
    vec![
        server(1, "192.168.1.160", ServerStatus::Up),
        server(2, "192.168.1.58", ServerStatus::Down),
        server(3, "192.168.1.21", ServerStatus::Up),
    ]
}

pub fn list_envelope(servers: Vec<Server>) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        status: "OK".to_string(),
        message: "Servers retrieved".to_string(),
        data: EnvelopeData {
            servers,
            server: None,
        },
        ..ResponseEnvelope::default()
    }
}

pub fn single_envelope(message: &str, server: Server) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        status: "OK".to_string(),
        message: message.to_string(),
        data: EnvelopeData {
            servers: Vec::new(),
            server: Some(server),
        },
        ..ResponseEnvelope::default()
    }
}

/// JSON body in the backend's wire format.
pub fn envelope_json(envelope: &ResponseEnvelope) -> String {
    serde_json::to_string(envelope).expect("Failed to encode envelope")
}
