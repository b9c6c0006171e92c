use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the server-monitoring backend lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL for the API (e.g., "http://localhost:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.backend.base_url.trim_end_matches('/')
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
