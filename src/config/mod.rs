//! Configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, UiConfig};
