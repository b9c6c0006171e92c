//! Command-line interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{Server, ServerStatus, StatusFilter};

#[derive(Debug, Parser)]
#[command(
    name = "serverdash",
    version,
    about = "Dashboard for monitored servers backed by a REST service"
)]
pub struct Cli {
    /// Path to config file (default: ~/.config/serverdash/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override backend base URL from config
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Open the interactive dashboard (default)
    Ui,
    /// List servers, optionally filtered by status
    List {
        /// all, up or down
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Ping a server by IP address
    Ping { ip_address: String },
    /// Delete a server by id
    Delete { server_id: u64 },
    /// Register a new server
    Save(SaveArgs),
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct SaveArgs {
    #[arg(long = "ip")]
    pub ip_address: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub memory: String,
    #[arg(long = "type", default_value = "")]
    pub kind: String,
    #[arg(long, default_value = "")]
    pub storage: String,
    /// Register the server as SERVER_DOWN instead of SERVER_UP
    #[arg(long)]
    pub down: bool,
}

impl SaveArgs {
    pub fn into_server(self) -> Server {
        Server {
            id: None,
            ip_address: self.ip_address,
            name: self.name,
            memory: self.memory,
            kind: self.kind,
            storage: self.storage,
            status: if self.down {
                ServerStatus::Down
            } else {
                ServerStatus::Up
            },
        }
    }
}
