//! Terminal dashboard for a fleet of monitored servers.
//!
//! The backend is a small REST service (`/server/list`, `/server/save`,
//! `/server/ping/{ip}`, `/server/delete/{id}`). Every call is projected into a
//! [`view_state::ViewState`] that the dashboard renders as loading, loaded or
//! error.

pub mod cli;
pub mod commands;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod ui;
pub mod view_state;
