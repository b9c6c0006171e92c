//! Wire types shared by the gateway, the dashboard and the headless commands.

mod envelope;
mod server;
mod status_filter;

pub use envelope::{EnvelopeData, ResponseEnvelope};
pub use server::{Server, ServerStatus};
pub use status_filter::StatusFilter;
