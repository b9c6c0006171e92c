//! Headless execution of a single gateway call.

use anyhow::bail;

use crate::cli::Command;
use crate::gateway::{filter_by_status, ServerApi};
use crate::model::ResponseEnvelope;

/// Run one command against the backend and return the envelope to print.
pub async fn execute(api: &dyn ServerApi, command: Command) -> anyhow::Result<ResponseEnvelope> {
    let envelope = match command {
        Command::Ui => bail!("the dashboard cannot run as a headless command"),
        Command::List { status } => {
            let envelope = api.list().await?;
            filter_by_status(status, &envelope)
        }
        Command::Ping { ip_address } => api.ping(&ip_address).await?,
        Command::Delete { server_id } => api.delete(server_id).await?,
        Command::Save(args) => api.save(&args.into_server()).await?,
    };
    Ok(envelope)
}
