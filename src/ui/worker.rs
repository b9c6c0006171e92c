//! Executes [`UiCommand`]s against the gateway on the async runtime and posts
//! the results back to the UI loop as dashboard intents.

use futures::{pin_mut, StreamExt};
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::gateway::ServerApi;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::dashboard::DashboardIntent;
use crate::ui::events::AppEvent;
use crate::view_state::project_once;

const COMMAND_QUEUE_SIZE: usize = 16;

/// Run one command, emitting every resulting intent in order.
///
/// `Refresh` goes through the view-state projector, so it emits
/// `Projected(Loading)` before the request resolves. The other commands emit
/// a single result intent.
pub async fn run_command<F>(api: &dyn ServerApi, command: UiCommand, mut emit: F)
where
    F: FnMut(DashboardIntent),
{
    match command {
        UiCommand::Refresh => {
            let states = project_once(api.list());
            pin_mut!(states);
            while let Some(state) = states.next().await {
                emit(DashboardIntent::Projected(state));
            }
        }
        UiCommand::Ping { ip_address } => match api.ping(&ip_address).await {
            Ok(envelope) => emit(DashboardIntent::Pinged(envelope)),
            Err(err) => emit(DashboardIntent::ActionFailed(err.to_string())),
        },
        UiCommand::Delete { server_id } => match api.delete(server_id).await {
            Ok(envelope) => emit(DashboardIntent::Deleted {
                id: server_id,
                envelope,
            }),
            Err(err) => emit(DashboardIntent::ActionFailed(err.to_string())),
        },
        UiCommand::Save { server } => match api.save(&server).await {
            Ok(envelope) => emit(DashboardIntent::Saved(envelope)),
            Err(err) => emit(DashboardIntent::ActionFailed(err.to_string())),
        },
    }
}

/// Spawn the command loop on `handle`. Each command runs in its own task so a
/// slow ping never holds up a refresh.
pub fn spawn_worker(
    handle: &Handle,
    api: Arc<dyn ServerApi>,
    events: mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<UiCommand>(COMMAND_QUEUE_SIZE);

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            tracing::debug!(?command, "executing gateway command");
            let api = Arc::clone(&api);
            let events = events.clone();
            tokio::spawn(async move {
                run_command(api.as_ref(), command, |intent| {
                    // The UI loop is gone when this fails; nothing left to do.
                    let _ = events.send(AppEvent::Dashboard(intent));
                })
                .await;
            });
        }
    });

    tx
}
