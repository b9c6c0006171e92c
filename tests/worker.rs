//! Command execution against an in-memory backend.

mod common;

use async_trait::async_trait;
use common::{list_envelope, sample_servers, server, single_envelope};
use serverdash::gateway::{GatewayResult, ServerApi, TransportError};
use serverdash::model::{ResponseEnvelope, Server, ServerStatus};
use serverdash::ui::app::UiCommand;
use serverdash::ui::dashboard::DashboardIntent;
use serverdash::ui::events::AppEvent;
use serverdash::ui::worker::{run_command, spawn_worker};
use serverdash::view_state::ViewState;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

/// Backend that answers from fixtures, or fails every call with `fail_with`.
#[derive(Default)]
struct FakeApi {
    fail_with: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    fn answer(&self, call: String, envelope: ResponseEnvelope) -> GatewayResult<ResponseEnvelope> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with {
            Some(status) => Err(TransportError::new(status, "fake failure")),
            None => Ok(envelope),
        }
    }
}

#[async_trait]
impl ServerApi for FakeApi {
    async fn list(&self) -> GatewayResult<ResponseEnvelope> {
        self.answer("list".into(), list_envelope(sample_servers()))
    }

    async fn save(&self, server: &Server) -> GatewayResult<ResponseEnvelope> {
        let mut stored = server.clone();
        stored.id = Some(42);
        self.answer(format!("save {}", server.ip_address), single_envelope("Server created", stored))
    }

    async fn ping(&self, ip_address: &str) -> GatewayResult<ResponseEnvelope> {
        self.answer(
            format!("ping {}", ip_address),
            single_envelope("Ping successful", server(1, ip_address, ServerStatus::Up)),
        )
    }

    async fn delete(&self, server_id: u64) -> GatewayResult<ResponseEnvelope> {
        self.answer(
            format!("delete {}", server_id),
            single_envelope("Server deleted", server(server_id, "10.0.0.1", ServerStatus::Up)),
        )
    }
}

async fn collect(api: &FakeApi, command: UiCommand) -> Vec<DashboardIntent> {
    let mut intents = Vec::new();
    run_command(api, command, |intent| intents.push(intent)).await;
    intents
}

#[tokio::test]
async fn test_refresh_emits_loading_then_loaded() {
    let api = FakeApi::default();
    let intents = collect(&api, UiCommand::Refresh).await;

    assert_eq!(intents.len(), 2);
    assert_eq!(intents[0], DashboardIntent::Projected(ViewState::Loading));
    match &intents[1] {
        DashboardIntent::Projected(ViewState::Loaded(envelope)) => {
            assert_eq!(envelope.servers().len(), 3)
        }
        other => panic!("expected loaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refresh_failure_emits_error_state() {
    let api = FakeApi::failing(503);
    let intents = collect(&api, UiCommand::Refresh).await;

    assert_eq!(
        intents.last(),
        Some(&DashboardIntent::Projected(ViewState::Error(
            "An error occurred - Error code: 503".to_string()
        )))
    );
}

#[tokio::test]
async fn test_actions_emit_matching_intents() {
    let api = FakeApi::default();

    let pinged = collect(
        &api,
        UiCommand::Ping {
            ip_address: "10.0.0.9".into(),
        },
    )
    .await;
    assert!(matches!(pinged.as_slice(), [DashboardIntent::Pinged(_)]));

    let deleted = collect(&api, UiCommand::Delete { server_id: 5 }).await;
    assert!(matches!(
        deleted.as_slice(),
        [DashboardIntent::Deleted { id: 5, .. }]
    ));

    let mut draft = server(0, "10.0.0.10", ServerStatus::Down);
    draft.id = None;
    let saved = collect(&api, UiCommand::Save { server: draft }).await;
    match saved.as_slice() {
        [DashboardIntent::Saved(envelope)] => {
            assert_eq!(envelope.data.server.as_ref().and_then(|s| s.id), Some(42))
        }
        other => panic!("expected saved, got {:?}", other),
    }

    assert_eq!(
        *api.calls.lock().unwrap(),
        vec!["ping 10.0.0.9", "delete 5", "save 10.0.0.10"]
    );
}

#[tokio::test]
async fn test_action_failure_is_reported() {
    let api = FakeApi::failing(0);
    let intents = collect(&api, UiCommand::Delete { server_id: 1 }).await;

    assert_eq!(
        intents,
        vec![DashboardIntent::ActionFailed(
            "An error occurred - Error code: 0".to_string()
        )]
    );
}

#[test]
fn test_spawned_worker_posts_events() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let (tx, rx) = mpsc::channel();

    let commands = spawn_worker(runtime.handle(), Arc::new(FakeApi::default()), tx);
    commands.try_send(UiCommand::Refresh).unwrap();

    let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(matches!(
        first,
        AppEvent::Dashboard(DashboardIntent::Projected(ViewState::Loading))
    ));
    assert!(matches!(
        second,
        AppEvent::Dashboard(DashboardIntent::Projected(ViewState::Loaded(_)))
    ));

    runtime.shutdown_background();
}
