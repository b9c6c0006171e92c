mod common;

use common::{list_envelope, sample_servers, server, single_envelope};
use serverdash::model::{ServerStatus, StatusFilter};
use serverdash::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use serverdash::ui::mvi::Reducer;
use serverdash::view_state::ViewState;

fn reduce_all(intents: Vec<DashboardIntent>) -> DashboardState {
    intents
        .into_iter()
        .fold(DashboardState::default(), DashboardReducer::reduce)
}

fn loaded() -> DashboardState {
    reduce_all(vec![
        DashboardIntent::Projected(ViewState::Loading),
        DashboardIntent::Projected(ViewState::Loaded(list_envelope(sample_servers()))),
    ])
}

#[test]
fn starts_loading() {
    let state = DashboardState::default();
    assert!(state.view.is_loading());
    assert!(state.visible_servers().is_empty());
}

#[test]
fn refresh_lifecycle_ends_loaded() {
    let state = loaded();
    assert_eq!(state.visible_servers().len(), 3);
    assert_eq!(state.status_counts(), Some((2, 1)));
    assert_eq!(state.notice.as_deref(), Some("Servers retrieved"));
}

#[test]
fn refresh_failure_ends_in_error() {
    let state = reduce_all(vec![
        DashboardIntent::Projected(ViewState::Loading),
        DashboardIntent::Projected(ViewState::Error(
            "An error occurred - Error code: 500".to_string(),
        )),
    ]);
    assert_eq!(
        state.view.error_message(),
        Some("An error occurred - Error code: 500")
    );
}

#[test]
fn filter_survives_refresh() {
    let state = DashboardReducer::reduce(loaded(), DashboardIntent::SetFilter(StatusFilter::ServerDown));
    assert_eq!(state.visible_servers().len(), 1);

    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::Projected(ViewState::Loaded(list_envelope(sample_servers()))),
    );
    assert_eq!(state.filter, StatusFilter::ServerDown);
    assert_eq!(state.visible_servers().len(), 1);
}

#[test]
fn filter_message_replaces_notice() {
    let state = DashboardReducer::reduce(loaded(), DashboardIntent::SetFilter(StatusFilter::ServerUp));
    assert_eq!(
        state.notice.as_deref(),
        Some("Servers filtered by SERVER UP status")
    );
}

#[test]
fn cycle_filter_walks_all_up_down() {
    let state = DashboardReducer::reduce(loaded(), DashboardIntent::CycleFilter);
    assert_eq!(state.filter, StatusFilter::ServerUp);
    let state = DashboardReducer::reduce(state, DashboardIntent::CycleFilter);
    assert_eq!(state.filter, StatusFilter::ServerDown);
    let state = DashboardReducer::reduce(state, DashboardIntent::CycleFilter);
    assert_eq!(state.filter, StatusFilter::All);
}

#[test]
fn ping_result_updates_row_in_place() {
    let state = DashboardReducer::reduce(
        loaded(),
        DashboardIntent::Pinged(single_envelope(
            "Ping failed",
            server(1, "192.168.1.160", ServerStatus::Down),
        )),
    );
    assert_eq!(state.visible_servers()[0].status, ServerStatus::Down);
    assert_eq!(state.status_counts(), Some((1, 2)));
    assert_eq!(state.notice.as_deref(), Some("Ping failed"));
}

#[test]
fn saved_server_appears_under_matching_filter() {
    let state = DashboardReducer::reduce(loaded(), DashboardIntent::SetFilter(StatusFilter::ServerDown));
    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::Saved(single_envelope(
            "Server created",
            server(4, "10.0.0.4", ServerStatus::Down),
        )),
    );
    assert_eq!(state.visible_servers().len(), 2);
    assert_eq!(state.snapshot.as_ref().map(|s| s.servers().len()), Some(4));
}

#[test]
fn deleted_server_leaves_list_and_clamps_selection() {
    let state = DashboardReducer::reduce(loaded(), DashboardIntent::MoveSelection(-1));
    assert_eq!(state.selected, 2);

    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::Deleted {
            id: 3,
            envelope: single_envelope("Server deleted", server(3, "192.168.1.21", ServerStatus::Up)),
        },
    );
    assert_eq!(state.visible_servers().len(), 2);
    assert_eq!(state.selected, 1);
}

#[test]
fn action_failure_replaces_view_and_clears_busy() {
    let state = DashboardReducer::reduce(loaded(), DashboardIntent::ActionStarted("Pinging".into()));
    assert!(state.busy.is_some());

    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::ActionFailed("An error occurred - Error code: 0".to_string()),
    );
    assert!(state.view.is_error());
    assert!(state.busy.is_none());
    // The snapshot is kept so the next refresh has something to merge into.
    assert!(state.snapshot.is_some());
}
