//! Reducer for the server list.

use crate::gateway::filter_by_status;
use crate::model::{ResponseEnvelope, Server};
use crate::ui::mvi::Reducer;
use crate::view_state::ViewState;

use super::intent::DashboardIntent;
use super::state::DashboardState;

/// Pure reducer; the gateway calls that produce these intents live in
/// [`crate::ui::worker`].
pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Projected(view) => match view {
                ViewState::Loading => DashboardState {
                    view: ViewState::Loading,
                    busy: None,
                    notice: None,
                    ..state
                },
                ViewState::Loaded(envelope) => {
                    let notice = Some(envelope.message.clone());
                    let state = DashboardState {
                        snapshot: Some(envelope),
                        busy: None,
                        ..state
                    };
                    let mut state = apply_filter(state);
                    state.notice = notice;
                    state
                }
                ViewState::Error(message) => DashboardState {
                    view: ViewState::Error(message),
                    busy: None,
                    ..state
                },
            },

            DashboardIntent::SetFilter(filter) => {
                if !state.view.is_loaded() {
                    return DashboardState { filter, ..state };
                }
                let state = apply_filter(DashboardState {
                    filter,
                    selected: 0,
                    ..state
                });
                let notice = state.view.payload().map(|env| env.message.clone());
                DashboardState { notice, ..state }
            }

            DashboardIntent::CycleFilter => {
                let next = state.filter.next();
                Self::reduce(state, DashboardIntent::SetFilter(next))
            }

            DashboardIntent::MoveSelection(direction) => {
                let len = state.visible_servers().len();
                if len == 0 {
                    return DashboardState {
                        selected: 0,
                        ..state
                    };
                }
                let current = state.selected.min(len - 1);
                let selected = if direction.is_negative() {
                    if current == 0 {
                        len - 1
                    } else {
                        current - 1
                    }
                } else if current + 1 >= len {
                    0
                } else {
                    current + 1
                };
                DashboardState { selected, ..state }
            }

            DashboardIntent::ActionStarted(label) => DashboardState {
                busy: Some(label),
                ..state
            },

            DashboardIntent::Pinged(envelope) => {
                let ResponseEnvelope { message, data, .. } = envelope;
                merge(state, message, |servers| {
                    let Some(server) = data.server else {
                        return;
                    };
                    match servers.iter_mut().find(|s| s.same_record(&server)) {
                        Some(existing) => *existing = server,
                        None => servers.push(server),
                    }
                })
            }

            DashboardIntent::Saved(envelope) => {
                let ResponseEnvelope { message, data, .. } = envelope;
                merge(state, message, |servers| servers.extend(data.server))
            }

            DashboardIntent::Deleted { id, envelope } => {
                merge(state, envelope.message, |servers| {
                    servers.retain(|s| s.id != Some(id))
                })
            }

            DashboardIntent::ActionFailed(message) => DashboardState {
                view: ViewState::Error(message),
                busy: None,
                ..state
            },

            DashboardIntent::Tick if state.is_waiting() => DashboardState {
                animation_tick: state.animation_tick.wrapping_add(1),
                ..state
            },
            DashboardIntent::Tick => state,

            DashboardIntent::Notice(message) => DashboardState {
                notice: Some(message),
                ..state
            },
        }
    }
}

/// Rebuild `view` from `snapshot` with the active filter.
fn apply_filter(state: DashboardState) -> DashboardState {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return state;
    };
    let filtered = filter_by_status(state.filter, snapshot);
    let len = filtered.servers().len();
    DashboardState {
        view: ViewState::Loaded(filtered),
        selected: state.selected.min(len.saturating_sub(1)),
        ..state
    }
}

/// Like [`apply_filter`], but only for a loaded view. A pending refresh
/// stays `Loading` and an error stays an error.
fn reapply(state: DashboardState) -> DashboardState {
    if !state.view.is_loaded() {
        return state;
    }
    apply_filter(state)
}

/// Apply an action result to the snapshot and re-filter.
fn merge(
    state: DashboardState,
    message: String,
    update: impl FnOnce(&mut Vec<Server>),
) -> DashboardState {
    let mut state = DashboardState {
        busy: None,
        ..state
    };
    if let Some(snapshot) = state.snapshot.as_mut() {
        update(&mut snapshot.data.servers);
    }
    let mut state = reapply(state);
    state.notice = Some(message);
    state
}
