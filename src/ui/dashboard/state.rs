//! State for the server list.

use crate::model::{ResponseEnvelope, Server, StatusFilter};
use crate::ui::mvi::UiState;
use crate::view_state::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// What is rendered. When loaded, already narrowed by `filter`.
    pub view: ViewState<ResponseEnvelope>,
    /// Last unfiltered envelope, merged with ping/save/delete results.
    pub snapshot: Option<ResponseEnvelope>,
    pub filter: StatusFilter,
    /// Index into the visible rows.
    pub selected: usize,
    /// Label of the request in flight, if any.
    pub busy: Option<String>,
    pub notice: Option<String>,
    /// Animation tick for the spinner. Only advances while waiting.
    pub animation_tick: u8,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            view: ViewState::Loading,
            snapshot: None,
            filter: StatusFilter::All,
            selected: 0,
            busy: None,
            notice: None,
            animation_tick: 0,
        }
    }
}

impl UiState for DashboardState {}

impl DashboardState {
    /// Rows currently shown; empty unless loaded.
    pub fn visible_servers(&self) -> &[Server] {
        self.view.payload().map(|env| env.servers()).unwrap_or(&[])
    }

    pub fn selected_server(&self) -> Option<&Server> {
        self.visible_servers().get(self.selected)
    }

    /// True while a list request or an action is pending.
    pub fn is_waiting(&self) -> bool {
        self.view.is_loading() || self.busy.is_some()
    }

    /// (up, down) counts over the unfiltered snapshot.
    pub fn status_counts(&self) -> Option<(usize, usize)> {
        self.snapshot.as_ref().map(ResponseEnvelope::status_counts)
    }
}
