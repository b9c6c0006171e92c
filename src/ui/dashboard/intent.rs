//! Intents for the server list.

use crate::model::{ResponseEnvelope, StatusFilter};
use crate::ui::mvi::Intent;
use crate::view_state::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardIntent {
    /// Next state of a list request, as produced by the projector.
    Projected(ViewState<ResponseEnvelope>),

    SetFilter(StatusFilter),
    CycleFilter,

    /// Move the row selection; negative is up. Wraps around.
    MoveSelection(i32),

    /// A ping/save/delete request was sent.
    ActionStarted(String),

    /// Ping resolved; the refreshed server is in `data.server`.
    Pinged(ResponseEnvelope),

    /// Save resolved; the stored server is in `data.server`.
    Saved(ResponseEnvelope),

    Deleted {
        id: u64,
        envelope: ResponseEnvelope,
    },

    /// Any ping/save/delete failure. Replaces the view with an error.
    ActionFailed(String),

    /// Animation tick (for spinner updates).
    Tick,

    /// Informational message that does not touch the data.
    Notice(String),
}

impl Intent for DashboardIntent {}
