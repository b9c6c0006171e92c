//! Server list feature module.
//!
//! Holds the projected [`ViewState`](crate::view_state::ViewState) of the
//! last list request, the active status filter and the row selection.
//!
//! - `state.rs` - what the table renders
//! - `intent.rs` - key presses and gateway results
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::DashboardState;
