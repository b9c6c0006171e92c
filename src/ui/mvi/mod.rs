//! Model-View-Intent (MVI) primitives for the dashboard.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Key presses and gateway results both arrive as intents. Reducers are the
//! only place state changes; the renderer reads state and never mutates it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
