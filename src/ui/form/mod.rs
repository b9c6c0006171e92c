//! Add-server dialog.
//!
//! - `state.rs` - draft being edited and the focused field
//! - `intent.rs` - editing keys
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `dialog.rs` - popup rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{AddServerFormState, FormField, ServerDraft};
