//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// Side effects such as sending gateway commands happen in the caller,
/// around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
