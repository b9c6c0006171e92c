//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// A state value holds everything needed to render its part of the screen.
/// `Default` is the state before any intent arrives; `PartialEq` lets tests
/// compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
