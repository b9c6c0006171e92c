//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (key presses) or results posted back by
/// the gateway worker. They must be `Send` because the worker produces them
/// on the async runtime.
pub trait Intent: Send + 'static {}
