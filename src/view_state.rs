//! Tri-state projection of a backend request.
//!
//! Every request the dashboard makes is rendered through a [`ViewState`]:
//! `Loading` until the request resolves, then `Loaded` with the payload or
//! `Error` with a message. [`project`] turns a stream of results into a stream
//! of view states with exactly those semantics.

use futures::future::{self, Future};
use futures::stream::{self, Stream, StreamExt};
use std::fmt;

/// What the UI should render for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Loaded(payload) => ViewState::Loaded(f(payload)),
            ViewState::Error(message) => ViewState::Error(message),
        }
    }
}

/// Project a stream of results into view states.
///
/// Emits `Loading` first, then `Loaded` for every `Ok`. The first `Err` is
/// emitted as `Error` and ends the stream; the source is not polled again.
pub fn project<T, E, S>(source: S) -> impl Stream<Item = ViewState<T>>
where
    S: Stream<Item = Result<T, E>>,
    E: fmt::Display,
{
    let updates = stream::unfold(Some(Box::pin(source)), |source| async move {
        let mut source = source?;
        match source.next().await? {
            Ok(payload) => Some((ViewState::Loaded(payload), Some(source))),
            Err(err) => Some((ViewState::Error(err.to_string()), None)),
        }
    });

    stream::once(future::ready(ViewState::Loading)).chain(updates)
}

/// Project a single request.
pub fn project_once<T, E, F>(request: F) -> impl Stream<Item = ViewState<T>>
where
    F: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    project(stream::once(request))
}
