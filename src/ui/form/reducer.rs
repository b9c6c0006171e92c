use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{AddServerFormState, FormField, ServerDraft};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = AddServerFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open => AddServerFormState::Visible {
                draft: ServerDraft::default(),
                focused: FormField::IpAddress,
                error: None,
            },
            FormIntent::Close => AddServerFormState::Hidden,
            FormIntent::FocusNext => match state {
                AddServerFormState::Visible { draft, focused, error } => {
                    AddServerFormState::Visible {
                        draft,
                        focused: focused.next(),
                        error,
                    }
                }
                other => other,
            },
            FormIntent::FocusPrev => match state {
                AddServerFormState::Visible { draft, focused, error } => {
                    AddServerFormState::Visible {
                        draft,
                        focused: focused.prev(),
                        error,
                    }
                }
                other => other,
            },
            FormIntent::Input(ch) => match state {
                AddServerFormState::Visible {
                    mut draft,
                    focused,
                    ..
                } => {
                    match draft.text_mut(focused) {
                        Some(text) => text.push(ch),
                        None if ch == ' ' => draft.status = draft.status.toggled(),
                        None => {}
                    }
                    AddServerFormState::Visible {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                AddServerFormState::Visible {
                    mut draft,
                    focused,
                    ..
                } => {
                    if let Some(text) = draft.text_mut(focused) {
                        text.pop();
                    }
                    AddServerFormState::Visible {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::ToggleStatus => match state {
                AddServerFormState::Visible {
                    mut draft,
                    focused,
                    error,
                } => {
                    draft.status = draft.status.toggled();
                    AddServerFormState::Visible {
                        draft,
                        focused,
                        error,
                    }
                }
                other => other,
            },
            FormIntent::Invalid(message) => match state {
                AddServerFormState::Visible { draft, focused, .. } => {
                    AddServerFormState::Visible {
                        draft,
                        focused,
                        error: Some(message),
                    }
                }
                other => other,
            },
        }
    }
}
