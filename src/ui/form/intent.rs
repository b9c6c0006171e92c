use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    Open,
    Close,
    FocusNext,
    FocusPrev,
    /// Typed character for the focused text field.
    Input(char),
    Backspace,
    ToggleStatus,
    /// Submit was rejected; show the reason.
    Invalid(String),
}

impl Intent for FormIntent {}
