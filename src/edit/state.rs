use std::sync::Arc;

/// Interaction state of an editable field. Owned by the parent through a
/// binding; the edit core moves it between `Enabled` and `Focused`, while
/// `Disabled` is only ever set by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Enabled,
    Focused,
    Disabled,
}

impl EditState {
    pub fn is_focused(self) -> bool {
        matches!(self, EditState::Focused)
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, EditState::Disabled)
    }
}

/// Caller-supplied side effect attached to a button or lifecycle event.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// What pressing Return does while a field is focused. The built-in behavior
/// ends the edit; custom policies may replace or augment it.
#[derive(Clone, Default)]
pub enum ReturnButtonAction {
    #[default]
    Blur,
    Custom(Action),
    BlurAndCustom(Action),
}

impl std::fmt::Debug for ReturnButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnButtonAction::Blur => f.write_str("Blur"),
            ReturnButtonAction::Custom(_) => f.write_str("Custom(..)"),
            ReturnButtonAction::BlurAndCustom(_) => f.write_str("BlurAndCustom(..)"),
        }
    }
}
