use ratatui::layout::Alignment;
use ratatui::style::Color;

use crate::edit::{Action, EditFields, EditState, FieldWiring, ReturnButtonAction};
use crate::hooks::{Binding, Scope};
use crate::interactions::is_button_click;
use crate::runtime::{ButtonNode, Element, FieldNode, FieldTrailing};

use super::title::Title;

/// Input discipline of a text field. Secure fields mask their content and
/// swap the clear button for a reveal toggle; search fields show a leading
/// icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFieldKind {
    #[default]
    Default,
    Secure,
    Search,
}

impl TextFieldKind {
    pub fn is_secure(self) -> bool {
        matches!(self, TextFieldKind::Secure)
    }

    pub fn is_search(self) -> bool {
        matches!(self, TextFieldKind::Search)
    }
}

/// Caller-driven validation accent layered over the interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFieldHighlight {
    #[default]
    Default,
    Success,
    Error,
}

/// A color per interaction state and highlight. Disabled wins over any
/// highlight; success and error win over focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldColors {
    pub enabled: Color,
    pub focused: Color,
    pub disabled: Color,
    pub success: Color,
    pub error: Color,
}

impl FieldColors {
    pub const fn new(
        enabled: Color,
        focused: Color,
        disabled: Color,
        success: Color,
        error: Color,
    ) -> Self {
        Self {
            enabled,
            focused,
            disabled,
            success,
            error,
        }
    }

    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color, color, color)
    }

    pub fn resolve(&self, state: EditState, highlight: TextFieldHighlight) -> Color {
        if state.is_disabled() {
            return self.disabled;
        }
        match highlight {
            TextFieldHighlight::Success => self.success,
            TextFieldHighlight::Error => self.error,
            TextFieldHighlight::Default => {
                if state.is_focused() {
                    self.focused
                } else {
                    self.enabled
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFieldLayout {
    /// Rows of the field box, border included.
    pub height: u16,
    /// Columns between the search icon or trailing button and the text.
    pub content_spacing: u16,
}

impl Default for TextFieldLayout {
    fn default() -> Self {
        Self {
            height: 3,
            content_spacing: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextFieldColors {
    pub background: FieldColors,
    pub border: FieldColors,
    pub header: FieldColors,
    pub footer: FieldColors,
    pub text: FieldColors,
    pub placeholder: FieldColors,
    pub search_icon: FieldColors,
}

impl Default for TextFieldColors {
    fn default() -> Self {
        Self {
            background: FieldColors::uniform(Color::Black),
            border: FieldColors::new(
                Color::DarkGray,
                Color::White,
                Color::DarkGray,
                Color::Green,
                Color::Red,
            ),
            header: FieldColors::new(
                Color::Gray,
                Color::Gray,
                Color::DarkGray,
                Color::Green,
                Color::Red,
            ),
            footer: FieldColors::new(
                Color::Gray,
                Color::Gray,
                Color::DarkGray,
                Color::Green,
                Color::Red,
            ),
            text: FieldColors::new(
                Color::White,
                Color::White,
                Color::DarkGray,
                Color::White,
                Color::White,
            ),
            placeholder: FieldColors::uniform(Color::Gray),
            search_icon: FieldColors::new(
                Color::Gray,
                Color::White,
                Color::DarkGray,
                Color::Gray,
                Color::Gray,
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldMisc {
    /// Master switch for the trailing clear button on non-secure fields.
    pub clear_button: bool,
    /// Label of the cancel button next to a focused non-empty field. Unset or
    /// empty means no cancel button at all.
    pub cancel_label: Option<String>,
}

impl Default for TextFieldMisc {
    fn default() -> Self {
        Self {
            clear_button: true,
            cancel_label: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextFieldStyle {
    pub layout: TextFieldLayout,
    pub colors: TextFieldColors,
    pub misc: TextFieldMisc,
}

/// What pressing the clear button does. The default clears the bound text;
/// callers can replace or extend that with their own action.
#[derive(Clone, Default)]
pub enum ClearButtonAction {
    #[default]
    Clear,
    Custom(Action),
    ClearAndCustom(Action),
}

impl std::fmt::Debug for ClearButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "Clear"),
            Self::Custom(_) => write!(f, "Custom(..)"),
            Self::ClearAndCustom(_) => write!(f, "ClearAndCustom(..)"),
        }
    }
}

/// What pressing the cancel button does. Same shape as the clear policy; the
/// two buttons stay independently configurable.
#[derive(Clone, Default)]
pub enum CancelButtonAction {
    #[default]
    Clear,
    Custom(Action),
    ClearAndCustom(Action),
}

impl std::fmt::Debug for CancelButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "Clear"),
            Self::Custom(_) => write!(f, "Custom(..)"),
            Self::ClearAndCustom(_) => write!(f, "ClearAndCustom(..)"),
        }
    }
}

/// Derived per-field state the component recomputes after every frame:
/// whether the bound text is non-empty, and whether a secure field currently
/// reveals its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldFlags {
    pub non_empty: bool,
    pub reveal: bool,
}

/// Single-line editable text component with header, footer, trailing buttons
/// and an optional cancel button. State and text are both caller-owned
/// bindings; the component never holds text of its own.
pub struct TextField {
    id: String,
    style: TextFieldStyle,
    kind: TextFieldKind,
    highlight: TextFieldHighlight,
    state: Binding<EditState>,
    text: Binding<String>,
    placeholder: Option<String>,
    header: Option<String>,
    footer: Option<String>,
    on_begin: Option<Action>,
    on_change: Option<Action>,
    on_end: Option<Action>,
    on_return: ReturnButtonAction,
    on_clear: ClearButtonAction,
    on_cancel: CancelButtonAction,
}

impl TextField {
    pub fn new(id: impl Into<String>, state: Binding<EditState>, text: Binding<String>) -> Self {
        Self {
            id: id.into(),
            style: TextFieldStyle::default(),
            kind: TextFieldKind::Default,
            highlight: TextFieldHighlight::Default,
            state,
            text,
            placeholder: None,
            header: None,
            footer: None,
            on_begin: None,
            on_change: None,
            on_end: None,
            on_return: ReturnButtonAction::default(),
            on_clear: ClearButtonAction::default(),
            on_cancel: CancelButtonAction::default(),
        }
    }

    pub fn style(mut self, style: TextFieldStyle) -> Self {
        self.style = style;
        self
    }

    pub fn kind(mut self, kind: TextFieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn highlight(mut self, highlight: TextFieldHighlight) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn on_begin_editing(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_begin = Some(std::sync::Arc::new(action));
        self
    }

    pub fn on_change(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(std::sync::Arc::new(action));
        self
    }

    pub fn on_end_editing(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_end = Some(std::sync::Arc::new(action));
        self
    }

    pub fn on_return(mut self, action: ReturnButtonAction) -> Self {
        self.on_return = action;
        self
    }

    pub fn on_clear(mut self, action: ClearButtonAction) -> Self {
        self.on_clear = action;
        self
    }

    pub fn on_cancel(mut self, action: CancelButtonAction) -> Self {
        self.on_cancel = action;
        self
    }

    pub fn into_element(self, ctx: &mut Scope) -> Element {
        let flags = ctx.use_binding(FieldFlags::default);
        let state = self.state.get();
        let current = flags.get();

        EditFields::register(
            &self.id,
            FieldWiring {
                text: self.text.clone(),
                state: self.state.clone(),
                on_begin: self.on_begin.clone(),
                on_change: self.on_change.clone(),
                on_end: self.on_end.clone(),
                on_return: self.on_return.clone(),
            },
        );

        // The derived flags follow the bound text, never lead it. Comparing
        // before setting keeps an unchanged frame from re-rendering forever.
        {
            let text = self.text.clone();
            let kind = self.kind;
            let flags = flags.clone();
            ctx.defer(move |_| {
                let next = recompute_flags(flags.get(), text.with(String::is_empty), kind);
                if next != flags.get() {
                    flags.set(next);
                }
            });
        }

        {
            let clear_id = button_id(&self.id, "clear");
            let visibility_id = button_id(&self.id, "visibility");
            let cancel_id = button_id(&self.id, "cancel");
            let on_clear = self.on_clear.clone();
            let on_cancel = self.on_cancel.clone();
            let text = self.text.clone();
            let flags = flags.clone();
            ctx.on_event(move |event| {
                if is_button_click(event, &clear_id) {
                    run_clear_policy(&on_clear, &text, &flags);
                } else if is_button_click(event, &visibility_id) {
                    flags.update(|f| f.reveal = !f.reveal);
                } else if is_button_click(event, &cancel_id) {
                    run_cancel_policy(&on_cancel, &text, &flags);
                }
            });
        }

        let colors = &self.style.colors;
        let disabled = state.is_disabled();
        let mut children = Vec::new();

        if let Some(header) = self.header.as_deref().filter(|h| !h.is_empty()) {
            children.push(
                Title::new(header, colors.header.resolve(state, self.highlight))
                    .dim(disabled)
                    .into_element(),
            );
        }

        let value = self.text.get();
        let masked = if self.kind.is_secure() && !current.reveal {
            "*".repeat(value.chars().count())
        } else {
            value
        };
        let trailing = if self.kind.is_secure() {
            FieldTrailing::Visibility {
                revealed: current.reveal,
            }
        } else if clear_button_visible(self.kind, current.non_empty, self.style.misc.clear_button) {
            FieldTrailing::Clear
        } else {
            FieldTrailing::None
        };
        let field = Element::field(FieldNode {
            id: self.id.clone(),
            value: masked,
            placeholder: self.placeholder.clone(),
            // A bordered box cannot shrink below its frame.
            height: self.style.layout.height.max(3),
            content_spacing: self.style.layout.content_spacing,
            focused: state.is_focused(),
            search_icon: self.kind.is_search(),
            dim: disabled,
            background: colors.background.resolve(state, self.highlight),
            border: colors.border.resolve(state, self.highlight),
            text_color: colors.text.resolve(state, self.highlight),
            placeholder_color: colors.placeholder.resolve(state, self.highlight),
            icon_color: colors.search_icon.resolve(state, self.highlight),
            trailing,
        });

        let cancel_label = self.style.misc.cancel_label.as_deref();
        let row = if cancel_button_visible(self.kind, current.non_empty, state, cancel_label) {
            let label = cancel_label.unwrap_or_default();
            Element::hstack(vec![
                field,
                Element::button(
                    ButtonNode::new(button_id(&self.id, "cancel"), label)
                        .accent(colors.border.resolve(state, self.highlight)),
                ),
            ])
        } else {
            field
        };
        children.push(row);

        if let Some(footer) = self.footer.as_deref().filter(|f| !f.is_empty()) {
            children.push(
                Title::new(footer, colors.footer.resolve(state, self.highlight))
                    .multi_line(None, Alignment::Left)
                    .dim(disabled)
                    .into_element(),
            );
        }

        if children.len() == 1 {
            children.remove(0)
        } else {
            Element::vstack(children)
        }
    }
}

fn button_id(field_id: &str, suffix: &str) -> String {
    format!("{field_id}:{suffix}")
}

/// Clear button shows on non-secure fields with content, unless styled away.
pub(crate) fn clear_button_visible(kind: TextFieldKind, non_empty: bool, enabled: bool) -> bool {
    !kind.is_secure() && non_empty && enabled
}

/// Cancel button shows next to a focused, non-empty, non-secure field when a
/// non-empty label is configured.
pub(crate) fn cancel_button_visible(
    kind: TextFieldKind,
    non_empty: bool,
    state: EditState,
    label: Option<&str>,
) -> bool {
    !kind.is_secure()
        && non_empty
        && state.is_focused()
        && label.map(|l| !l.is_empty()).unwrap_or(false)
}

/// Post-frame flag refresh: `non_empty` tracks the bound text, and `reveal`
/// is forced off the moment a field stops being secure.
pub(crate) fn recompute_flags(
    current: FieldFlags,
    text_is_empty: bool,
    kind: TextFieldKind,
) -> FieldFlags {
    let mut next = current;
    next.non_empty = !text_is_empty;
    if !kind.is_secure() {
        next.reveal = false;
    }
    next
}

pub(crate) fn run_clear_policy(
    policy: &ClearButtonAction,
    text: &Binding<String>,
    flags: &Binding<FieldFlags>,
) {
    match policy {
        ClearButtonAction::Clear => zero_text(text, flags),
        ClearButtonAction::Custom(action) => action(),
        ClearButtonAction::ClearAndCustom(action) => {
            zero_text(text, flags);
            action();
        }
    }
}

pub(crate) fn run_cancel_policy(
    policy: &CancelButtonAction,
    text: &Binding<String>,
    flags: &Binding<FieldFlags>,
) {
    match policy {
        CancelButtonAction::Clear => zero_text(text, flags),
        CancelButtonAction::Custom(action) => action(),
        CancelButtonAction::ClearAndCustom(action) => {
            zero_text(text, flags);
            action();
        }
    }
}

// Clearing updates the flag in the same pass so dependent buttons disappear
// on the very next frame instead of one frame late.
fn zero_text(text: &Binding<String>, flags: &Binding<FieldFlags>) {
    text.set(String::new());
    flags.update(|f| f.non_empty = false);
}
