use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use parking_lot::RwLock;
use tracing::trace;

use crate::events::{FrameworkEvent, mouse_position};
use crate::hooks::Binding;
use crate::interactions::Hitbox;
use crate::runtime::Dispatcher;

use super::state::{Action, EditState, ReturnButtonAction};

/// Everything a rendered field wires into the edit core for one frame.
/// Components re-register on every render; the cursor survives across
/// registrations of the same id.
pub struct FieldWiring {
    pub text: Binding<String>,
    pub state: Binding<EditState>,
    pub on_begin: Option<Action>,
    pub on_change: Option<Action>,
    pub on_end: Option<Action>,
    pub on_return: ReturnButtonAction,
}

struct FieldEntry {
    wiring: FieldWiring,
    cursor: usize,
}

/// Global focus and keystroke router for editable fields. One field at most
/// holds focus; key events mutate its bound text and fire the caller's
/// lifecycle callbacks verbatim.
pub struct EditFields {
    fields: RwLock<HashMap<String, FieldEntry>>,
    focused: RwLock<Option<String>>,
    hitboxes: RwLock<HashMap<String, Hitbox>>,
}

impl EditFields {
    fn new() -> Self {
        Self {
            fields: RwLock::new(HashMap::new()),
            focused: RwLock::new(None),
            hitboxes: RwLock::new(HashMap::new()),
        }
    }

    fn global() -> &'static Self {
        static REGISTRY: OnceLock<EditFields> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    pub fn register(id: &str, wiring: FieldWiring) {
        let registry = Self::global();
        let mut fields = registry.fields.write();
        let cursor = wiring.text.with(|value| {
            fields
                .get(id)
                .map(|entry| clamp_cursor(value, entry.cursor))
                .unwrap_or(value.len())
        });
        fields.insert(id.to_string(), FieldEntry { wiring, cursor });
    }

    pub fn prune(live: &HashSet<String>) {
        let registry = Self::global();
        registry.fields.write().retain(|id, _| live.contains(id));
        let mut focused = registry.focused.write();
        if let Some(id) = focused.as_ref() {
            if !live.contains(id) {
                trace!(field = %id, "focused field disappeared, dropping focus");
                *focused = None;
            }
        }
    }

    pub fn register_hitbox(id: &str, hitbox: Hitbox) {
        let registry = Self::global();
        registry.hitboxes.write().insert(id.to_string(), hitbox);
    }

    pub fn reset_hitboxes() {
        let registry = Self::global();
        registry.hitboxes.write().clear();
    }

    pub fn is_focused(id: &str) -> bool {
        let registry = Self::global();
        registry.focused.read().as_deref() == Some(id)
    }

    pub fn cursor(id: &str) -> usize {
        let registry = Self::global();
        registry
            .fields
            .read()
            .get(id)
            .map(|entry| entry.cursor)
            .unwrap_or(0)
    }

    /// Moves focus to `target` (or blurs on `None`), firing `on_end` on the
    /// field losing focus and `on_begin` on the one gaining it. Disabled
    /// fields refuse focus.
    pub fn focus(target: Option<&str>, dispatcher: &Dispatcher) {
        let registry = Self::global();
        let current = registry.focused.read().clone();
        if current.as_deref() == target {
            return;
        }

        let mut end_callback = None;
        let mut begin_callback = None;
        {
            let fields = registry.fields.read();
            if let Some(id) = target {
                match fields.get(id) {
                    Some(entry) if !entry.wiring.state.get().is_disabled() => {}
                    _ => return,
                }
            }

            if let Some(previous) = current.as_deref().and_then(|id| fields.get(id)) {
                if previous.wiring.state.get().is_focused() {
                    previous.wiring.state.set(EditState::Enabled);
                }
                end_callback = previous.wiring.on_end.clone();
            }
            if let Some(next) = target.and_then(|id| fields.get(id)) {
                next.wiring.state.set(EditState::Focused);
                begin_callback = next.wiring.on_begin.clone();
            }
        }

        *registry.focused.write() = target.map(str::to_string);
        trace!(field = ?target, "focus moved");
        if let Some(callback) = end_callback {
            callback();
        }
        if let Some(callback) = begin_callback {
            callback();
        }
        dispatcher.request_render();
    }

    pub fn handle_event(event: &FrameworkEvent, dispatcher: &Dispatcher) {
        match event {
            FrameworkEvent::Mouse(mouse)
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) =>
            {
                if let Some((column, row)) = mouse_position(event) {
                    let hit = {
                        let registry = Self::global();
                        let hitboxes = registry.hitboxes.read();
                        hitboxes
                            .iter()
                            .find(|(_, hitbox)| hitbox.contains(column, row))
                            .map(|(id, _)| id.clone())
                    };
                    if let Some(id) = hit {
                        Self::focus(Some(&id), dispatcher);
                    }
                }
            }
            FrameworkEvent::Key(key) => Self::handle_key(key, dispatcher),
            _ => {}
        }
    }

    fn handle_key(key: &KeyEvent, dispatcher: &Dispatcher) {
        let registry = Self::global();
        let Some(focused) = registry.focused.read().clone() else {
            return;
        };

        // An externally disabled field keeps its binding but stops receiving
        // keystrokes; the next event drops the stale focus.
        let still_editable = registry
            .fields
            .read()
            .get(&focused)
            .map(|entry| entry.wiring.state.get().is_focused())
            .unwrap_or(false);
        if !still_editable {
            Self::focus(None, dispatcher);
            return;
        }

        match key.code {
            KeyCode::Esc => Self::focus(None, dispatcher),
            KeyCode::Enter => Self::run_return_action(&focused, dispatcher),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Self::edit_focused(&focused, dispatcher, |value, cursor| {
                    value.insert(*cursor, c);
                    *cursor += c.len_utf8();
                    true
                });
            }
            KeyCode::Backspace => {
                Self::edit_focused(&focused, dispatcher, |value, cursor| {
                    let Some(previous) = value[..*cursor].chars().next_back() else {
                        return false;
                    };
                    *cursor -= previous.len_utf8();
                    value.remove(*cursor);
                    true
                });
            }
            KeyCode::Delete => {
                Self::edit_focused(&focused, dispatcher, |value, cursor| {
                    if *cursor >= value.len() {
                        return false;
                    }
                    value.remove(*cursor);
                    true
                });
            }
            KeyCode::Left => Self::move_cursor(&focused, dispatcher, CursorMove::Left),
            KeyCode::Right => Self::move_cursor(&focused, dispatcher, CursorMove::Right),
            KeyCode::Home => Self::move_cursor(&focused, dispatcher, CursorMove::Start),
            KeyCode::End => Self::move_cursor(&focused, dispatcher, CursorMove::End),
            _ => {}
        }
    }

    fn run_return_action(id: &str, dispatcher: &Dispatcher) {
        let action = {
            let registry = Self::global();
            let fields = registry.fields.read();
            fields
                .get(id)
                .map(|entry| entry.wiring.on_return.clone())
                .unwrap_or_default()
        };
        match action {
            ReturnButtonAction::Blur => Self::focus(None, dispatcher),
            ReturnButtonAction::Custom(callback) => callback(),
            ReturnButtonAction::BlurAndCustom(callback) => {
                Self::focus(None, dispatcher);
                callback();
            }
        }
    }

    fn edit_focused<F>(id: &str, dispatcher: &Dispatcher, mutate: F)
    where
        F: FnOnce(&mut String, &mut usize) -> bool,
    {
        let change_callback = {
            let registry = Self::global();
            let mut fields = registry.fields.write();
            let Some(entry) = fields.get_mut(id) else {
                return;
            };
            let mut changed = false;
            let cursor = &mut entry.cursor;
            entry.wiring.text.update(|value| {
                *cursor = clamp_cursor(value, *cursor);
                changed = mutate(value, cursor);
            });
            if !changed {
                return;
            }
            entry.wiring.on_change.clone()
        };
        if let Some(callback) = change_callback {
            callback();
        }
        dispatcher.request_render();
    }

    fn move_cursor(id: &str, dispatcher: &Dispatcher, direction: CursorMove) {
        let registry = Self::global();
        let mut fields = registry.fields.write();
        let Some(entry) = fields.get_mut(id) else {
            return;
        };
        let FieldEntry { wiring, cursor } = entry;
        wiring.text.with(|value| {
            let at = clamp_cursor(value, *cursor);
            *cursor = match direction {
                CursorMove::Left => value[..at]
                    .chars()
                    .next_back()
                    .map(|c| at - c.len_utf8())
                    .unwrap_or(0),
                CursorMove::Right => value[at..]
                    .chars()
                    .next()
                    .map(|c| at + c.len_utf8())
                    .unwrap_or(at),
                CursorMove::Start => 0,
                CursorMove::End => value.len(),
            };
        });
        dispatcher.request_render();
    }
}

// The bound text can be replaced wholesale between keystrokes, so a stored
// byte offset may land past the end or inside a multibyte character. Back it
// up to the nearest char boundary before any insert or slice.
fn clamp_cursor(value: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(value.len());
    while !value.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

#[derive(Clone, Copy)]
enum CursorMove {
    Left,
    Right,
    Start,
    End,
}
