use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::edit::{Action, EditFields, EditState, FieldWiring, ReturnButtonAction};
use crate::events::{EventBus, FrameworkEvent};
use crate::hooks::Binding;
use crate::runtime::Dispatcher;

fn test_dispatcher() -> Dispatcher {
    let (tx, _rx) = mpsc::channel(8);
    let bus = EventBus::new(8);
    Dispatcher::new(tx, bus)
}

fn binding<T: Send + 'static>(value: T, dispatcher: &Dispatcher) -> Binding<T> {
    Binding::new(Arc::new(Mutex::new(value)), dispatcher.clone())
}

fn plain_wiring(text: &Binding<String>, state: &Binding<EditState>) -> FieldWiring {
    FieldWiring {
        text: text.clone(),
        state: state.clone(),
        on_begin: None,
        on_change: None,
        on_end: None,
        on_return: ReturnButtonAction::default(),
    }
}

fn key(code: KeyCode) -> FrameworkEvent {
    FrameworkEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn counter() -> (Arc<AtomicUsize>, Action) {
    let count = Arc::new(AtomicUsize::new(0));
    let action = {
        let count = count.clone();
        Arc::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    };
    (count, action)
}

#[test]
fn register_preserves_and_clamps_cursor() {
    let dispatcher = test_dispatcher();
    let text = binding(String::from("hello"), &dispatcher);
    let state = binding(EditState::Enabled, &dispatcher);

    EditFields::register("edit.clamp", plain_wiring(&text, &state));
    assert_eq!(EditFields::cursor("edit.clamp"), 5);

    text.set(String::from("hi"));
    EditFields::register("edit.clamp", plain_wiring(&text, &state));
    assert_eq!(
        EditFields::cursor("edit.clamp"),
        2,
        "cursor should clamp to the new text length"
    );

    text.set(String::from("日本"));
    EditFields::register("edit.clamp", plain_wiring(&text, &state));
    assert_eq!(
        EditFields::cursor("edit.clamp"),
        0,
        "a cursor landing inside a multibyte character backs up to a boundary"
    );
}

// Focus is a single global slot, so every flow that depends on it lives in
// one test.
#[test]
fn focus_routes_keystrokes_and_lifecycle_callbacks() {
    let dispatcher = test_dispatcher();
    let text = binding(String::from("hi"), &dispatcher);
    let state = binding(EditState::Enabled, &dispatcher);
    let (begins, on_begin) = counter();
    let (changes, on_change) = counter();
    let (ends, on_end) = counter();
    EditFields::register(
        "edit.a",
        FieldWiring {
            text: text.clone(),
            state: state.clone(),
            on_begin: Some(on_begin),
            on_change: Some(on_change),
            on_end: Some(on_end),
            on_return: ReturnButtonAction::Blur,
        },
    );

    EditFields::focus(Some("edit.a"), &dispatcher);
    assert!(EditFields::is_focused("edit.a"));
    assert_eq!(state.get(), EditState::Focused);
    assert_eq!(begins.load(Ordering::SeqCst), 1);

    EditFields::handle_event(&key(KeyCode::Char('!')), &dispatcher);
    assert_eq!(text.get(), "hi!");
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    EditFields::handle_event(&key(KeyCode::Backspace), &dispatcher);
    assert_eq!(text.get(), "hi");

    EditFields::handle_event(&key(KeyCode::Left), &dispatcher);
    EditFields::handle_event(&key(KeyCode::Char('?')), &dispatcher);
    assert_eq!(text.get(), "h?i", "insertion follows the cursor");

    EditFields::handle_event(&key(KeyCode::Esc), &dispatcher);
    assert!(!EditFields::is_focused("edit.a"));
    assert_eq!(state.get(), EditState::Enabled);
    assert_eq!(ends.load(Ordering::SeqCst), 1);

    state.set(EditState::Disabled);
    EditFields::focus(Some("edit.a"), &dispatcher);
    assert!(
        !EditFields::is_focused("edit.a"),
        "disabled fields refuse focus"
    );
    assert_eq!(state.get(), EditState::Disabled);

    let text_b = binding(String::new(), &dispatcher);
    let state_b = binding(EditState::Enabled, &dispatcher);
    let (returns, on_return) = counter();
    EditFields::register(
        "edit.b",
        FieldWiring {
            text: text_b.clone(),
            state: state_b.clone(),
            on_begin: None,
            on_change: None,
            on_end: None,
            on_return: ReturnButtonAction::BlurAndCustom(on_return),
        },
    );
    EditFields::focus(Some("edit.b"), &dispatcher);
    EditFields::handle_event(&key(KeyCode::Enter), &dispatcher);
    assert_eq!(returns.load(Ordering::SeqCst), 1);
    assert!(!EditFields::is_focused("edit.b"));
    assert_eq!(state_b.get(), EditState::Enabled);

    // Replacing the bound text from outside must not leave the cursor inside
    // a multibyte character; the next keystroke still has to land safely.
    let text_c = binding(String::from("ab"), &dispatcher);
    let state_c = binding(EditState::Enabled, &dispatcher);
    EditFields::register("edit.c", plain_wiring(&text_c, &state_c));
    EditFields::focus(Some("edit.c"), &dispatcher);
    text_c.set(String::from("日本"));
    EditFields::handle_event(&key(KeyCode::Char('x')), &dispatcher);
    assert_eq!(text_c.get(), "x日本");
    text_c.set(String::from("中文字"));
    EditFields::handle_event(&key(KeyCode::Backspace), &dispatcher);
    assert_eq!(text_c.get(), "中文字", "backspace at offset zero is a no-op");

    EditFields::focus(Some("edit.b"), &dispatcher);
    let mut live = HashSet::new();
    live.insert(String::from("edit.clamp"));
    EditFields::prune(&live);
    assert!(
        !EditFields::is_focused("edit.b"),
        "pruning a focused field drops focus"
    );
    assert_eq!(EditFields::cursor("edit.b"), 0);
}
