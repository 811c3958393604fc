use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use ratatui::style::Color;
use tokio::sync::mpsc;

use crate::components::text_field::{
    cancel_button_visible, clear_button_visible, recompute_flags, run_cancel_policy,
    run_clear_policy,
};
use crate::components::{
    CancelButtonAction, ClearButtonAction, FieldColors, FieldFlags, TextField, TextFieldHighlight,
    TextFieldKind, TextFieldLayout, TextFieldMisc, TextFieldStyle,
};
use crate::edit::EditState;
use crate::events::EventBus;
use crate::hooks::{Binding, HookRegistry, Scope};
use crate::runtime::{ComponentId, Dispatcher, Element, FieldNode, FieldTrailing};

fn test_dispatcher() -> Dispatcher {
    let (tx, _rx) = mpsc::channel(8);
    let bus = EventBus::new(8);
    Dispatcher::new(tx, bus)
}

fn binding<T: Send + 'static>(value: T, dispatcher: &Dispatcher) -> Binding<T> {
    Binding::new(Arc::new(Mutex::new(value)), dispatcher.clone())
}

fn find_field(element: &Element) -> Option<&FieldNode> {
    match element {
        Element::Field(node) => Some(node),
        Element::Stack(stack) => stack.children.iter().find_map(find_field),
        _ => None,
    }
}

fn find_button_label(element: &Element, id: &str) -> Option<String> {
    match element {
        Element::Button(node) if node.id == id => Some(node.label.clone()),
        Element::Stack(stack) => stack
            .children
            .iter()
            .find_map(|child| find_button_label(child, id)),
        _ => None,
    }
}

/// Renders the field once per call, driving the same hook store so derived
/// flags persist the way the app loop would keep them.
struct Harness {
    registry: HookRegistry,
    component: ComponentId,
    dispatcher: Dispatcher,
}

impl Harness {
    fn new() -> Self {
        Self {
            registry: HookRegistry::new(),
            component: ComponentId::new(&[0], "Field", None),
            dispatcher: test_dispatcher(),
        }
    }

    fn render(&self, field: TextField) -> Element {
        let store = self.registry.store_for(&self.component);
        let mut scope = Scope::new(self.component.clone(), store, self.dispatcher.clone());
        let element = field.into_element(&mut scope);
        for task in scope.take_deferred() {
            task(&self.dispatcher);
        }
        element
    }

    fn flags(&self) -> Binding<FieldFlags> {
        let store = self.registry.store_for(&self.component);
        let mut scope = Scope::new(self.component.clone(), store, self.dispatcher.clone());
        scope.use_binding(FieldFlags::default)
    }
}

#[test]
fn clear_button_needs_content_and_a_non_secure_kind() {
    assert!(clear_button_visible(TextFieldKind::Default, true, true));
    assert!(clear_button_visible(TextFieldKind::Search, true, true));
    assert!(!clear_button_visible(TextFieldKind::Secure, true, true));
    assert!(!clear_button_visible(TextFieldKind::Default, false, true));
    assert!(!clear_button_visible(TextFieldKind::Default, true, false));
}

#[test]
fn cancel_button_needs_focus_content_and_a_label() {
    let visible = |state, label| {
        cancel_button_visible(TextFieldKind::Default, true, state, label)
    };
    assert!(visible(EditState::Focused, Some("Cancel")));
    assert!(!visible(EditState::Enabled, Some("Cancel")));
    assert!(!visible(EditState::Focused, None));
    assert!(!visible(EditState::Focused, Some("")));
    assert!(!cancel_button_visible(
        TextFieldKind::Secure,
        true,
        EditState::Focused,
        Some("Cancel")
    ));
}

#[test]
fn recompute_tracks_text_and_clamps_reveal_to_secure_fields() {
    let flags = FieldFlags {
        non_empty: false,
        reveal: true,
    };
    let next = recompute_flags(flags, false, TextFieldKind::Secure);
    assert!(next.non_empty);
    assert!(next.reveal, "secure fields keep their reveal flag");

    let next = recompute_flags(flags, true, TextFieldKind::Default);
    assert!(!next.non_empty);
    assert!(!next.reveal, "reveal resets once the field is not secure");
}

#[test]
fn clear_policies_zero_text_and_fire_actions() {
    let dispatcher = test_dispatcher();
    let text = binding(String::from("draft"), &dispatcher);
    let flags = binding(
        FieldFlags {
            non_empty: true,
            reveal: false,
        },
        &dispatcher,
    );
    let fired = Arc::new(AtomicUsize::new(0));

    run_clear_policy(&ClearButtonAction::Clear, &text, &flags);
    assert_eq!(text.get(), "");
    assert!(!flags.get().non_empty);

    text.set(String::from("draft"));
    let action = {
        let fired = fired.clone();
        ClearButtonAction::Custom(Arc::new(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        }))
    };
    run_clear_policy(&action, &text, &flags);
    assert_eq!(text.get(), "draft", "custom alone leaves the text in place");
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    let action = {
        let fired = fired.clone();
        CancelButtonAction::ClearAndCustom(Arc::new(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        }))
    };
    run_cancel_policy(&action, &text, &flags);
    assert_eq!(text.get(), "");
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn field_colors_resolve_in_precedence_order() {
    let colors = FieldColors::new(Color::White, Color::Cyan, Color::DarkGray, Color::Green, Color::Red);
    assert_eq!(
        colors.resolve(EditState::Disabled, TextFieldHighlight::Error),
        Color::DarkGray,
        "disabled beats any highlight"
    );
    assert_eq!(
        colors.resolve(EditState::Focused, TextFieldHighlight::Error),
        Color::Red,
        "highlight beats focus"
    );
    assert_eq!(
        colors.resolve(EditState::Enabled, TextFieldHighlight::Success),
        Color::Green
    );
    assert_eq!(
        colors.resolve(EditState::Focused, TextFieldHighlight::Default),
        Color::Cyan
    );
    assert_eq!(
        colors.resolve(EditState::Enabled, TextFieldHighlight::Default),
        Color::White
    );
}

#[test]
fn clear_button_appears_one_frame_after_text_arrives() {
    let harness = Harness::new();
    let dispatcher = &harness.dispatcher;
    let state = binding(EditState::Enabled, dispatcher);
    let text = binding(String::from("abc"), dispatcher);
    let build = || TextField::new("tf.clear", state.clone(), text.clone());

    let first = harness.render(build());
    let node = find_field(&first).expect("field node");
    assert_eq!(
        node.trailing,
        FieldTrailing::None,
        "derived flags lag the text by one frame"
    );

    let second = harness.render(build());
    let node = find_field(&second).expect("field node");
    assert_eq!(node.trailing, FieldTrailing::Clear);
}

#[test]
fn secure_fields_mask_until_revealed() {
    let harness = Harness::new();
    let dispatcher = &harness.dispatcher;
    let state = binding(EditState::Enabled, dispatcher);
    let text = binding(String::from("abc"), dispatcher);
    let build = || {
        TextField::new("tf.secure", state.clone(), text.clone()).kind(TextFieldKind::Secure)
    };

    let element = harness.render(build());
    let node = find_field(&element).expect("field node");
    assert_eq!(node.value, "***");
    assert_eq!(node.trailing, FieldTrailing::Visibility { revealed: false });

    harness.flags().update(|f| f.reveal = true);
    let element = harness.render(build());
    let node = find_field(&element).expect("field node");
    assert_eq!(node.value, "abc");
    assert_eq!(node.trailing, FieldTrailing::Visibility { revealed: true });
}

#[test]
fn cancel_button_renders_only_while_focused() {
    let harness = Harness::new();
    let dispatcher = &harness.dispatcher;
    let state = binding(EditState::Focused, dispatcher);
    let text = binding(String::from("query"), dispatcher);
    let style = TextFieldStyle {
        misc: TextFieldMisc {
            clear_button: true,
            cancel_label: Some(String::from("Cancel")),
        },
        ..TextFieldStyle::default()
    };
    let build = || {
        TextField::new("tf.cancel", state.clone(), text.clone()).style(style.clone())
    };

    // First render seeds the flags, second shows the button.
    harness.render(build());
    let element = harness.render(build());
    assert_eq!(
        find_button_label(&element, "tf.cancel:cancel").as_deref(),
        Some("Cancel")
    );

    state.set(EditState::Enabled);
    let element = harness.render(build());
    assert!(find_button_label(&element, "tf.cancel:cancel").is_none());
}

#[test]
fn layout_metrics_reach_the_field_node() {
    let harness = Harness::new();
    let dispatcher = &harness.dispatcher;
    let state = binding(EditState::Enabled, dispatcher);
    let text = binding(String::new(), dispatcher);
    let style = TextFieldStyle {
        layout: TextFieldLayout {
            height: 5,
            content_spacing: 2,
        },
        ..TextFieldStyle::default()
    };

    let element = harness.render(
        TextField::new("tf.layout", state.clone(), text.clone()).style(style),
    );
    let node = find_field(&element).expect("field node");
    assert_eq!(node.height, 5);
    assert_eq!(node.content_spacing, 2);

    // The bordered box never shrinks below its frame.
    let element = harness.render(
        TextField::new("tf.layout", state.clone(), text.clone()).style(TextFieldStyle {
            layout: TextFieldLayout {
                height: 1,
                content_spacing: 1,
            },
            ..TextFieldStyle::default()
        }),
    );
    let node = find_field(&element).expect("field node");
    assert_eq!(node.height, 3);
}

#[test]
fn header_and_footer_wrap_the_field() {
    let harness = Harness::new();
    let dispatcher = &harness.dispatcher;
    let state = binding(EditState::Enabled, dispatcher);
    let text = binding(String::new(), dispatcher);

    let element = harness.render(
        TextField::new("tf.framed", state.clone(), text.clone())
            .header("Name")
            .footer("Shown on your profile"),
    );

    let Element::Stack(stack) = &element else {
        panic!("expected stack, got {element:?}");
    };
    assert_eq!(stack.children.len(), 3);
    assert!(matches!(&stack.children[0], Element::Text(t) if t.content == "Name"));
    assert!(matches!(&stack.children[1], Element::Field(_)));
    assert!(
        matches!(&stack.children[2], Element::Text(t) if t.content == "Shown on your profile")
    );
}
