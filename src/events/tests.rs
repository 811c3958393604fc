use super::*;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton,
                       MouseEvent, MouseEventKind};

#[test]
fn map_terminal_event_converts_supported_inputs() {
    let key_event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let mouse_event = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };
    let resize_event = CrosstermEvent::Resize(80, 24);

    assert!(matches!(
        map_terminal_event(CrosstermEvent::Key(key_event)),
        Some(FrameworkEvent::Key(_))
    ));
    assert!(matches!(
        map_terminal_event(CrosstermEvent::Mouse(mouse_event)),
        Some(FrameworkEvent::Mouse(_))
    ));
    assert!(matches!(
        map_terminal_event(resize_event),
        Some(FrameworkEvent::Resize(80, 24))
    ));
    assert!(map_terminal_event(CrosstermEvent::FocusLost).is_none());
}

#[test]
fn ctrl_c_requires_the_control_modifier() {
    let ctrl_c = FrameworkEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let plain_c = FrameworkEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
    assert!(is_ctrl_c(&ctrl_c));
    assert!(!is_ctrl_c(&plain_c));
}

#[test]
fn mouse_helpers_report_clicks_and_positions() {
    let click = FrameworkEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 7,
        modifiers: KeyModifiers::NONE,
    });
    assert!(is_mouse_click(&click, MouseButton::Left));
    assert!(!is_mouse_click(&click, MouseButton::Right));
    assert_eq!(mouse_position(&click), Some((3, 7)));
    assert_eq!(mouse_position(&FrameworkEvent::Tick), None);
}
