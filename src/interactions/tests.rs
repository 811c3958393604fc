use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{Hitbox, HitboxRegistry, is_button_click};
use crate::events::FrameworkEvent;

fn click_at(column: u16, row: u16) -> FrameworkEvent {
    FrameworkEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn hitbox_contains_is_half_open() {
    let hitbox = Hitbox {
        x: 2,
        y: 1,
        width: 4,
        height: 2,
    };
    assert!(hitbox.contains(2, 1));
    assert!(hitbox.contains(5, 2));
    assert!(!hitbox.contains(6, 1));
    assert!(!hitbox.contains(2, 3));
}

#[test]
fn click_resolution_respects_recorded_regions() {
    HitboxRegistry::record(
        "tests:ok-button",
        Hitbox {
            x: 10,
            y: 4,
            width: 6,
            height: 3,
        },
    );

    assert!(is_button_click(&click_at(12, 5), "tests:ok-button"));
    assert!(!is_button_click(&click_at(0, 0), "tests:ok-button"));
    assert!(!is_button_click(&click_at(12, 5), "tests:missing"));
    assert!(!is_button_click(&FrameworkEvent::Tick, "tests:ok-button"));
}
