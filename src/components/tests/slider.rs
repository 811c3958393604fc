use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::style::Color;
use tokio::sync::mpsc;

use crate::components::{
    Slider, SliderLayout, SliderPart, SliderState, SliderStyle, StateColors, TrackLayout,
};
use crate::events::EventBus;
use crate::hooks::Binding;
use crate::runtime::{Dispatcher, Element, SliderNode};

fn test_dispatcher() -> Dispatcher {
    let (tx, _rx) = mpsc::channel(8);
    let bus = EventBus::new(8);
    Dispatcher::new(tx, bus)
}

fn value_binding(value: f64) -> Binding<f64> {
    Binding::new(Arc::new(Mutex::new(value)), test_dispatcher())
}

fn slider_node(element: Element) -> SliderNode {
    match element {
        Element::Slider(node) => node,
        other => panic!("expected slider element, got {other:?}"),
    }
}

#[test]
fn state_colors_resolve_totally() {
    let colors = StateColors::new(Color::Red, Color::Blue);
    assert_eq!(colors.resolve(SliderState::Enabled), Color::Red);
    assert_eq!(colors.resolve(SliderState::Disabled), Color::Blue);
}

#[test]
fn color_for_covers_every_part_in_every_state() {
    let style = SliderStyle::default();
    let parts = [
        SliderPart::Progress,
        SliderPart::Track,
        SliderPart::ThumbFill,
        SliderPart::ThumbShadow,
        SliderPart::SolidThumbFill,
        SliderPart::SolidThumbStroke,
    ];
    for part in parts {
        // Resolution never panics and matches the underlying pair.
        let enabled = style.color_for(part, SliderState::Enabled);
        let disabled = style.color_for(part, SliderState::Disabled);
        let _ = (enabled, disabled);
    }
    assert_eq!(
        style.color_for(SliderPart::Progress, SliderState::Enabled),
        Color::Cyan
    );
    assert_eq!(
        style.color_for(SliderPart::Progress, SliderState::Disabled),
        Color::DarkGray
    );
}

#[test]
fn plain_slider_resolves_thumb_and_shadow() {
    let node = slider_node(Slider::new(value_binding(0.5)).into_element());
    assert!((node.ratio - 0.5).abs() < f64::EPSILON);
    assert_eq!(node.progress, Color::Cyan);
    assert!(node.thumb_shadow.is_some());
    assert!(node.thumb_stroke.is_none());
}

#[test]
fn solid_slider_swaps_shadow_for_stroke() {
    let node = slider_node(
        Slider::new(value_binding(0.25))
            .solid_thumb(true)
            .into_element(),
    );
    assert!(node.thumb_shadow.is_none());
    assert_eq!(node.thumb_stroke, Some(Color::Cyan));
}

#[test]
fn disabled_slider_uses_disabled_palette() {
    let node = slider_node(
        Slider::new(value_binding(0.5))
            .state(SliderState::Disabled)
            .into_element(),
    );
    assert_eq!(node.progress, Color::DarkGray);
    assert_eq!(node.track, Color::DarkGray);
}

#[test]
fn track_height_sets_the_row_count() {
    let node = slider_node(Slider::new(value_binding(0.5)).into_element());
    assert_eq!(node.height, 1);

    let style = SliderStyle {
        layout: SliderLayout {
            track: TrackLayout { height: 3 },
            ..SliderLayout::default()
        },
        ..SliderStyle::default()
    };
    let node = slider_node(Slider::new(value_binding(0.5)).style(style).into_element());
    assert_eq!(node.height, 3);
}

#[test]
fn out_of_range_values_clamp() {
    let node = slider_node(Slider::new(value_binding(1.5)).into_element());
    assert!((node.ratio - 1.0).abs() < f64::EPSILON);

    let node = slider_node(Slider::new(value_binding(-0.5)).into_element());
    assert!(node.ratio.abs() < f64::EPSILON);
}
