use ratatui::style::Color;

use crate::components::{Section, SectionList, SectionRow};
use crate::runtime::{Element, SectionNode};

fn sections(element: &Element) -> Vec<&SectionNode> {
    let Element::Stack(stack) = element else {
        panic!("expected stack, got {element:?}");
    };
    stack
        .children
        .iter()
        .map(|child| match child {
            Element::Section(node) => node,
            other => panic!("expected section, got {other:?}"),
        })
        .collect()
}

fn demo_list() -> SectionList {
    SectionList::new(vec![
        Section::new(
            "Components",
            vec![
                SectionRow::new("demo.slider", "Slider"),
                SectionRow::new("demo.text_field", "Text Field"),
            ],
        ),
        Section::new("About", vec![SectionRow::new("demo.credits", "Credits")]),
    ])
}

#[test]
fn sections_keep_their_titles_and_rows() {
    let element = demo_list().into_element();
    let sections = sections(&element);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title.as_deref(), Some("Components"));
    assert_eq!(sections[0].rows.len(), 2);
    assert_eq!(sections[0].rows[1].id, "demo.text_field");
    assert_eq!(sections[1].rows[0].title, "Credits");
}

#[test]
fn selection_lands_in_exactly_one_section() {
    let element = demo_list().selected(1, 0).into_element();
    let sections = sections(&element);

    assert_eq!(sections[0].selected, None);
    assert_eq!(sections[1].selected, Some(0));
}

#[test]
fn accent_applies_to_every_section() {
    let element = demo_list().accent(Color::Magenta).into_element();
    for section in sections(&element) {
        assert_eq!(section.accent, Some(Color::Magenta));
    }
}
