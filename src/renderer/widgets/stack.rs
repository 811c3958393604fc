use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::runtime::{StackDirection, StackView, TitleMode, View};

use super::RenderFn;

pub fn render_stack(frame: &mut Frame<'_>, area: Rect, view: &StackView, render_child: RenderFn) {
    if view.children.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = view
        .children
        .iter()
        .map(|child| match view.direction {
            StackDirection::Column => preferred_height(child),
            StackDirection::Row => preferred_width(child),
        })
        .collect();
    let layout = Layout::default()
        .direction(Direction::from(view.direction))
        .constraints(constraints);
    let chunks = layout.split(area);
    for (child, rect) in view.children.iter().zip(chunks.iter()) {
        render_child(frame, *rect, child);
    }
}

// Leaves declare how many rows they want; whatever is flexible shares the
// remainder.
fn preferred_height(view: &View) -> Constraint {
    match view {
        View::Empty => Constraint::Length(0),
        View::Text(text) => match text.mode {
            TitleMode::OneLine => Constraint::Length(1),
            TitleMode::MultiLine {
                max_lines: Some(limit),
                ..
            } => Constraint::Max(limit as u16),
            TitleMode::MultiLine {
                max_lines: None, ..
            } => Constraint::Min(1),
        },
        View::Button(_) => Constraint::Length(3),
        View::Field(field) => Constraint::Length(field.height),
        View::Slider(slider) => Constraint::Length(slider.height),
        View::Section(section) => Constraint::Length(section.rows.len() as u16 + 2),
        View::Stack(_) => Constraint::Min(1),
    }
}

fn preferred_width(view: &View) -> Constraint {
    match view {
        View::Empty => Constraint::Length(0),
        View::Button(button) => {
            Constraint::Length(UnicodeWidthStr::width(button.label.as_str()) as u16 + 4)
        }
        _ => Constraint::Min(1),
    }
}

impl From<StackDirection> for Direction {
    fn from(value: StackDirection) -> Self {
        match value {
            StackDirection::Row => Direction::Horizontal,
            StackDirection::Column => Direction::Vertical,
        }
    }
}
