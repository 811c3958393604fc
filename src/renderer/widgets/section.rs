use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::interactions::{Hitbox, register_hitbox};
use crate::runtime::SectionView;

pub fn render_section(frame: &mut Frame<'_>, area: Rect, view: &SectionView) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let items: Vec<ListItem> = if view.rows.is_empty() {
        vec![ListItem::new(Line::from("(no entries)"))]
    } else {
        view.rows
            .iter()
            .map(|row| {
                let mut line = Line::from(row.title.clone());
                if let Some(color) = row.color {
                    line = line.style(Style::default().fg(color));
                }
                ListItem::new(line)
            })
            .collect()
    };

    let mut block = Block::default().borders(Borders::ALL);
    if let Some(title) = &view.title {
        block = block.title(title.as_str());
    }
    let inner = block.inner(area);
    let mut widget = List::new(items).block(block);

    // Rows are flat and unscrolled, so row N sits N cells below the border.
    for (index, row) in view.rows.iter().enumerate() {
        if index as u16 >= inner.height {
            break;
        }
        register_hitbox(
            &row.id,
            Hitbox {
                x: inner.x,
                y: inner.y + index as u16,
                width: inner.width,
                height: 1,
            },
        );
    }

    if let Some(index) = view.selected.filter(|_| !view.rows.is_empty()) {
        let mut state = ListState::default();
        state.select(Some(index.min(view.rows.len() - 1)));
        let accent = view.accent.unwrap_or(Color::Cyan);
        widget = widget.highlight_symbol("▶ ").highlight_style(
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(widget, area, &mut state);
    } else {
        frame.render_widget(widget, area);
    }
}
