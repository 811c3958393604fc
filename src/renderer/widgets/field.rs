use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::edit::EditFields;
use crate::interactions::register_hitbox;
use crate::runtime::{FieldTrailing, FieldView};

const SEARCH_ICON: &str = "⌕";
const CLEAR_ICON: &str = "✕";
const REVEALED_ICON: &str = "◉";
const HIDDEN_ICON: &str = "○";

pub fn render_field(frame: &mut Frame<'_>, area: Rect, view: &FieldView) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    // The whole field is the focus target.
    EditFields::register_hitbox(&view.id, area.into());

    let mut border_style = Style::default().fg(view.border);
    if view.focused {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(view.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Icons claim one cell plus the configured gap toward the text.
    let gap = 1 + view.content_spacing;
    let mut text_area = inner;
    if view.search_icon && text_area.width > gap {
        let icon_area = Rect {
            x: text_area.x,
            y: text_area.y,
            width: 1,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(SEARCH_ICON))
                .style(Style::default().fg(view.icon_color)),
            icon_area,
        );
        text_area.x += gap;
        text_area.width -= gap;
    }

    let trailing = match view.trailing {
        FieldTrailing::None => None,
        FieldTrailing::Clear => Some((CLEAR_ICON, "clear")),
        FieldTrailing::Visibility { revealed: true } => Some((REVEALED_ICON, "visibility")),
        FieldTrailing::Visibility { revealed: false } => Some((HIDDEN_ICON, "visibility")),
    };
    if let Some((icon, suffix)) = trailing {
        if text_area.width > gap {
            let icon_area = Rect {
                x: text_area.x + text_area.width - 1,
                y: text_area.y,
                width: 1,
                height: 1,
            };
            register_hitbox(&format!("{}:{suffix}", view.id), icon_area.into());
            frame.render_widget(
                Paragraph::new(Line::from(icon)).style(Style::default().fg(view.text_color)),
                icon_area,
            );
            text_area.width -= gap;
        }
    }

    let placeholder = view.placeholder.clone().unwrap_or_default();
    let showing_placeholder = view.value.is_empty() && !placeholder.is_empty();
    let content = if showing_placeholder {
        placeholder
    } else {
        view.value.clone()
    };
    let mut text_style = Style::default().bg(view.background);
    text_style = if showing_placeholder {
        text_style.fg(view.placeholder_color)
    } else {
        text_style.fg(view.text_color)
    };
    if view.dim {
        text_style = text_style.add_modifier(Modifier::DIM);
    }
    frame.render_widget(
        Paragraph::new(Line::from(content)).style(text_style),
        text_area,
    );

    if view.focused {
        // A cursor landing mid-character (a masked value swaps byte lengths)
        // still resolves to a whole-cell column.
        let cursor_index = view.cursor.min(view.value.len());
        let prefix_width: u16 = view
            .value
            .char_indices()
            .take_while(|(offset, _)| *offset < cursor_index)
            .map(|(_, c)| UnicodeWidthChar::width(c).unwrap_or(0) as u16)
            .sum();
        let max_x = text_area
            .x
            .saturating_add(text_area.width.saturating_sub(1));
        let cursor_x = text_area.x.saturating_add(prefix_width).min(max_x);
        frame.set_cursor(cursor_x, text_area.y);
    }
}
