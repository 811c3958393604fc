use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::interactions::register_hitbox;
use crate::runtime::ButtonView;

pub fn render_button(frame: &mut Frame<'_>, area: Rect, view: &ButtonView) {
    register_hitbox(&view.id, area.into());

    let fg = view.accent.unwrap_or(Color::White);
    let mut style = Style::default();
    if view.filled {
        style = style.bg(fg).fg(Color::Black).add_modifier(Modifier::BOLD);
    } else {
        style = style.fg(fg);
    }

    let content = Paragraph::new(Line::from(view.label.clone()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    frame.render_widget(content, area);
}
