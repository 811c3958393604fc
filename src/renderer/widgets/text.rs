use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::components::{shape_multi_line, shape_one_line};
use crate::runtime::{TextView, TitleMode};

pub fn render_text(frame: &mut Frame<'_>, area: Rect, view: &TextView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut style = Style::default().fg(view.color.unwrap_or(Color::White));
    if view.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if view.dim {
        style = style.add_modifier(Modifier::DIM);
    }

    let (lines, alignment) = match view.mode {
        TitleMode::OneLine => (
            vec![Line::from(shape_one_line(&view.content, area.width))],
            Alignment::Left,
        ),
        TitleMode::MultiLine {
            max_lines,
            alignment,
        } => {
            let cap = max_lines
                .unwrap_or(usize::MAX)
                .min(area.height as usize);
            let lines = shape_multi_line(&view.content, area.width, Some(cap))
                .into_iter()
                .map(Line::from)
                .collect();
            (lines, alignment)
        }
    };

    let widget = Paragraph::new(lines).alignment(alignment).style(style);
    frame.render_widget(widget, area);
}
