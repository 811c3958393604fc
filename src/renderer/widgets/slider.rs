use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::runtime::SliderView;

const PROGRESS_CHAR: &str = "━";
const TRACK_CHAR: &str = "─";
const THUMB_CHAR: &str = "█";
const SHADOW_CHAR: &str = "▓";
const STROKE_CHAR: &str = "┃";

pub fn render_slider(frame: &mut Frame<'_>, area: Rect, view: &SliderView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // A multi-row track draws its bar on the middle row.
    let mut bar_area = Rect {
        x: area.x,
        y: area.y + (area.height - 1) / 2,
        width: area.width,
        height: 1,
    };
    if let Some(label) = &view.label {
        let label_width = UnicodeWidthStr::width(label.as_str()) as u16;
        if label_width + 1 < area.width {
            bar_area.width = area.width - label_width - 1;
            let label_area = Rect {
                x: bar_area.x + bar_area.width + 1,
                y: bar_area.y,
                width: label_width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(label.clone()))
                    .style(Style::default().fg(view.progress)),
                label_area,
            );
        }
    }

    let width = bar_area.width as usize;
    let thumb_width = (view.thumb_width as usize).clamp(1, width);
    let travel = width - thumb_width;
    let thumb_start = (view.ratio.clamp(0.0, 1.0) * travel as f64).round() as usize;

    let mut spans = Vec::new();
    if thumb_start > 0 {
        spans.push(Span::styled(
            PROGRESS_CHAR.repeat(thumb_start),
            Style::default().fg(view.progress),
        ));
    }
    spans.extend(thumb_spans(view, thumb_width));
    let remainder = width - thumb_start - thumb_width;
    if remainder > 0 {
        spans.push(Span::styled(
            TRACK_CHAR.repeat(remainder),
            Style::default().fg(view.track),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), bar_area);
}

// A stroked thumb swaps its outermost cells for stroke characters; a shadowed
// thumb keeps the fill and tints the edges instead. Narrow thumbs degrade to
// plain fill.
fn thumb_spans(view: &SliderView, thumb_width: usize) -> Vec<Span<'static>> {
    let fill = Style::default().fg(view.thumb);
    if thumb_width >= 3 {
        if let Some(stroke) = view.thumb_stroke {
            let edge = Style::default().fg(stroke);
            return vec![
                Span::styled(STROKE_CHAR, edge),
                Span::styled(THUMB_CHAR.repeat(thumb_width - 2), fill),
                Span::styled(STROKE_CHAR, edge),
            ];
        }
        if let Some(shadow) = view.thumb_shadow {
            let edge = Style::default().fg(shadow);
            return vec![
                Span::styled(SHADOW_CHAR, edge),
                Span::styled(THUMB_CHAR.repeat(thumb_width - 2), fill),
                Span::styled(SHADOW_CHAR, edge),
            ];
        }
    }
    vec![Span::styled(THUMB_CHAR.repeat(thumb_width), fill)]
}
