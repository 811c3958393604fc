use ratatui::layout::Alignment;
use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::runtime::{Element, TextNode, TitleMode};

/// Styled text component used throughout the kit for headers, footers and
/// free-standing labels. A pure function of its inputs: the mode decides
/// whether overflow truncates on one line or wraps across several.
#[derive(Clone, Debug)]
pub struct Title {
    text: String,
    color: Color,
    mode: TitleMode,
    bold: bool,
    dim: bool,
}

impl Title {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            mode: TitleMode::OneLine,
            bold: false,
            dim: false,
        }
    }

    pub fn one_line(mut self) -> Self {
        self.mode = TitleMode::OneLine;
        self
    }

    pub fn multi_line(mut self, max_lines: Option<usize>, alignment: Alignment) -> Self {
        self.mode = TitleMode::MultiLine {
            max_lines,
            alignment,
        };
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }

    pub fn into_element(self) -> Element {
        Element::Text(TextNode {
            content: self.text,
            color: Some(self.color),
            mode: self.mode,
            bold: self.bold,
            dim: self.dim,
        })
    }
}

pub const ELLIPSIS: char = '…';

/// Fits `text` on exactly one line of `width` cells, truncating with a
/// trailing ellipsis when it does not fit. Never wraps.
pub fn shape_one_line(text: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut shaped = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width > width.saturating_sub(1) {
            break;
        }
        shaped.push(c);
        used += char_width;
    }
    shaped.push(ELLIPSIS);
    shaped
}

/// Word-wraps `text` into lines of at most `width` cells. With a line limit,
/// output is capped at `max_lines` and the last kept line gains a trailing
/// ellipsis when content was dropped.
pub fn shape_multi_line(text: &str, width: u16, max_lines: Option<usize>) -> Vec<String> {
    if width == 0 || matches!(max_lines, Some(0)) {
        return Vec::new();
    }
    let mut lines = wrap(text, width as usize);
    if let Some(limit) = max_lines {
        if lines.len() > limit {
            lines.truncate(limit);
            if let Some(last) = lines.pop() {
                lines.push(append_ellipsis(&last, width as usize));
            }
        }
    }
    lines
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                hard_break(word, width, &mut lines, &mut current, &mut current_width);
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                hard_break(word, width, &mut lines, &mut current, &mut current_width);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// Splits a word wider than the line across as many lines as it takes.
fn hard_break(
    word: &str,
    width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for c in word.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if *current_width + char_width > width && !current.is_empty() {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(c);
        *current_width += char_width;
    }
}

fn append_ellipsis(line: &str, width: usize) -> String {
    if UnicodeWidthStr::width(line) < width {
        let mut out = line.to_string();
        out.push(ELLIPSIS);
        return out;
    }
    shape_one_line(line, width as u16)
}
