use ratatui::style::Color;

use super::element::{FieldTrailing, StackDirection, TitleMode};

/// Fully resolved render tree. Two equal views draw identical frames, which
/// lets the app loop skip redundant draws.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Empty,
    Text(TextView),
    Stack(StackView),
    Button(ButtonView),
    Slider(SliderView),
    Field(FieldView),
    Section(SectionView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    pub content: String,
    pub color: Option<Color>,
    pub mode: TitleMode,
    pub bold: bool,
    pub dim: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackView {
    pub direction: StackDirection,
    pub children: Vec<View>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub id: String,
    pub label: String,
    pub accent: Option<Color>,
    pub filled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    pub ratio: f64,
    pub label: Option<String>,
    pub height: u16,
    pub progress: Color,
    pub track: Color,
    pub thumb: Color,
    pub thumb_width: u16,
    pub thumb_shadow: Option<Color>,
    pub thumb_stroke: Option<Color>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldView {
    pub id: String,
    pub value: String,
    pub placeholder: Option<String>,
    pub height: u16,
    pub content_spacing: u16,
    pub focused: bool,
    pub cursor: usize,
    pub search_icon: bool,
    pub dim: bool,
    pub background: Color,
    pub border: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub icon_color: Color,
    pub trailing: FieldTrailing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    pub title: Option<String>,
    pub rows: Vec<SectionRowView>,
    pub selected: Option<usize>,
    pub accent: Option<Color>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionRowView {
    pub id: String,
    pub title: String,
    pub color: Option<Color>,
}
