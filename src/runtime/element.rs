use ratatui::layout::Alignment;
use ratatui::style::Color;

use super::component::ComponentElement;

#[derive(Clone, Debug)]
pub enum Element {
    Empty,
    Text(TextNode),
    Stack(StackNode),
    Button(ButtonNode),
    Slider(SliderNode),
    Field(FieldNode),
    Section(SectionNode),
    Fragment(Vec<Element>),
    Component(ComponentElement),
}

/// How a text node treats overflow. One-line text never wraps and always
/// truncates with a trailing ellipsis; multi-line text wraps and truncates
/// only past `max_lines` (unlimited when unset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleMode {
    OneLine,
    MultiLine {
        max_lines: Option<usize>,
        alignment: Alignment,
    },
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub content: String,
    pub color: Option<Color>,
    pub mode: TitleMode,
    pub bold: bool,
    pub dim: bool,
}

#[derive(Clone, Debug)]
pub struct StackNode {
    pub direction: StackDirection,
    pub children: Vec<Element>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackDirection {
    Row,
    Column,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(TextNode {
            content: content.into(),
            color: None,
            mode: TitleMode::OneLine,
            bold: false,
            dim: false,
        })
    }

    pub fn colored_text(content: impl Into<String>, color: Color) -> Self {
        Element::Text(TextNode {
            content: content.into(),
            color: Some(color),
            mode: TitleMode::OneLine,
            bold: false,
            dim: false,
        })
    }

    pub fn vstack(children: Vec<Element>) -> Self {
        Element::Stack(StackNode {
            direction: StackDirection::Column,
            children,
        })
    }

    pub fn hstack(children: Vec<Element>) -> Self {
        Element::Stack(StackNode {
            direction: StackDirection::Row,
            children,
        })
    }

    pub fn fragment(children: Vec<Element>) -> Self {
        Element::Fragment(children)
    }

    pub fn button(node: ButtonNode) -> Self {
        Element::Button(node)
    }

    pub fn slider(node: SliderNode) -> Self {
        Element::Slider(node)
    }

    pub fn field(node: FieldNode) -> Self {
        Element::Field(node)
    }

    pub fn section(node: SectionNode) -> Self {
        Element::Section(node)
    }
}

#[derive(Clone, Debug)]
pub struct ButtonNode {
    pub id: String,
    pub label: String,
    pub accent: Option<Color>,
    pub filled: bool,
}

impl ButtonNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accent: None,
            filled: false,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }
}

/// Slider leaf with all colors already resolved for the current interaction
/// state; the style lookup lives in the slider component, not here.
#[derive(Clone, Debug)]
pub struct SliderNode {
    pub ratio: f64,
    pub label: Option<String>,
    /// Rows the slider occupies; the bar itself is drawn on the middle one.
    pub height: u16,
    pub progress: Color,
    pub track: Color,
    pub thumb: Color,
    pub thumb_width: u16,
    pub thumb_shadow: Option<Color>,
    pub thumb_stroke: Option<Color>,
}

/// Editable-field leaf. The value arrives already masked when the owning
/// text field is secure; the edit core supplies the cursor during lowering.
#[derive(Clone, Debug)]
pub struct FieldNode {
    pub id: String,
    pub value: String,
    pub placeholder: Option<String>,
    pub height: u16,
    /// Columns between the leading/trailing icons and the editable text.
    pub content_spacing: u16,
    pub focused: bool,
    pub search_icon: bool,
    pub dim: bool,
    pub background: Color,
    pub border: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub icon_color: Color,
    pub trailing: FieldTrailing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldTrailing {
    None,
    Clear,
    Visibility { revealed: bool },
}

#[derive(Clone, Debug)]
pub struct SectionNode {
    pub title: Option<String>,
    pub rows: Vec<SectionRowNode>,
    pub selected: Option<usize>,
    pub accent: Option<Color>,
}

impl SectionNode {
    pub fn new(rows: Vec<SectionRowNode>) -> Self {
        Self {
            title: None,
            rows,
            selected: None,
            accent: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }
}

#[derive(Clone, Debug)]
pub struct SectionRowNode {
    pub id: String,
    pub title: String,
    pub color: Option<Color>,
}

impl SectionRowNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
