use ratatui::style::Color;

use crate::runtime::{Element, SectionNode, SectionRowNode};

/// One selectable row in a section. The id doubles as the click target, so it
/// must be unique across the whole list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRow {
    pub id: String,
    pub title: String,
}

impl SectionRow {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Titled group of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub rows: Vec<SectionRow>,
}

impl Section {
    pub fn new(title: impl Into<String>, rows: Vec<SectionRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// Grouped navigation list in the style of a settings screen: sections with
/// headers, rows that act as buttons, and one optional selection highlight.
#[derive(Clone, Debug)]
pub struct SectionList {
    sections: Vec<Section>,
    selected: Option<(usize, usize)>,
    accent: Option<Color>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            selected: None,
            accent: None,
        }
    }

    /// Highlights the row at (section index, row index). Out-of-range indices
    /// simply highlight nothing.
    pub fn selected(mut self, section: usize, row: usize) -> Self {
        self.selected = Some((section, row));
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn into_element(self) -> Element {
        let selected = self.selected;
        let accent = self.accent;
        let children = self
            .sections
            .into_iter()
            .enumerate()
            .map(|(section_index, section)| {
                let rows = section
                    .rows
                    .into_iter()
                    .map(|row| SectionRowNode::new(row.id, row.title))
                    .collect();
                let mut node = SectionNode::new(rows).title(section.title);
                if let Some((sel_section, sel_row)) = selected {
                    if sel_section == section_index {
                        node = node.selected(sel_row);
                    }
                }
                if let Some(color) = accent {
                    node = node.accent(color);
                }
                Element::section(node)
            })
            .collect();
        Element::vstack(children)
    }
}
