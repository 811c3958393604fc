mod app;
mod component;
mod dispatcher;
mod element;
mod tasks;
#[cfg(test)]
mod tests;
mod view;

pub use app::{App, AppConfig};
pub use component::{ComponentElement, ComponentFn, ComponentId, component};
pub use dispatcher::{AppMessage, Dispatcher};
pub use element::{
    ButtonNode, Element, FieldNode, FieldTrailing, SectionNode, SectionRowNode, SliderNode,
    StackDirection, StackNode, TextNode, TitleMode,
};
pub use ratatui::layout::Alignment;
pub use ratatui::style::Color;
pub use view::{
    ButtonView, FieldView, SectionRowView, SectionView, SliderView, StackView, TextView, View,
};
