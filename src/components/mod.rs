//! The component kit: reusable building blocks rendered through the runtime.
//! Each component is a plain builder that lowers itself into an [`Element`]
//! tree; none of them talk to the terminal directly.
//!
//! [`Element`]: crate::runtime::Element

mod section_list;
mod slider;
#[cfg(test)]
mod tests;
mod text_field;
mod title;

pub use section_list::{Section, SectionList, SectionRow};
pub use slider::{
    CommonColors, Slider, SliderBehavior, SliderColors, SliderLayout, SliderPart, SliderState,
    SliderStyle, SolidThumbColors, SolidThumbLayout, StateColors, ThumbColors, ThumbLayout,
    TrackLayout,
};
pub use text_field::{
    CancelButtonAction, ClearButtonAction, FieldColors, FieldFlags, TextField, TextFieldColors,
    TextFieldHighlight, TextFieldKind, TextFieldLayout, TextFieldMisc, TextFieldStyle,
};
pub use title::{ELLIPSIS, Title, shape_multi_line, shape_one_line};
