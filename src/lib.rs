pub mod components;
pub mod edit;
pub mod events;
pub mod hooks;
mod interactions;
pub mod renderer;
pub mod runtime;

pub use components::{
    CancelButtonAction, ClearButtonAction, Section, SectionList, SectionRow, Slider, SliderPart,
    SliderState, SliderStyle, TextField, TextFieldHighlight, TextFieldKind, TextFieldStyle, Title,
};
pub use edit::{Action, EditState, ReturnButtonAction};
pub use events::{FrameworkEvent, is_ctrl_c, is_mouse_click, mouse_position};
pub use hooks::{Binding, Scope};
pub use interactions::is_button_click;
pub use runtime::{
    App, AppConfig, ButtonNode, ComponentElement, Dispatcher, Element, StackDirection, TitleMode,
    View, component,
};
