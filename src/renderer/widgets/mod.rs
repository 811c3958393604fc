use ratatui::Frame;
use ratatui::layout::Rect;

use crate::runtime::View;

mod button;
mod field;
mod section;
mod slider;
mod stack;
mod text;

pub use button::render_button;
pub use field::render_field;
pub use section::render_section;
pub use slider::render_slider;
pub use stack::render_stack;
pub use text::render_text;

pub(super) type RenderFn = fn(&mut Frame<'_>, Rect, &View);
