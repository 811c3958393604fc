use ratatui::style::Color;

use crate::hooks::Binding;
use crate::runtime::{Element, SliderNode};

/// Interaction state a slider can be in. Unlike editable fields there is no
/// focused variant; a slider only differentiates live from greyed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliderState {
    #[default]
    Enabled,
    Disabled,
}

/// A color per interaction state. Resolution is total: every state maps to
/// exactly one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateColors {
    pub enabled: Color,
    pub disabled: Color,
}

impl StateColors {
    pub const fn new(enabled: Color, disabled: Color) -> Self {
        Self { enabled, disabled }
    }

    pub fn resolve(&self, state: SliderState) -> Color {
        match state {
            SliderState::Enabled => self.enabled,
            SliderState::Disabled => self.disabled,
        }
    }
}

/// Visually distinct parts of a slider. Plain sliders draw a thumb with a
/// shadow; solid sliders draw a thumb with a stroke. Both palettes are always
/// present in the style so switching variants never needs a restyle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderPart {
    Progress,
    Track,
    ThumbFill,
    ThumbShadow,
    SolidThumbFill,
    SolidThumbStroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBehavior {
    /// Animate value changes. Carried as configuration; terminal frames are
    /// discrete, so the runtime snaps to the new value either way.
    pub animate: bool,
}

impl Default for SliderBehavior {
    fn default() -> Self {
        Self { animate: false }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderLayout {
    pub track: TrackLayout,
    pub thumb: ThumbLayout,
    pub solid_thumb: SolidThumbLayout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackLayout {
    pub height: u16,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self { height: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbLayout {
    pub width: u16,
    /// Zero disables the shadow entirely.
    pub shadow_width: u16,
}

impl Default for ThumbLayout {
    fn default() -> Self {
        Self {
            width: 3,
            shadow_width: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolidThumbLayout {
    pub width: u16,
    /// Zero disables the stroke entirely.
    pub stroke_width: u16,
}

impl Default for SolidThumbLayout {
    fn default() -> Self {
        Self {
            width: 3,
            stroke_width: 1,
        }
    }
}

/// Palette shared by both slider variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommonColors {
    pub progress: StateColors,
    pub track: StateColors,
}

impl Default for CommonColors {
    fn default() -> Self {
        Self {
            progress: StateColors::new(Color::Cyan, Color::DarkGray),
            track: StateColors::new(Color::Gray, Color::DarkGray),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbColors {
    pub fill: StateColors,
    pub shadow: StateColors,
}

impl Default for ThumbColors {
    fn default() -> Self {
        Self {
            fill: StateColors::new(Color::White, Color::Gray),
            shadow: StateColors::new(Color::DarkGray, Color::DarkGray),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolidThumbColors {
    pub fill: StateColors,
    pub stroke: StateColors,
}

impl Default for SolidThumbColors {
    fn default() -> Self {
        Self {
            fill: StateColors::new(Color::White, Color::Gray),
            stroke: StateColors::new(Color::Cyan, Color::DarkGray),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderColors {
    pub common: CommonColors,
    pub thumb: ThumbColors,
    pub solid_thumb: SolidThumbColors,
}

/// Full slider appearance model, grouped the same way for every component in
/// the kit: behavior, layout, colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderStyle {
    pub behavior: SliderBehavior,
    pub layout: SliderLayout,
    pub colors: SliderColors,
}

impl SliderStyle {
    /// Total color lookup over every part and state pair.
    pub fn color_for(&self, part: SliderPart, state: SliderState) -> Color {
        let colors = match part {
            SliderPart::Progress => &self.colors.common.progress,
            SliderPart::Track => &self.colors.common.track,
            SliderPart::ThumbFill => &self.colors.thumb.fill,
            SliderPart::ThumbShadow => &self.colors.thumb.shadow,
            SliderPart::SolidThumbFill => &self.colors.solid_thumb.fill,
            SliderPart::SolidThumbStroke => &self.colors.solid_thumb.stroke,
        };
        colors.resolve(state)
    }
}

/// Horizontal progress slider bound to a `0.0..=1.0` value. Colors are
/// resolved here against the current state so the render tree below carries
/// concrete colors only.
#[derive(Debug)]
pub struct Slider {
    value: Binding<f64>,
    state: SliderState,
    style: SliderStyle,
    label: Option<String>,
    solid_thumb: bool,
}

impl Slider {
    pub fn new(value: Binding<f64>) -> Self {
        Self {
            value,
            state: SliderState::Enabled,
            style: SliderStyle::default(),
            label: None,
            solid_thumb: false,
        }
    }

    pub fn state(mut self, state: SliderState) -> Self {
        self.state = state;
        self
    }

    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn solid_thumb(mut self, solid: bool) -> Self {
        self.solid_thumb = solid;
        self
    }

    pub fn into_element(self) -> Element {
        let state = self.state;
        let style = &self.style;
        let ratio = self.value.get().clamp(0.0, 1.0);

        let (thumb, thumb_width, thumb_shadow, thumb_stroke) = if self.solid_thumb {
            let stroke = (style.layout.solid_thumb.stroke_width > 0)
                .then(|| style.color_for(SliderPart::SolidThumbStroke, state));
            (
                style.color_for(SliderPart::SolidThumbFill, state),
                style.layout.solid_thumb.width,
                None,
                stroke,
            )
        } else {
            let shadow = (style.layout.thumb.shadow_width > 0)
                .then(|| style.color_for(SliderPart::ThumbShadow, state));
            (
                style.color_for(SliderPart::ThumbFill, state),
                style.layout.thumb.width,
                shadow,
                None,
            )
        };

        Element::slider(SliderNode {
            ratio,
            label: self.label,
            height: style.layout.track.height.max(1),
            progress: style.color_for(SliderPart::Progress, state),
            track: style.color_for(SliderPart::Track, state),
            thumb,
            thumb_width,
            thumb_shadow,
            thumb_stroke,
        })
    }
}
