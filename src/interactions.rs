use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::events::{FrameworkEvent, mouse_position};
use crossterm::event::{MouseButton, MouseEventKind};

#[derive(Clone, Copy, Debug, Default)]
pub struct Hitbox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl From<ratatui::layout::Rect> for Hitbox {
    fn from(area: ratatui::layout::Rect) -> Self {
        Self {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
        }
    }
}

impl Hitbox {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Frame-scoped registry of clickable regions. Widgets record their area while
/// drawing; regions not re-recorded on the next frame stop responding.
pub struct HitboxRegistry {
    regions: RwLock<HashMap<String, Hitbox>>,
}

impl HitboxRegistry {
    fn new() -> Self {
        Self {
            regions: RwLock::new(HashMap::new()),
        }
    }

    fn global() -> &'static Self {
        static REGISTRY: OnceLock<HitboxRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    pub fn reset() {
        let registry = Self::global();
        registry.regions.write().clear();
    }

    pub fn record(id: &str, hitbox: Hitbox) {
        let registry = Self::global();
        registry.regions.write().insert(id.to_string(), hitbox);
    }

    pub fn contains(id: &str, column: u16, row: u16) -> bool {
        let registry = Self::global();
        let regions = registry.regions.read();
        regions
            .get(id)
            .map(|hitbox| hitbox.contains(column, row))
            .unwrap_or(false)
    }
}

pub(crate) fn register_hitbox(id: &str, hitbox: Hitbox) {
    HitboxRegistry::record(id, hitbox);
}

pub(crate) fn reset_hitboxes() {
    HitboxRegistry::reset();
}

pub fn is_button_click(event: &FrameworkEvent, button_id: &str) -> bool {
    if let FrameworkEvent::Mouse(mouse) = event {
        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            if let Some((column, row)) = mouse_position(event) {
                return HitboxRegistry::contains(button_id, column, row);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests;
