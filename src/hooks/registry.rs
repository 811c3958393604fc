use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::events::FrameworkEvent;
use crate::runtime::{ComponentId, Dispatcher};

pub(crate) type AnySlot = dyn Any + Send + Sync;

/// Closure scheduled by a component during render, executed by the app loop
/// right after the frame is drawn.
pub type Deferred = Box<dyn FnOnce(&Dispatcher) + Send>;

/// Per-render event handler. Handlers are collected fresh on every render
/// pass and invoked synchronously for each external event.
pub type EventHandler = Box<dyn Fn(&FrameworkEvent) + Send + Sync>;

/// Holds per-component binding slots across renders, keyed by the component's
/// position in the tree. Slots for components that disappeared are pruned
/// after each render pass.
#[derive(Default)]
pub struct HookRegistry {
    stores: Mutex<HashMap<ComponentId, Arc<Mutex<HookStore>>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            stores: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn store_for(&self, id: &ComponentId) -> Arc<Mutex<HookStore>> {
        let mut guard = self.stores.lock();
        guard
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(HookStore::default())))
            .clone()
    }

    pub fn prune(&self, live: &HashSet<ComponentId>) {
        let mut guard = self.stores.lock();
        guard.retain(|id, store| {
            if live.contains(id) {
                true
            } else {
                store.lock().drain();
                false
            }
        });
    }
}

#[derive(Default)]
pub(crate) struct HookStore {
    slots: Vec<HookSlot>,
}

impl HookStore {
    pub(crate) fn slot(&mut self, index: usize) -> &mut HookSlot {
        while self.slots.len() <= index {
            self.slots.push(HookSlot::Vacant);
        }
        &mut self.slots[index]
    }

    pub(crate) fn drain(&mut self) {
        self.slots.clear();
    }
}

#[derive(Default)]
pub(crate) enum HookSlot {
    #[default]
    Vacant,
    Binding(Box<AnySlot>),
}
