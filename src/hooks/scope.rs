use std::sync::Arc;

use parking_lot::Mutex;

use crate::events::FrameworkEvent;
use crate::runtime::{ComponentId, Dispatcher};

use super::handles::Binding;
use super::registry::{Deferred, EventHandler, HookSlot, HookStore};

/// Render-pass context handed to every component function. Hook calls must
/// keep a stable order between renders of the same component.
pub struct Scope {
    component_id: ComponentId,
    store: Arc<Mutex<HookStore>>,
    dispatcher: Dispatcher,
    hook_cursor: usize,
    pending_deferred: Vec<Deferred>,
    pending_handlers: Vec<EventHandler>,
}

impl Scope {
    pub(crate) fn new(
        component_id: ComponentId,
        store: Arc<Mutex<HookStore>>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            component_id,
            store,
            dispatcher,
            hook_cursor: 0,
            pending_deferred: Vec::new(),
            pending_handlers: Vec::new(),
        }
    }

    /// Persistent state owned by this component, exposed as a two-way
    /// [`Binding`]. The initializer runs only on the first render.
    pub fn use_binding<T, F>(&mut self, init: F) -> Binding<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_index();
        let shared = {
            let mut store = self.store.lock();
            let slot = store.slot(index);
            match slot {
                HookSlot::Vacant => {
                    let state = Arc::new(Mutex::new(init()));
                    *slot = HookSlot::Binding(Box::new(state.clone()));
                    state
                }
                HookSlot::Binding(existing) => existing
                    .downcast_ref::<Arc<Mutex<T>>>()
                    .expect("use_binding hook order mismatch")
                    .clone(),
            }
        };
        Binding::new(shared, self.dispatcher.clone())
    }

    /// Schedules a closure to run after the current frame has been drawn.
    /// This is the only way for a component to adjust state derived from what
    /// it just rendered without mutating observed values mid-render.
    pub fn defer<F>(&mut self, task: F)
    where
        F: FnOnce(&Dispatcher) + Send + 'static,
    {
        self.pending_deferred.push(Box::new(task));
    }

    /// Registers an event handler for the lifetime of the upcoming frame.
    /// Handlers are re-registered on every render and run synchronously on
    /// the app loop, so they see a consistent hitbox snapshot.
    pub fn on_event<F>(&mut self, handler: F)
    where
        F: Fn(&FrameworkEvent) + Send + Sync + 'static,
    {
        self.pending_handlers.push(Box::new(handler));
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    pub(crate) fn take_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.pending_deferred)
    }

    pub(crate) fn take_handlers(&mut self) -> Vec<EventHandler> {
        std::mem::take(&mut self.pending_handlers)
    }

    fn next_index(&mut self) -> usize {
        let current = self.hook_cursor;
        self.hook_cursor += 1;
        current
    }
}
