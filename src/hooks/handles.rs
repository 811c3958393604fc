use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::runtime::Dispatcher;

/// Externally owned, two-way observable state. A parent creates the binding
/// (usually through [`Scope::use_binding`]), hands clones to child components,
/// and every mutation queues a re-render.
///
/// [`Scope::use_binding`]: super::Scope::use_binding
#[derive(Clone)]
pub struct Binding<T: Send + 'static> {
    shared: Arc<Mutex<T>>,
    dispatcher: Dispatcher,
}

impl<T: Send + 'static> Binding<T> {
    pub(crate) fn new(shared: Arc<Mutex<T>>, dispatcher: Dispatcher) -> Self {
        Self { shared, dispatcher }
    }

    pub fn set(&self, next: T) {
        *self.shared.lock() = next;
        self.dispatcher.request_render();
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut *self.shared.lock());
        self.dispatcher.request_render();
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.shared.lock();
        f(&value)
    }
}

impl<T: Clone + Send + 'static> Binding<T> {
    pub fn get(&self) -> T {
        self.shared.lock().clone()
    }
}

impl<T: Send + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}
