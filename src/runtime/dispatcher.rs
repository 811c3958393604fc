use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::trace;

use crate::events::{EventBus, FrameworkEvent};

/// Messages driving the app loop.
#[derive(Clone, Debug)]
pub enum AppMessage {
    /// Re-run the component tree and draw when the resolved view changed.
    RequestRender,
    /// A terminal event or tick, routed to the edit core and frame handlers.
    ExternalEvent(FrameworkEvent),
    Shutdown,
}

/// Handle cloned into every binding and scope. Mutating state anywhere in the
/// tree queues a render through this without ever blocking the caller.
#[derive(Clone)]
pub struct Dispatcher {
    render_queue: mpsc::Sender<AppMessage>,
    bus: EventBus,
}

impl Dispatcher {
    pub(crate) fn new(render_queue: mpsc::Sender<AppMessage>, bus: EventBus) -> Self {
        Self { render_queue, bus }
    }

    /// A full queue means a render is already pending, so dropping the
    /// request loses nothing.
    pub fn request_render(&self) {
        match self.render_queue.try_send(AppMessage::RequestRender) {
            Ok(()) => trace!("render queued"),
            Err(TrySendError::Full(_)) => trace!("render already pending"),
            Err(TrySendError::Closed(_)) => trace!("runtime gone, render request dropped"),
        }
    }

    pub fn events(&self) -> EventBus {
        self.bus.clone()
    }
}
