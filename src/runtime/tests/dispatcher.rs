use tokio::sync::mpsc;

use crate::events::{EventBus, FrameworkEvent};
use crate::runtime::{AppMessage, Dispatcher};

#[test]
fn request_render_queues_a_message() {
    let (tx, mut rx) = mpsc::channel(2);
    let dispatcher = Dispatcher::new(tx, EventBus::new(4));

    dispatcher.request_render();

    assert!(matches!(rx.try_recv(), Ok(AppMessage::RequestRender)));
}

#[test]
fn request_render_never_blocks_on_a_full_channel() {
    let (tx, _rx) = mpsc::channel(1);
    let dispatcher = Dispatcher::new(tx, EventBus::new(4));

    dispatcher.request_render();
    dispatcher.request_render();
    dispatcher.request_render();
}

#[test]
fn events_exposes_the_shared_bus() {
    let (tx, _rx) = mpsc::channel(2);
    let bus = EventBus::new(4);
    let dispatcher = Dispatcher::new(tx, bus.clone());

    let mut subscription = dispatcher.events().subscribe();
    bus.publish(FrameworkEvent::Resize(80, 24));

    assert!(matches!(
        subscription.try_recv(),
        Ok(FrameworkEvent::Resize(80, 24))
    ));
}
