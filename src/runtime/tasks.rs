use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use crate::events::{FrameworkEvent, is_ctrl_c, map_terminal_event};

use super::dispatcher::AppMessage;

/// The background tasks feeding the app loop: terminal input, the tick pulse
/// and the interrupt watcher. Launched together when the loop starts and
/// aborted together once it exits.
pub(crate) struct RuntimeTasks {
    input: JoinHandle<()>,
    ticker: JoinHandle<()>,
    interrupt: JoinHandle<()>,
}

impl RuntimeTasks {
    pub(crate) fn launch(tx: &mpsc::Sender<AppMessage>, tick_rate: Duration) -> Self {
        Self {
            input: read_terminal_input(tx.clone()),
            ticker: emit_ticks(tx.clone(), tick_rate),
            interrupt: watch_interrupt(tx.clone()),
        }
    }

    pub(crate) async fn shutdown(self) {
        for (label, handle) in [
            ("terminal_input", self.input),
            ("tick_pulse", self.ticker),
            ("interrupt_watcher", self.interrupt),
        ] {
            handle.abort();
            match handle.await {
                Ok(()) => trace!(task = label, "task finished"),
                Err(err) if err.is_cancelled() => trace!(task = label, "task aborted"),
                Err(err) => warn!(task = label, error = ?err, "task join failed"),
            }
        }
    }
}

// Ctrl+C arrives as a key event under raw mode, so the quit path lives here
// rather than in the signal watcher.
fn read_terminal_input(tx: mpsc::Sender<AppMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(Ok(raw)) = stream.next().await {
            let Some(event) = map_terminal_event(raw) else {
                continue;
            };
            let quit = is_ctrl_c(&event);
            if tx.send(AppMessage::ExternalEvent(event)).await.is_err() {
                return;
            }
            if quit {
                let _ = tx.send(AppMessage::Shutdown).await;
                return;
            }
        }
    })
}

fn emit_ticks(tx: mpsc::Sender<AppMessage>, rate: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut pulse = tokio::time::interval(rate);
        loop {
            pulse.tick().await;
            let tick = AppMessage::ExternalEvent(FrameworkEvent::Tick);
            if tx.send(tick).await.is_err() {
                return;
            }
        }
    })
}

fn watch_interrupt(tx: mpsc::Sender<AppMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            let _ = tx.send(AppMessage::Shutdown).await;
        }
    })
}
