//! Terminal event plumbing: the crossterm poller and the tick timer.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::action::Action;

/// Events the UI reacts to.
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Spawn the async task that polls crossterm and forwards events.
///
/// Cancelling the token drains crossterm's buffer before exiting so no
/// keystrokes leak into the shell after teardown.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(LOOP_SLEEP) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(POLL_TIMEOUT).unwrap_or(false)
                    {
                        processed += 1;
                        let kind = match event::read() {
                            Ok(event::Event::Key(key)) => Some(EventKind::Key(key)),
                            Ok(event::Event::Mouse(mouse)) => Some(EventKind::Mouse(mouse)),
                            Ok(event::Event::Resize(w, h)) => Some(EventKind::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(kind) = kind {
                            if tx.send(kind).is_err() {
                                debug!("event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Spawn the spinner tick timer.
pub fn spawn_ticker(
    tx: mpsc::UnboundedSender<Action>,
    period: Duration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // Skip the immediate first tick.
        interval.tick().await;
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => break,
                _ = interval.tick() => {
                    if tx.send(Action::Tick).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ticker_emits_and_stops_on_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let handle = spawn_ticker(tx, Duration::from_millis(10), token.clone());

        let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, Action::Tick);

        token.cancel();
        let _ = handle.await;
    }
}
