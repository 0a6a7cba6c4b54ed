//! Async run loop around the link state machine.
//!
//! Connects to the dashboard's alert channel, retries every
//! [`RECONNECT_DELAY`] on loss (flat, indefinite), and publishes
//! connection state plus the alert buffer through watch channels.

use std::time::Duration;

use futures_util::StreamExt;
use netsentry_core::buffer::AlertBuffer;
use netsentry_core::notify::Notifier;
use netsentry_core::types::ConnectionState;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

use crate::decode;
use crate::link::LinkState;

/// Fixed delay between reconnect attempts.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(5000);

/// Alert channel endpoint on the dashboard host.
pub fn stream_url(host: &str) -> String {
    format!("ws://{host}/ws")
}

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("websocket transport: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),
}

// ─── Client ───────────────────────────────────────────────────────

/// Owns the single live connection to the alert channel.
///
/// Constructed, then consumed by [`AlertStreamClient::spawn`]; the
/// returned [`StreamHandle`] is the only way to observe or stop it,
/// so a second concurrent socket cannot exist.
pub struct AlertStreamClient {
    url: String,
    notifier: Notifier,
    link: LinkState,
    cancel: CancellationToken,
    state_tx: watch::Sender<ConnectionState>,
    alerts_tx: watch::Sender<AlertBuffer>,
}

impl AlertStreamClient {
    pub fn new(host: &str, notifier: Notifier) -> Self {
        Self::with_buffer(host, notifier, AlertBuffer::new())
    }

    pub fn with_buffer(host: &str, notifier: Notifier, buffer: AlertBuffer) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);
        let (alerts_tx, _) = watch::channel(buffer);
        Self {
            url: stream_url(host),
            notifier,
            link: LinkState::new(),
            cancel: CancellationToken::new(),
            state_tx,
            alerts_tx,
        }
    }

    /// Start the run loop. The handle's `stop` is the explicit
    /// disconnect: it cancels a pending reconnect atomically with
    /// closing the socket.
    pub fn spawn(self) -> StreamHandle {
        let cancel = self.cancel.clone();
        let state_rx = self.state_tx.subscribe();
        let alerts_rx = self.alerts_tx.subscribe();
        let task = tokio::spawn(self.run());
        StreamHandle {
            cancel,
            state_rx,
            alerts_rx,
            task,
        }
    }

    async fn run(mut self) {
        loop {
            if !self.link.connect() {
                break;
            }
            self.publish_state();

            let cancel = self.cancel.clone();
            tokio::select! {
                _ = cancel.cancelled() => {
                    // Dropping the connect/listen future closes the socket.
                    self.link.disconnect();
                }
                result = self.connect_and_listen() => {
                    match result {
                        Ok(()) => tracing::info!(url = %self.url, "alert stream closed by server"),
                        Err(e) => tracing::warn!(url = %self.url, "alert stream error: {e}"),
                    }
                }
            }

            let reconnect = self.link.closed();
            self.publish_state();
            if !reconnect {
                break;
            }

            tokio::select! {
                _ = self.cancel.cancelled() => {
                    self.link.disconnect();
                    break;
                }
                _ = tokio::time::sleep(RECONNECT_DELAY) => {
                    tracing::info!(url = %self.url, "reconnecting to alert stream");
                }
            }
            if !self.link.retry_due() {
                break;
            }
        }

        self.link.disconnect();
        self.publish_state();
    }

    /// Single connection attempt: open, then read frames until EOF or
    /// transport error.
    async fn connect_and_listen(&mut self) -> Result<(), StreamError> {
        let (ws_stream, _response) = tokio_tungstenite::connect_async(&self.url).await?;
        self.link.opened();
        self.publish_state();
        tracing::info!(url = %self.url, "connected to alert stream");

        let (_write, mut read) = ws_stream.split();
        loop {
            match read.next().await {
                Some(Ok(Message::Text(text))) => self.handle_frame(&text),
                // Pings and pongs keep the link alive; nothing to do.
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            }
        }
    }

    /// Buffer insertion happens-before notification dispatch for the
    /// same event. A malformed frame is dropped and logged, nothing
    /// else changes.
    fn handle_frame(&mut self, text: &str) {
        match decode::decode_frame(text) {
            Ok(event) => {
                self.alerts_tx.send_modify(|buffer| buffer.push(event.clone()));
                self.notifier.event(&event);
            }
            Err(e) => {
                tracing::warn!("dropping malformed alert frame: {e}");
            }
        }
    }

    fn publish_state(&self) {
        self.state_tx.send_replace(self.link.state());
    }
}

// ─── Handle ───────────────────────────────────────────────────────

/// Observer and stop handle for a spawned stream client.
pub struct StreamHandle {
    cancel: CancellationToken,
    state_rx: watch::Receiver<ConnectionState>,
    alerts_rx: watch::Receiver<AlertBuffer>,
    task: JoinHandle<()>,
}

impl StreamHandle {
    pub fn state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    /// Subscribe to connection state changes.
    pub fn state_receiver(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }

    /// Subscribe to alert buffer updates. A borrow of the receiver is
    /// a consistent snapshot: the run loop is the only writer.
    pub fn alerts_receiver(&self) -> watch::Receiver<AlertBuffer> {
        self.alerts_rx.clone()
    }

    /// Explicit disconnect: close the socket if open, cancel any
    /// pending reconnect, and wait for the run loop to finish. Safe to
    /// call while disconnected or mid-retry.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

// ─── Tests ────────────────────────────────────────────────────────
