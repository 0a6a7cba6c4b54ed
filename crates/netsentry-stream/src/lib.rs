//! netsentry-stream: reconnecting client for the live alert channel.
//! Owns at most one WebSocket to the dashboard backend, decodes inbound
//! frames into alert events, maintains the bounded alert buffer, and
//! routes notifiable events to the dispatcher.

pub mod client;
pub mod decode;
pub mod link;

pub use client::{AlertStreamClient, RECONNECT_DELAY, StreamError, StreamHandle, stream_url};
