//! netsentry-core: domain types for the live alert stream.
//! Connection state, decoded alert events, the bounded alert buffer,
//! and the notification dispatch contract. No IO, no async.

pub mod buffer;
pub mod notify;
pub mod types;
