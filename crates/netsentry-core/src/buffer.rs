//! Bounded, newest-first buffer of recent alert events.
//!
//! The stream client is the only writer; presentation layers read
//! snapshots. Capacity eviction is normal behavior, not an error.

use std::collections::VecDeque;

use crate::types::AlertEvent;

/// Default capacity of the live alert view.
pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity sequence of alert events, newest first.
///
/// `push` is O(1) at the head; overflow evicts the oldest (tail) entry
/// in O(1). Existing entries are never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertBuffer {
    events: VecDeque<AlertEvent>,
    capacity: usize,
}

impl AlertBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the head; evict the tail if the buffer is full.
    pub fn push(&mut self, event: AlertEvent) {
        self.events.push_front(event);
        if self.events.len() > self.capacity {
            self.events.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent event, if any.
    pub fn latest(&self) -> Option<&AlertEvent> {
        self.events.front()
    }

    /// Event at position `index`, newest first.
    pub fn get(&self, index: usize) -> Option<&AlertEvent> {
        self.events.get(index)
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &AlertEvent> {
        self.events.iter()
    }
}

impl Default for AlertBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ────────────────────────────────────────────────────────
