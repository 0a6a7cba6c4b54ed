//! Connection lifecycle state machine.
//!
//! Pure, testable, no IO or async dependencies: the async run loop
//! feeds transport events in and acts on the returned decisions.
//! Invariants enforced here:
//!
//! - `connect` is idempotent: a second request while `Connecting` or
//!   `Connected` opens no second transport.
//! - An unexpected close arms exactly one reconnect.
//! - An explicit disconnect suppresses any armed reconnect and latches
//!   the machine shut; it is a no-op when already disconnected.

use netsentry_core::types::ConnectionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkState {
    state: ConnectionState,
    reconnect_armed: bool,
    stopping: bool,
}

impl LinkState {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            reconnect_armed: false,
            stopping: false,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// Whether a reconnect is currently scheduled.
    pub fn reconnect_armed(&self) -> bool {
        self.reconnect_armed
    }

    /// Request a connection. Returns `true` when a transport should be
    /// opened; `false` when one is already opening/open or the client
    /// has been stopped.
    pub fn connect(&mut self) -> bool {
        if self.stopping || self.state != ConnectionState::Disconnected {
            return false;
        }
        self.reconnect_armed = false;
        self.state = ConnectionState::Connecting;
        true
    }

    /// Transport opened successfully.
    pub fn opened(&mut self) {
        if self.state == ConnectionState::Connecting && !self.stopping {
            self.state = ConnectionState::Connected;
        }
    }

    /// Transport closed (peer close, network failure, or a failed
    /// connect attempt). Returns `true` when one reconnect should be
    /// scheduled; an explicit disconnect suppresses it.
    pub fn closed(&mut self) -> bool {
        self.state = ConnectionState::Disconnected;
        self.reconnect_armed = !self.stopping;
        self.reconnect_armed
    }

    /// Explicit disconnect. Cancels any armed reconnect and prevents
    /// future ones. Returns `true` when an open transport must still
    /// be closed; `false` makes this a no-op.
    pub fn disconnect(&mut self) -> bool {
        self.stopping = true;
        self.reconnect_armed = false;
        self.state != ConnectionState::Disconnected
    }

    /// The reconnect timer fired. Returns `true` when a connect
    /// attempt should follow; consumed, so the timer fires at most
    /// one attempt.
    pub fn retry_due(&mut self) -> bool {
        if self.reconnect_armed && !self.stopping {
            self.reconnect_armed = false;
            true
        } else {
            false
        }
    }
}

impl Default for LinkState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_disconnected() {
        let link = LinkState::new();
        assert_eq!(link.state(), ConnectionState::Disconnected);
        assert!(!link.is_connected());
        assert!(!link.reconnect_armed());
    }

    #[test]
    fn connect_transitions_to_connecting() {
        let mut link = LinkState::new();
        assert!(link.connect());
        assert_eq!(link.state(), ConnectionState::Connecting);
    }

    #[test]
    fn second_connect_is_a_noop_while_connecting() {
        let mut link = LinkState::new();
        assert!(link.connect());
        assert!(!link.connect(), "must not open a second transport");
        assert_eq!(link.state(), ConnectionState::Connecting);
    }

    #[test]
    fn second_connect_is_a_noop_while_connected() {
        let mut link = LinkState::new();
        link.connect();
        link.opened();
        assert!(link.is_connected());
        assert!(!link.connect());
        assert_eq!(link.state(), ConnectionState::Connected);
    }

    #[test]
    fn unexpected_close_arms_one_reconnect() {
        let mut link = LinkState::new();
        link.connect();
        link.opened();

        assert!(link.closed());
        assert_eq!(link.state(), ConnectionState::Disconnected);
        assert!(link.reconnect_armed());

        // The timer fires once; a second fire attempts nothing.
        assert!(link.retry_due());
        assert!(!link.retry_due());
    }

    #[test]
    fn connect_failure_arms_reconnect_like_a_close() {
        let mut link = LinkState::new();
        link.connect();
        // No opened(): the attempt failed while Connecting.
        assert!(link.closed());
        assert!(link.reconnect_armed());
    }

    #[test]
    fn disconnect_before_timer_suppresses_reconnect() {
        let mut link = LinkState::new();
        link.connect();
        link.opened();
        link.closed();
        assert!(link.reconnect_armed());

        link.disconnect();
        assert!(!link.reconnect_armed());
        assert!(!link.retry_due(), "no reconnect may fire after disconnect");
    }

    #[test]
    fn disconnect_while_connected_requests_close() {
        let mut link = LinkState::new();
        link.connect();
        link.opened();
        assert!(link.disconnect());
        // The close that follows must not re-arm.
        assert!(!link.closed());
        assert!(!link.retry_due());
    }

    #[test]
    fn disconnect_when_not_connected_is_a_noop() {
        let mut link = LinkState::new();
        assert!(!link.disconnect());
        assert_eq!(link.state(), ConnectionState::Disconnected);
        // And it latches: no connect afterwards.
        assert!(!link.connect());
    }

    #[test]
    fn retry_reconnect_cycle() {
        let mut link = LinkState::new();
        link.connect();
        link.opened();
        link.closed();

        assert!(link.retry_due());
        assert!(link.connect());
        link.opened();
        assert!(link.is_connected());
    }

    #[test]
    fn opened_after_disconnect_is_ignored() {
        let mut link = LinkState::new();
        link.connect();
        link.disconnect();
        link.opened();
        assert!(!link.is_connected());
    }
}
