//! Notification dispatch: translate domain events into
//! presentation-agnostic notification requests.
//!
//! Pure mapping with no IO and no persisted state; the sink that
//! renders a request is injected, never a process-wide singleton.

use std::sync::Arc;
use std::time::Duration;

use crate::types::{AlertEvent, AlertKind};

// ─── Kind & Severity ──────────────────────────────────────────────

/// Category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Block,
    Unblock,
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Default display timeout for this kind.
    pub fn default_timeout(self) -> Duration {
        match self {
            Self::Block => Duration::from_millis(8000),
            Self::Unblock => Duration::from_millis(4000),
            Self::Success => Duration::from_millis(3000),
            Self::Error => Duration::from_millis(5000),
            Self::Info => Duration::from_millis(4000),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Block => Severity::Warning,
            Self::Unblock | Self::Info => Severity::Info,
            Self::Success => Severity::Success,
            Self::Error => Severity::Error,
        }
    }
}

/// Ordered: `Info` < `Success` < `Warning` < `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

// ─── Notification Request ─────────────────────────────────────────

/// Transient value handed to a presentation sink and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timeout: Duration,
    /// Context fields for kind-specific rendering.
    pub ip: Option<String>,
    pub score: Option<u32>,
    pub reason: Option<String>,
}

impl NotificationRequest {
    /// An IP was automatically blocked. When the analyzer supplied no
    /// reason, falls back to the alert count that triggered the block.
    pub fn blocked(
        ip: &str,
        score: Option<u32>,
        reason: Option<&str>,
        alert_count: Option<u32>,
    ) -> Self {
        let reason = match reason.filter(|r| !r.is_empty()) {
            Some(r) => r.to_owned(),
            None => format!(
                "{} suspicious alerts detected",
                alert_count.unwrap_or_default()
            ),
        };
        Self {
            kind: NotificationKind::Block,
            severity: NotificationKind::Block.severity(),
            title: "IP Blocked".to_owned(),
            message: format!("{ip} has been automatically blocked"),
            timeout: NotificationKind::Block.default_timeout(),
            ip: Some(ip.to_owned()),
            score,
            reason: Some(reason),
        }
    }

    /// An IP was removed from the blocklist.
    pub fn unblocked(ip: &str) -> Self {
        Self {
            kind: NotificationKind::Unblock,
            severity: NotificationKind::Unblock.severity(),
            title: "IP Unblocked".to_owned(),
            message: format!("{ip} has been removed from blocklist"),
            timeout: NotificationKind::Unblock.default_timeout(),
            ip: Some(ip.to_owned()),
            score: None,
            reason: None,
        }
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::generic(NotificationKind::Success, title, message)
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::generic(NotificationKind::Error, title, message)
    }

    pub fn info(title: &str, message: &str) -> Self {
        Self::generic(NotificationKind::Info, title, message)
    }

    fn generic(kind: NotificationKind, title: &str, message: &str) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            title: title.to_owned(),
            message: message.to_owned(),
            timeout: kind.default_timeout(),
            ip: None,
            score: None,
            reason: None,
        }
    }
}

// ─── Sink & Notifier ──────────────────────────────────────────────

/// Presentation sink consuming notification requests.
///
/// Rendering, stacking, and dismissal are the sink's concern.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, request: NotificationRequest);
}

/// Dispatcher over an injected sink. Fire-and-forget: no retry,
/// no queueing, no deduplication.
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    pub fn dispatch(&self, request: NotificationRequest) {
        self.sink.notify(request);
    }

    /// Raise the notification for a stream event, if its kind is
    /// notifiable. Returns whether one was dispatched.
    pub fn event(&self, event: &AlertEvent) -> bool {
        let request = match event.kind {
            AlertKind::Block => NotificationRequest::blocked(
                &event.ip,
                event.score,
                event.reason.as_deref(),
                event.alert_count,
            ),
            AlertKind::Unblock => NotificationRequest::unblocked(&event.ip),
            _ => return false,
        };
        self.dispatch(request);
        true
    }

    pub fn success(&self, title: &str, message: &str) {
        self.dispatch(NotificationRequest::success(title, message));
    }

    pub fn error(&self, title: &str, message: &str) {
        self.dispatch(NotificationRequest::error(title, message));
    }

    pub fn info(&self, title: &str, message: &str) {
        self.dispatch(NotificationRequest::info(title, message));
    }
}

// ─── Tests ────────────────────────────────────────────────────────
