//! Terminal notification sink: one line per notification.

use netsentry_core::notify::{NotificationRequest, NotificationSink, Severity};

pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, request: NotificationRequest) {
        println!("{}", format_request(&request));
    }
}

fn badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "[i]",
        Severity::Success => "[+]",
        Severity::Warning => "[!]",
        Severity::Error => "[x]",
    }
}

pub fn format_request(request: &NotificationRequest) -> String {
    let mut line = format!(
        "{} {}: {}",
        badge(request.severity),
        request.title,
        request.message
    );
    if let Some(reason) = request.reason.as_deref() {
        line.push_str(&format!(" ({reason})"));
    }
    line
}
