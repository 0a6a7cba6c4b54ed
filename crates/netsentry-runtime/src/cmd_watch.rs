//! `netsentry watch` — follow the live alert stream.

use std::sync::Arc;

use netsentry_core::notify::Notifier;
use netsentry_core::types::AlertEvent;
use netsentry_stream::AlertStreamClient;

use crate::sink::TerminalSink;

/// Entry point for `netsentry watch`. Runs until Ctrl-C, then stops
/// the stream client so no socket or reconnect timer outlives us.
pub async fn cmd_watch(host: &str) -> anyhow::Result<()> {
    let notifier = Notifier::new(Arc::new(TerminalSink));
    let handle = AlertStreamClient::new(host, notifier).spawn();

    let mut state = handle.state_receiver();
    let mut alerts = handle.alerts_receiver();

    println!("netsentry watch \u{2014} Ctrl-C to quit");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = *state.borrow_and_update();
                println!("\u{00b7} link {current}");
            }
            changed = alerts.changed() => {
                if changed.is_err() {
                    break;
                }
                let line = {
                    let buffer = alerts.borrow_and_update();
                    buffer.latest().map(format_event)
                };
                if let Some(line) = line {
                    println!("{line}");
                }
            }
        }
    }

    handle.stop().await;
    Ok(())
}

fn format_event(event: &AlertEvent) -> String {
    let detail = event
        .signature
        .as_deref()
        .or(event.reason.as_deref())
        .unwrap_or("");
    format!(
        "[{}] {:<8} {} {}",
        event.timestamp.format("%H:%M:%S"),
        event.kind.as_str(),
        event.ip,
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use netsentry_core::types::AlertKind;

    fn make_event(kind: AlertKind) -> AlertEvent {
        AlertEvent {
            kind,
            ip: "10.0.0.5".into(),
            reason: Some("Alert threshold exceeded: 3 alerts".into()),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 28, 9, 15, 0).single().expect("valid"),
            score: Some(91),
            alert_count: Some(3),
            signature: None,
            category: None,
        }
    }

    #[test]
    fn event_line_shows_time_kind_ip_detail() {
        let line = format_event(&make_event(AlertKind::Block));
        assert_eq!(
            line,
            "[09:15:00] block    10.0.0.5 Alert threshold exceeded: 3 alerts"
        );
    }

    #[test]
    fn signature_wins_over_reason() {
        let mut event = make_event(AlertKind::Alert);
        event.signature = Some("ET SCAN Nmap".into());
        let line = format_event(&event);
        assert!(line.ends_with("ET SCAN Nmap"));
    }
}
