//! Inbound frame decoding: one UTF-8 JSON text frame, one alert event.

use netsentry_core::types::AlertEvent;

/// Decode one inbound text frame.
///
/// A malformed frame is the caller's cue to drop and log; it never
/// affects connection state.
pub fn decode_frame(text: &str) -> Result<AlertEvent, serde_json::Error> {
    serde_json::from_str(text)
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use netsentry_core::types::AlertKind;

    #[test]
    fn decodes_block_frame() {
        let frame = r#"{"type":"block","ip":"10.0.0.5","reason":"Alert threshold exceeded: 3 alerts","timestamp":"2026-08-28T09:15:00Z","score":91,"alert_count":3}"#;
        let event = decode_frame(frame).expect("decode");
        assert_eq!(event.kind, AlertKind::Block);
        assert_eq!(event.ip, "10.0.0.5");
        assert_eq!(event.alert_count, Some(3));
    }

    #[test]
    fn decodes_unblock_frame() {
        let frame = r#"{"type":"unblock","ip":"10.0.0.5","reason":"Manually unblocked","timestamp":"2026-08-28T09:15:00Z"}"#;
        let event = decode_frame(frame).expect("decode");
        assert_eq!(event.kind, AlertKind::Unblock);
        assert_eq!(event.reason.as_deref(), Some("Manually unblocked"));
    }

    #[test]
    fn unknown_type_still_decodes() {
        let frame = r#"{"type":"heartbeat","ip":"10.0.0.5","timestamp":"2026-08-28T09:15:00Z"}"#;
        let event = decode_frame(frame).expect("decode");
        assert_eq!(event.kind, AlertKind::Other);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(decode_frame("this is not valid json {{{").is_err());
    }

    #[test]
    fn missing_required_fields_is_an_error() {
        assert!(decode_frame(r#"{"type":"block"}"#).is_err());
        assert!(decode_frame(r#"{"ip":"10.0.0.5"}"#).is_err());
    }
}
