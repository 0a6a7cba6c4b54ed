//! Response and request types for the dashboard REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate totals shown on the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_alerts: u64,
    pub total_blocked: u64,
    pub unique_ips: u64,
}

/// One time bucket of alert or block counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub bucket: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopIp {
    pub ip: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

/// Blocklist entry with the analyzer's scoring detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedIp {
    pub ip: String,
    pub reason: String,
    pub score: i64,
    pub alert_count: i64,
    pub severity_score: i64,
    pub unique_ports: i64,
    pub unique_protos: i64,
    pub unique_flows: i64,
    pub categories: String,
    pub details: String,
    /// Unix seconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub ip: String,
    pub description: String,
    /// Unix seconds.
    pub added_at: i64,
}

/// Body of `POST /api/whitelist/<ip>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistRequest {
    pub ip: String,
    pub description: String,
}

/// One stored alert for a single IP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: i64,
    pub ip: String,
    pub sid: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// One row of the activity feed. `kind` is one of `alert`, `block`,
/// `unblock`, `whitelist_add`, `whitelist_remove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Unix seconds.
    pub timestamp: i64,
    pub ip: String,
    pub details: String,
    /// Signature ID for alerts, score for blocks.
    pub extra: String,
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_decodes_backend_shape() {
        let json = r#"{"total_alerts": 1204, "total_blocked": 17, "unique_ips": 96}"#;
        let stats: Stats = serde_json::from_str(json).expect("deserialize");
        assert_eq!(stats.total_alerts, 1204);
        assert_eq!(stats.total_blocked, 17);
    }

    #[test]
    fn activity_entry_maps_type_field() {
        let json = r#"{"type":"whitelist_add","timestamp":1756360000,"ip":"10.0.0.5","details":"office gateway","extra":""}"#;
        let entry: ActivityEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry.kind, "whitelist_add");
        assert_eq!(entry.ip, "10.0.0.5");
    }

    #[test]
    fn blocked_ip_roundtrip() {
        let entry = BlockedIp {
            ip: "10.0.0.5".into(),
            reason: "Alert threshold exceeded: 12 alerts".into(),
            score: 91,
            alert_count: 12,
            severity_score: 34,
            unique_ports: 5,
            unique_protos: 2,
            unique_flows: 9,
            categories: "Attempted Recon".into(),
            details: "".into(),
            timestamp: 1_756_360_000,
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        let back: BlockedIp = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(entry, back);
    }
}
