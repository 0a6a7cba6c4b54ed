//! Timestamp rendering helpers for tables and the activity feed.

use chrono::{DateTime, LocalResult, TimeZone, Utc};

/// Absolute timestamp, `MM/DD/YYYY HH:MM:SS` in UTC. Zero means the
/// backend had no value.
pub fn format_timestamp(unix_secs: i64) -> String {
    if unix_secs == 0 {
        return "N/A".to_string();
    }
    match Utc.timestamp_opt(unix_secs, 0) {
        LocalResult::Single(dt) => dt.format("%m/%d/%Y %H:%M:%S").to_string(),
        _ => "Invalid Date".to_string(),
    }
}

/// Relative age: `just now`, `Nm ago`, `Nh ago`, else the clock time.
pub fn format_time_ago(unix_secs: i64, now: DateTime<Utc>) -> String {
    if unix_secs == 0 {
        return "N/A".to_string();
    }
    let dt = match Utc.timestamp_opt(unix_secs, 0) {
        LocalResult::Single(dt) => dt,
        _ => return "N/A".to_string(),
    };
    let diff = now.signed_duration_since(dt).num_seconds();
    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else {
        dt.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_756_360_000, 0).single().expect("valid")
    }

    #[test]
    fn zero_is_not_available() {
        assert_eq!(format_timestamp(0), "N/A");
        assert_eq!(format_time_ago(0, now()), "N/A");
    }

    #[test]
    fn recent_is_just_now() {
        assert_eq!(format_time_ago(now().timestamp() - 30, now()), "just now");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(format_time_ago(now().timestamp() - 300, now()), "5m ago");
        assert_eq!(format_time_ago(now().timestamp() - 7200, now()), "2h ago");
    }

    #[test]
    fn older_than_a_day_shows_clock_time() {
        let old = now().timestamp() - 2 * 86400;
        let rendered = format_time_ago(old, now());
        assert!(rendered.contains(':'), "expected clock time, got {rendered}");
    }

    #[test]
    fn absolute_format() {
        // 2026-08-28 06:26:40 UTC
        let rendered = format_timestamp(1_787_898_400);
        assert!(rendered.ends_with(":40"), "got {rendered}");
        assert_eq!(rendered.len(), "MM/DD/YYYY HH:MM:SS".len());
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_time_ago(now().timestamp() + 100, now()), "just now");
    }
}
