//! `netsentry blocked` / `netsentry unblock` — blocklist management.

use chrono::Utc;
use netsentry_api::ApiClient;
use netsentry_api::types::BlockedIp;

use crate::timefmt::format_time_ago;

pub async fn cmd_blocked(host: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(host);
    let blocked = client.blocked().await?;
    if blocked.is_empty() {
        println!("(no blocked IPs)");
        return Ok(());
    }
    for entry in &blocked {
        println!("{}", format_blocked_line(entry, Utc::now()));
    }
    Ok(())
}

pub async fn cmd_unblock(host: &str, ip: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(host);
    client.unblock(ip).await?;
    println!("{ip} has been removed from blocklist");
    Ok(())
}

fn format_blocked_line(entry: &BlockedIp, now: chrono::DateTime<Utc>) -> String {
    format!(
        "{:<15} score {:<4} alerts {:<4} {:<10} {}",
        entry.ip,
        entry.score,
        entry.alert_count,
        format_time_ago(entry.timestamp, now),
        entry.reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blocked_line_format() {
        let now = Utc.timestamp_opt(1_756_360_000, 0).single().expect("valid");
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
            timestamp: now.timestamp() - 300,
        };
        let line = format_blocked_line(&entry, now);
        assert!(line.starts_with("10.0.0.5"));
        assert!(line.contains("score 91"));
        assert!(line.contains("5m ago"));
        assert!(line.ends_with("Alert threshold exceeded: 12 alerts"));
    }
}
