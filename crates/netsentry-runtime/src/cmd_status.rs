//! `netsentry status` — aggregate statistics and top offenders.

use netsentry_api::ApiClient;
use netsentry_api::types::{Stats, TopIp};

pub async fn cmd_status(host: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(host);
    let stats = client.stats().await?;
    let top = client.top_ips(5).await?;
    print!("{}", format_status(&stats, &top));
    Ok(())
}

fn format_status(stats: &Stats, top: &[TopIp]) -> String {
    let mut out = String::new();
    out.push_str(&format!("alerts   {}\n", stats.total_alerts));
    out.push_str(&format!("blocked  {}\n", stats.total_blocked));
    out.push_str(&format!("sources  {}\n", stats.unique_ips));
    if !top.is_empty() {
        out.push_str("top offenders:\n");
        for entry in top {
            out.push_str(&format!("  {:<15} {}\n", entry.ip, entry.count));
        }
    }
    out
}
