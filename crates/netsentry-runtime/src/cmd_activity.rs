//! `netsentry activity` — search the activity feed.

use chrono::Utc;
use netsentry_api::ApiClient;
use netsentry_api::types::ActivityEntry;

use crate::cli::ActivityOpts;
use crate::timefmt::format_time_ago;

pub async fn cmd_activity(host: &str, opts: &ActivityOpts) -> anyhow::Result<()> {
    let client = ApiClient::new(host);
    let search = (!opts.search.is_empty()).then_some(opts.search.as_str());
    let kind = (!opts.kind.is_empty()).then_some(opts.kind.as_str());

    let entries = client.activity(search, kind, opts.limit).await?;
    if entries.is_empty() {
        println!("(no matching activity)");
        return Ok(());
    }
    let now = Utc::now();
    for entry in &entries {
        println!("{}", format_activity_line(entry, now));
    }
    Ok(())
}

fn format_activity_line(entry: &ActivityEntry, now: chrono::DateTime<Utc>) -> String {
    let mut line = format!(
        "{:<10} {:<16} {:<15} {}",
        format_time_ago(entry.timestamp, now),
        entry.kind,
        entry.ip,
        entry.details
    );
    if !entry.extra.is_empty() {
        line.push_str(&format!(" [{}]", entry.extra));
    }
    line
}
