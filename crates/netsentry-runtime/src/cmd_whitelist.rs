//! `netsentry whitelist` — whitelist listing and CRUD.

use netsentry_api::ApiClient;

use crate::cli::WhitelistAction;
use crate::timefmt::format_timestamp;

pub async fn cmd_whitelist(host: &str, action: WhitelistAction) -> anyhow::Result<()> {
    let client = ApiClient::new(host);
    match action {
        WhitelistAction::List => {
            let entries = client.whitelist().await?;
            if entries.is_empty() {
                println!("(whitelist is empty)");
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{:<15} added {:<20} {}",
                    entry.ip,
                    format_timestamp(entry.added_at),
                    entry.description
                );
            }
        }
        WhitelistAction::Add { ip, description } => {
            client.whitelist_add(&ip, description.as_deref()).await?;
            println!("{ip} added to whitelist");
        }
        WhitelistAction::Remove { ip } => {
            client.whitelist_remove(&ip).await?;
            println!("{ip} removed from whitelist");
        }
    }
    Ok(())
}
