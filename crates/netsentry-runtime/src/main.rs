//! netsentry: terminal client for the network security dashboard.
//! Live alert stream plus pull-based queries against the REST API.

use clap::Parser;

mod cli;
mod cmd_activity;
mod cmd_blocked;
mod cmd_status;
mod cmd_watch;
mod cmd_whitelist;
mod sink;
mod timefmt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Watch => {
            let filter = std::env::var("NETSENTRY_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string());
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
                .init();

            cmd_watch::cmd_watch(&args.host).await?;
        }
        cli::Command::Status => {
            cmd_status::cmd_status(&args.host).await?;
        }
        cli::Command::Blocked => {
            cmd_blocked::cmd_blocked(&args.host).await?;
        }
        cli::Command::Unblock { ip } => {
            cmd_blocked::cmd_unblock(&args.host, &ip).await?;
        }
        cli::Command::Whitelist { action } => {
            cmd_whitelist::cmd_whitelist(&args.host, action).await?;
        }
        cli::Command::Activity(opts) => {
            cmd_activity::cmd_activity(&args.host, &opts).await?;
        }
    }

    Ok(())
}
