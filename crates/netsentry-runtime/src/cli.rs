//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netsentry", about = "network security dashboard client")]
pub struct Cli {
    /// Dashboard host (host:port)
    #[arg(
        long,
        global = true,
        env = "NETSENTRY_HOST",
        default_value = "127.0.0.1:8080"
    )]
    pub host: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Follow the live alert stream
    Watch,
    /// Show aggregate statistics and top offenders
    Status,
    /// List currently blocked IPs
    Blocked,
    /// Remove an IP from the blocklist
    Unblock { ip: String },
    /// Manage the whitelist
    Whitelist {
        #[command(subcommand)]
        action: WhitelistAction,
    },
    /// Search the activity feed
    Activity(ActivityOpts),
}

#[derive(Subcommand)]
pub enum WhitelistAction {
    /// List whitelisted IPs
    List,
    /// Add an IP to the whitelist
    Add {
        ip: String,
        /// Free-text note stored with the entry
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove an IP from the whitelist
    Remove { ip: String },
}

#[derive(clap::Args)]
pub struct ActivityOpts {
    /// Free-text filter (IP or detail substring)
    #[arg(long, default_value = "")]
    pub search: String,

    /// Entry kind: alert, block, unblock, whitelist_add, whitelist_remove
    #[arg(long, default_value = "")]
    pub kind: String,

    /// Maximum number of entries
    #[arg(long, default_value = "100")]
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_with_host() {
        let cli = Cli::try_parse_from(["netsentry", "--host", "10.1.1.1:9000", "watch"])
            .expect("parse");
        assert_eq!(cli.host, "10.1.1.1:9000");
        assert!(matches!(cli.command, Command::Watch));
    }

    #[test]
    fn host_defaults_to_localhost() {
        let cli = Cli::try_parse_from(["netsentry", "status"]).expect("parse");
        assert_eq!(cli.host, "127.0.0.1:8080");
    }

    #[test]
    fn parses_whitelist_add_with_description() {
        let cli = Cli::try_parse_from([
            "netsentry",
            "whitelist",
            "add",
            "10.0.0.5",
            "--description",
            "office gateway",
        ])
        .expect("parse");
        match cli.command {
            Command::Whitelist {
                action: WhitelistAction::Add { ip, description },
            } => {
                assert_eq!(ip, "10.0.0.5");
                assert_eq!(description.as_deref(), Some("office gateway"));
            }
            _ => panic!("expected whitelist add"),
        }
    }

    #[test]
    fn activity_defaults() {
        let cli = Cli::try_parse_from(["netsentry", "activity"]).expect("parse");
        match cli.command {
            Command::Activity(opts) => {
                assert!(opts.search.is_empty());
                assert!(opts.kind.is_empty());
                assert_eq!(opts.limit, 100);
            }
            _ => panic!("expected activity"),
        }
    }
}
