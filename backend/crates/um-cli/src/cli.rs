use crate::commands::Commands;

use um_config::LogLevel;

use clap::Parser;

#[derive(Parser)]
#[command(name = "um")]
#[command(about = "User roster management CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Login server URL (overrides client.server_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print user lists as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level for diagnostics on stderr (overrides logging.level from config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Level from `--log-level`, or `configured` when the flag is absent.
    pub fn log_level_or(&self, configured: LogLevel) -> LogLevel {
        self.log_level
            .as_deref()
            .map_or(configured, LogLevel::parse_lenient)
    }
}
