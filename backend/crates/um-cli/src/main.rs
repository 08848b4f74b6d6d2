//! um - user roster CLI
//!
//! # Examples
//!
//! ```bash
//! # Open a session against the running um-server
//! um login --username admin --password admin123
//!
//! # Add a user with an avatar
//! um user add --name Anna --role user --email anna@example.com --contact 555-0100 --image anna.png
//!
//! # Filter by name and role
//! um user search an --role user
//! ```

use um_cli::app;
use um_cli::cli::Cli;
use um_config::logger::{self, LogTarget};
use um_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        cli.log_level_or(config.logging.level),
        log_file,
        config.logging.colored,
        LogTarget::Stderr,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match app::run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
