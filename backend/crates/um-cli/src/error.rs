use um_config::ConfigError;
use um_dashboard::DashboardError;
use um_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Db(#[from] DbError),

    #[error("{0}")]
    Dashboard(#[from] DashboardError),

    #[error("Not logged in. Run `um login` first. {location}")]
    NotLoggedIn { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
