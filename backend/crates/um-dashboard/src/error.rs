use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use um_core::CoreError;
use um_db::DbError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("No free user id after {attempts} attempts {location}")]
    IdSpaceExhausted {
        attempts: usize,
        location: ErrorLocation,
    },
}

impl DashboardError {
    #[track_caller]
    pub fn id_space_exhausted(attempts: usize) -> Self {
        Self::IdSpaceExhausted {
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DashboardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for DashboardError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
