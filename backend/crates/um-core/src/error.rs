use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("User id already exists: {id} {location}")]
    DuplicateId { id: String, location: ErrorLocation },

    #[error("Failed to read image {path}: {source} {location}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Login gateway error: {message} {location}")]
    LoginGateway {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn image_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::ImageRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login_gateway(message: impl Into<String>) -> Self {
        Self::LoginGateway {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
