use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Invalid route '{path}': {message} {location}")]
    InvalidRoute {
        path: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate route '{path}' {location}")]
    DuplicateRoute {
        path: String,
        location: ErrorLocation,
    },

    #[error("Unknown view '{view}' for route '{path}' {location}")]
    UnknownView {
        path: String,
        view: String,
        location: ErrorLocation,
    },

    #[error("No home view for role '{value}' {location}")]
    UnknownRole {
        value: String,
        location: ErrorLocation,
    },
}

impl RouterError {
    /// Creates InvalidRoute error at caller location.
    #[track_caller]
    pub fn invalid_route(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRoute {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
