use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Config error: {0}")]
    Config(#[from] hp_config::ConfigError),

    #[error("Auth error: {0}")]
    Auth(#[from] hp_auth::AuthError),

    #[error("Router error: {0}")]
    Router(#[from] hp_router::RouterError),

    #[error("Handoff error: {0}")]
    Handoff(#[from] hp_handoff::HandoffError),

    #[error("Invalid command: {message} {location}")]
    Command {
        message: String,
        location: ErrorLocation,
    },

    #[error("No doctor with id {id} in the directory {location}")]
    UnknownDoctor { id: u32, location: ErrorLocation },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortalError {
    /// Creates Command error at caller location.
    #[track_caller]
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
