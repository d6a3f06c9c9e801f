use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("Invalid handoff channel name: '{channel}' {location}")]
    InvalidChannel {
        channel: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize payload for '{channel}': {source} {location}")]
    Serialization {
        channel: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Payload on '{channel}' is corrupted and was discarded: {source} {location}")]
    Corrupted {
        channel: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl HandoffError {
    /// Creates InvalidChannel error at caller location.
    #[track_caller]
    pub fn invalid_channel(channel: impl Into<String>) -> Self {
        Self::InvalidChannel {
            channel: channel.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HandoffError>;
