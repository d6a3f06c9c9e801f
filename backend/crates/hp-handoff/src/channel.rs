use crate::{HandoffError, HandoffStorage, MemoryStorage, Result as HandoffErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Doctor picked in the directory for the booking form
pub const SELECTED_DOCTOR: &str = "selectedDoctor";

/// Doctor picked in the directory for the chat view
pub const CHAT_DOCTOR: &str = "chatDoctor";

/// One-shot slots for passing context from one view to the next.
///
/// Each channel holds at most one payload. `set` overwrites an unread
/// payload; `take_if_present` returns it and clears the slot, so a payload is
/// consumed exactly once. Payloads are stored as JSON text.
#[derive(Debug, Default)]
pub struct HandoffChannels<S: HandoffStorage = MemoryStorage> {
    storage: S,
}

impl HandoffChannels<MemoryStorage> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}

impl<S: HandoffStorage> HandoffChannels<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stash `payload` on `channel`, replacing anything unread.
    #[track_caller]
    pub fn set<T: Serialize>(&self, channel: &str, payload: &T) -> HandoffErrorResult<()> {
        Self::check_channel(channel)?;

        let json = serde_json::to_string(payload).map_err(|e| HandoffError::Serialization {
            channel: channel.to_string(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if self.storage.contains(channel) {
            debug!("Handoff '{channel}': overwriting unread payload");
        }
        self.storage.put(channel, json);
        Ok(())
    }

    /// Consume the payload on `channel`.
    ///
    /// `Ok(None)` when nothing is waiting. A payload that does not decode as
    /// `T` is still removed, and reported as `Corrupted`.
    #[track_caller]
    pub fn take_if_present<T: DeserializeOwned>(
        &self,
        channel: &str,
    ) -> HandoffErrorResult<Option<T>> {
        Self::check_channel(channel)?;

        let Some(json) = self.storage.take(channel) else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(payload) => {
                debug!("Handoff '{channel}': payload consumed");
                Ok(Some(payload))
            }
            Err(e) => {
                warn!("Handoff '{channel}': discarding undecodable payload: {e}");
                Err(HandoffError::Corrupted {
                    channel: channel.to_string(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Whether a payload is waiting, without consuming it.
    pub fn is_pending(&self, channel: &str) -> bool {
        self.storage.contains(channel)
    }

    /// Drop whatever is waiting on `channel`.
    pub fn clear(&self, channel: &str) {
        if self.storage.take(channel).is_some() {
            debug!("Handoff '{channel}': cleared unread payload");
        }
    }

    #[track_caller]
    fn check_channel(channel: &str) -> HandoffErrorResult<()> {
        if channel.trim().is_empty() {
            return Err(HandoffError::invalid_channel(channel));
        }
        Ok(())
    }
}
