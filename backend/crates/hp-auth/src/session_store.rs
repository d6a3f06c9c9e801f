use crate::{ActiveSession, Result as AuthErrorResult};

use hp_core::{Identity, LoginRequest};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};

/// Single authority on who is signed in.
///
/// Holds zero or one [`ActiveSession`]. Every mutation replaces the whole
/// `Option<Arc<ActiveSession>>` in one assignment, so a reader sees either the
/// previous session or the new one, never a partially built identity.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Arc<ActiveSession>>>,
}

impl SessionStore {
    /// Starts with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the submission and make it the current session.
    ///
    /// On a validation failure the store is left exactly as it was.
    /// Logging in while already signed in replaces the previous identity.
    pub fn login(&self, request: LoginRequest) -> AuthErrorResult<Arc<Identity>> {
        let identity = match Identity::try_from(request) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Login rejected: {e}");
                return Err(e.into());
            }
        };

        let session = Arc::new(ActiveSession::new(identity));
        let identity = session.identity.clone();

        let previous = self.write().replace(session.clone());
        if let Some(previous) = previous {
            debug!("Session {} replaced by new login", previous.session_id);
        }

        info!(
            "Session {} started: user={} role={}",
            session.session_id,
            identity.id(),
            identity.role()
        );

        Ok(identity)
    }

    /// Clear the session. Calling it with no session is a no-op.
    pub fn logout(&self) {
        match self.write().take() {
            Some(session) => info!("Session {} ended", session.session_id),
            None => debug!("Logout with no active session"),
        }
    }

    /// Snapshot of the signed-in identity.
    pub fn current(&self) -> Option<Arc<Identity>> {
        self.read().as_ref().map(|s| s.identity.clone())
    }

    /// Snapshot of the whole session record.
    pub fn session(&self) -> Option<Arc<ActiveSession>> {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<ActiveSession>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<ActiveSession>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}
