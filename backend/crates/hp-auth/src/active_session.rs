use hp_core::Identity;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A completed login: the identity plus bookkeeping for log correlation
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub session_id: Uuid,
    pub identity: Arc<Identity>,
    pub started_at: DateTime<Utc>,
}

impl ActiveSession {
    pub fn new(identity: Identity) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            identity: Arc::new(identity),
            started_at: Utc::now(),
        }
    }
}
