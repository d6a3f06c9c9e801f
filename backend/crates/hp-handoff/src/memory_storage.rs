use crate::HandoffStorage;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-process storage; values live as long as the storage does
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HandoffStorage for MemoryStorage {
    fn put(&self, key: &str, value: String) {
        self.values().insert(key.to_string(), value);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.values().remove(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.values().contains_key(key)
    }
}
