use crate::Result as DbErrorResult;
use crate::storage::{KeyValueStorage, validate_key};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local storage, used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written value
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> DbErrorResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DbErrorResult<()> {
        validate_key(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        validate_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}
