use crate::Result as DbErrorResult;
use crate::storage::{KeyValueStorage, SESSION_KEY};

/// Logged-in flag kept next to the user list.
///
/// Any stored value counts as logged in; logging out removes the key.
pub struct SessionRepository<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_logged_in(&self) -> DbErrorResult<bool> {
        Ok(self.storage.get(SESSION_KEY)?.is_some())
    }

    pub fn set_logged_in(&self) -> DbErrorResult<()> {
        self.storage.set(SESSION_KEY, "true")
    }

    pub fn clear(&self) -> DbErrorResult<()> {
        self.storage.remove(SESSION_KEY)
    }
}
