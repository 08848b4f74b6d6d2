//! Key-value persistence in the shape of browser local storage.
//!
//! Values are whole documents: `set` replaces whatever was stored under the
//! key, there is no partial update and no coordination between writers.

pub mod file_storage;
pub mod memory_storage;

use crate::{DbError, Result as DbErrorResult};

use std::sync::Arc;

/// Key holding the serialized user list
pub const USERS_KEY: &str = "users";
/// Key holding the logged-in flag
pub const SESSION_KEY: &str = "isLoggedIn";

pub trait KeyValueStorage {
    /// Stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> DbErrorResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> DbErrorResult<()>;

    /// Drop `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> DbErrorResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> DbErrorResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DbErrorResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> DbErrorResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DbErrorResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        (**self).remove(key)
    }
}

/// Keys double as file names, so only `[A-Za-z0-9_-]` is accepted.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> DbErrorResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(DbError::invalid_key(key))
    }
}
