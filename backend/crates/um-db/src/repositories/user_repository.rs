//! User repository - the in-memory user list mirrored to storage.
//!
//! The whole list lives under [`USERS_KEY`] as one JSON array. Mutators build
//! the next list, rewrite the entire document with it (last writer wins) and
//! only then replace the in-memory copy, so a failed write changes nothing.
//!
//! Missing or unparseable data is treated as "no users yet", never as a
//! failure; only storage I/O errors propagate.

use crate::Result as DbErrorResult;
use crate::storage::{KeyValueStorage, USERS_KEY};

use um_core::UserRecord;

use log::{debug, warn};

pub struct UserRepository<S> {
    storage: S,
    users: Vec<UserRecord>,
}

impl<S: KeyValueStorage> UserRepository<S> {
    /// Open the repository and load the persisted list.
    pub fn open(storage: S) -> DbErrorResult<Self> {
        let users = Self::load_from(&storage)?;
        Ok(Self { storage, users })
    }

    /// Read the persisted list without touching the in-memory copy.
    pub fn load(&self) -> DbErrorResult<Vec<UserRecord>> {
        Self::load_from(&self.storage)
    }

    /// Replace the in-memory list with the persisted one.
    pub fn reload(&mut self) -> DbErrorResult<()> {
        self.users = self.load()?;
        Ok(())
    }

    /// Serialize the whole list and overwrite the stored document.
    pub fn persist(&self) -> DbErrorResult<()> {
        Self::write(&self.storage, &self.users)
    }

    pub fn all(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn find_by_id(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Append to the end of the list and persist.
    pub fn push(&mut self, user: UserRecord) -> DbErrorResult<()> {
        let mut next = self.users.clone();
        next.push(user);
        self.commit(next)
    }

    /// Overwrite the record at `index`, keeping its position, and persist.
    ///
    /// Returns the previous record, or `None` when `index` is out of range
    /// (nothing is written then).
    pub fn replace_at(
        &mut self,
        index: usize,
        user: UserRecord,
    ) -> DbErrorResult<Option<UserRecord>> {
        let mut next = self.users.clone();
        let Some(slot) = next.get_mut(index) else {
            return Ok(None);
        };
        let previous = std::mem::replace(slot, user);
        self.commit(next)?;
        Ok(Some(previous))
    }

    /// Drop every record with this id and persist, even when none matched.
    ///
    /// Returns the number of records removed.
    pub fn remove_by_id(&mut self, id: &str) -> DbErrorResult<usize> {
        let mut next = self.users.clone();
        next.retain(|u| u.id != id);
        let removed = self.users.len() - next.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Write `next` to storage, then adopt it as the in-memory list.
    fn commit(&mut self, next: Vec<UserRecord>) -> DbErrorResult<()> {
        Self::write(&self.storage, &next)?;
        self.users = next;
        Ok(())
    }

    fn write(storage: &S, users: &[UserRecord]) -> DbErrorResult<()> {
        let json = serde_json::to_string(users)?;
        storage.set(USERS_KEY, &json)?;
        debug!("Persisted {} users", users.len());
        Ok(())
    }

    fn load_from(storage: &S) -> DbErrorResult<Vec<UserRecord>> {
        let Some(contents) = storage.get(USERS_KEY)? else {
            debug!("No stored users, starting empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<Vec<UserRecord>>>(&contents) {
            Ok(users) => Ok(users.unwrap_or_default()),
            Err(e) => {
                warn!("Stored users are unreadable, starting empty: {e}");
                Ok(Vec::new())
            }
        }
    }
}
