//! User record - a single entry of the roster.

use crate::{NewUser, UserPatch};

use serde::{Deserialize, Serialize};

/// A stored user.
///
/// Serialized as a flat JSON object with exactly these six keys; the store
/// persists a JSON array of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique within the store. Generated ids are 6-digit numerals.
    pub id: String,
    pub name: String,
    /// Category label, used by the role filter
    pub role: String,
    pub email: String,
    pub contact: String,
    /// Data URI of an uploaded image, or the placeholder URI
    pub image: String,
}

impl UserRecord {
    /// Build a record from create input once the id and image are resolved.
    pub fn from_new(input: NewUser, id: String, image: String) -> Self {
        Self {
            id,
            name: input.name,
            role: input.role,
            email: input.email,
            contact: input.contact,
            image,
        }
    }

    /// Return a copy with the fields present in `patch` replaced.
    ///
    /// `image` is the already converted data URI for the patch image, if any.
    /// The id never changes.
    pub fn merged(&self, patch: &UserPatch, image: Option<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            role: patch.role.clone().unwrap_or_else(|| self.role.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            contact: patch.contact.clone().unwrap_or_else(|| self.contact.clone()),
            image: image.unwrap_or_else(|| self.image.clone()),
        }
    }
}
