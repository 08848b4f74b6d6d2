use crate::{UserPatch, UserRecord};

/// Prefilled values for editing an existing user.
///
/// Carries the id being edited so the caller hands it back to `update`
/// explicitly instead of keeping it in shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub editing_id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub contact: String,
}

impl EditForm {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            editing_id: record.id.clone(),
            name: record.name.clone(),
            role: record.role.clone(),
            email: record.email.clone(),
            contact: record.contact.clone(),
        }
    }

    /// Patch containing only the fields whose value differs from the form.
    pub fn diff(&self, name: &str, role: &str, email: &str, contact: &str) -> UserPatch {
        let changed = |current: &str, edited: &str| {
            (current != edited).then(|| edited.to_string())
        };

        UserPatch {
            name: changed(&self.name, name),
            role: changed(&self.role, role),
            email: changed(&self.email, email),
            contact: changed(&self.contact, contact),
            image: None,
        }
    }
}
