mod models;

use crate::UserRecord;

/// Record with a placeholder image, for tests that only care about text fields
pub(crate) fn user(id: &str, name: &str, role: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        contact: "555-0100".to_string(),
        image: crate::PLACEHOLDER_IMAGE_URI.to_string(),
    }
}
