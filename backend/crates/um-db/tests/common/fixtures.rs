use um_core::{PLACEHOLDER_IMAGE_URI, UserRecord};
use um_db::FileStorage;

use tempfile::TempDir;

/// File storage rooted in a fresh temp directory.
///
/// Keep the `TempDir` alive for as long as the storage is used.
pub fn create_test_storage() -> (TempDir, FileStorage) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::open(temp.path().join("data")).expect("Failed to open storage");
    (temp, storage)
}

/// Creates a test UserRecord with sensible defaults
pub fn create_test_user(id: &str, name: &str, role: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        contact: "555-0100".to_string(),
        image: PLACEHOLDER_IMAGE_URI.to_string(),
    }
}
