#![allow(dead_code)]

use um_core::{Confirmer, NotificationKind, Notifier, Renderer, UserRecord};
use um_db::FileStorage;

use std::sync::Mutex;

use tempfile::TempDir;

#[derive(Default)]
pub struct Toasts(pub Mutex<Vec<String>>);

impl Notifier for Toasts {
    fn notify(&self, message: &str, _kind: NotificationKind) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

pub struct AlwaysYes;

impl Confirmer for AlwaysYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _users: &[UserRecord]) {}
}

pub fn create_test_storage() -> (TempDir, FileStorage) {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::open(temp_dir.path().join("data")).unwrap();
    (temp_dir, storage)
}
