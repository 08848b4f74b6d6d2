mod create;

use crate::UserDashboard;

use um_core::{
    Confirmer, CoreError, Credentials, LoginGateway, LoginResponse, NotificationKind, Notifier,
    Renderer, Result as CoreErrorResult, UserRecord,
};
use um_db::{DbError, KeyValueStorage, MemoryStorage, Result as DbErrorResult};

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

pub(crate) type TestDashboard =
    UserDashboard<MemoryStorage, RecordingNotifier, ScriptedConfirmer, RecordingRenderer>;

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    toasts: Mutex<Vec<(String, NotificationKind)>>,
}

impl RecordingNotifier {
    pub(crate) fn toasts(&self) -> Vec<(String, NotificationKind)> {
        self.toasts.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Option<(String, NotificationKind)> {
        self.toasts.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.toasts.lock().unwrap().push((message.to_string(), kind));
    }
}

pub(crate) struct ScriptedConfirmer {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmer {
    pub(crate) fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    frames: Mutex<Vec<Vec<UserRecord>>>,
}

impl RecordingRenderer {
    pub(crate) fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    pub(crate) fn last_frame(&self) -> Option<Vec<UserRecord>> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, users: &[UserRecord]) {
        self.frames.lock().unwrap().push(users.to_vec());
    }
}

/// Gateway answering every call the same way.
pub(crate) enum StubGateway {
    Accept,
    Reject,
    Unreachable,
}

#[async_trait]
impl LoginGateway for StubGateway {
    async fn login(&self, _credentials: &Credentials) -> CoreErrorResult<LoginResponse> {
        match self {
            Self::Accept => Ok(LoginResponse { success: true }),
            Self::Reject => Ok(LoginResponse { success: false }),
            Self::Unreachable => Err(CoreError::login_gateway("connection refused")),
        }
    }
}

/// Memory storage whose writes can be switched off.
pub(crate) struct ReadOnlyStorage {
    inner: MemoryStorage,
    read_only: AtomicBool,
}

impl ReadOnlyStorage {
    pub(crate) fn wrapping(inner: MemoryStorage) -> Self {
        Self {
            inner,
            read_only: AtomicBool::new(true),
        }
    }

    pub(crate) fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> DbErrorResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> DbErrorResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(DbError::file_write(
                PathBuf::from(key),
                std::io::Error::other("read-only"),
            ));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        self.inner.remove(key)
    }
}

pub(crate) fn dashboard_with(storage: MemoryStorage, confirm: bool) -> TestDashboard {
    UserDashboard::open_with_seed(
        storage,
        RecordingNotifier::default(),
        ScriptedConfirmer::answering(confirm),
        RecordingRenderer::default(),
        7,
    )
    .unwrap()
}

pub(crate) fn dashboard() -> TestDashboard {
    dashboard_with(MemoryStorage::new(), true)
}

pub(crate) fn names(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}
