pub mod error;
pub mod repositories;
pub mod storage;


pub use error::{DbError, Result};
pub use repositories::session_repository::SessionRepository;
pub use repositories::user_repository::UserRepository;
pub use storage::file_storage::FileStorage;
pub use storage::memory_storage::MemoryStorage;
pub use storage::{KeyValueStorage, SESSION_KEY, USERS_KEY};
