use crate::storage::{KeyValueStorage, validate_key};
use crate::{DbError, Result as DbErrorResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// Directory-backed storage: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> DbErrorResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| DbError::dir_creation(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the value of `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> DbErrorResult<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DbError::file_read(path, e)),
        }
    }

    /// Atomic write: temp file, fsync, then rename over the old value, so a
    /// crash mid-write never leaves a truncated document behind.
    fn set(&self, key: &str, value: &str) -> DbErrorResult<()> {
        validate_key(key)?;
        let final_path = self.path_for(key);
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| DbError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| DbError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| DbError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DbError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote {} bytes to {}", value.len(), final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        validate_key(key)?;
        let path = self.path_for(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DbError::file_write(path, e)),
        }
    }
}
