use crate::kv::is_valid_key;
use crate::{DbError, KvStore, Result as DbErrorResult};

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use log::{debug, warn};
use serde_json::Value;

const FILE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Durable store keeping one `<key>.json` file per key in a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug)]
pub struct FileKvStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileKvStore {
    /// Open (creating if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> DbErrorResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| DbError::io(dir.clone(), e))?;
        debug!("Opened file store at {}", dir.display());

        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    #[track_caller]
    fn guard(&self) -> DbErrorResult<MutexGuard<'_, ()>> {
        self.lock.lock().map_err(|_| DbError::lock_poisoned())
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> DbErrorResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(DbError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    fn read_unlocked(&self, key: &str) -> DbErrorResult<Option<Value>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(|e| DbError::json(key, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DbError::io(path, e)),
        }
    }

    fn write_unlocked(&self, key: &str, value: &Value) -> DbErrorResult<()> {
        let path = self.path_for(key)?;
        let temp = self.dir.join(format!("{key}.{TEMP_EXTENSION}"));
        let contents = serde_json::to_string(value).map_err(|e| DbError::json(key, e))?;

        std::fs::write(&temp, contents).map_err(|e| DbError::io(temp.clone(), e))?;
        if let Err(e) = std::fs::rename(&temp, &path) {
            if let Err(cleanup) = std::fs::remove_file(&temp) {
                warn!("Failed to remove {}: {}", temp.display(), cleanup);
            }
            return Err(DbError::io(path, e));
        }
        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn read(&self, key: &str) -> DbErrorResult<Option<Value>> {
        let _guard = self.guard()?;
        self.read_unlocked(key)
    }

    fn write(&self, key: &str, value: &Value) -> DbErrorResult<()> {
        let _guard = self.guard()?;
        self.write_unlocked(key, value)
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        let _guard = self.guard()?;
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DbError::io(path, e)),
        }
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> DbErrorResult<Value>,
    ) -> DbErrorResult<Value> {
        let _guard = self.guard()?;
        let next = apply(self.read_unlocked(key)?)?;
        self.write_unlocked(key, &next)?;
        Ok(next)
    }
}
