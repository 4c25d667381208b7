use crate::kv::is_valid_key;
use crate::{DbError, KvStore, Result as DbErrorResult};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn entries(&self) -> DbErrorResult<MutexGuard<'_, HashMap<String, Value>>> {
        self.entries.lock().map_err(|_| DbError::lock_poisoned())
    }
}

impl KvStore for MemoryKvStore {
    fn read(&self, key: &str) -> DbErrorResult<Option<Value>> {
        check_key(key)?;
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &Value) -> DbErrorResult<()> {
        check_key(key)?;
        self.entries()?.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> DbErrorResult<()> {
        check_key(key)?;
        self.entries()?.remove(key);
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> DbErrorResult<Value>,
    ) -> DbErrorResult<Value> {
        check_key(key)?;
        let mut entries = self.entries()?;
        let next = apply(entries.get(key).cloned())?;
        entries.insert(key.to_string(), next.clone());
        Ok(next)
    }
}

#[track_caller]
fn check_key(key: &str) -> DbErrorResult<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(DbError::invalid_key(key))
    }
}
