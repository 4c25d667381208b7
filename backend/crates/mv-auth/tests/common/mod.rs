#![allow(dead_code)]

use mv_auth::AuthEmulator;
use mv_config::{LatencyConfig, StorageConfig};
use mv_core::{AuthEvent, Session};
use mv_db::{DbError, KvStore, MemoryKvStore, RecordStore, Result as DbResult};

use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::Value;

pub type EventLog = Arc<Mutex<Vec<(AuthEvent, Option<String>)>>>;

pub struct TestHarness {
    pub kv: Arc<dyn KvStore>,
    pub store: RecordStore,
    pub auth: AuthEmulator,
}

/// Auth emulator and record store sharing one store, with no latency
pub fn create_test_harness() -> TestHarness {
    create_test_harness_on(Arc::new(MemoryKvStore::new()))
}

pub fn create_test_harness_on(kv: Arc<dyn KvStore>) -> TestHarness {
    let storage = StorageConfig::default();
    let store = RecordStore::new(Arc::clone(&kv), storage.clone(), LatencyConfig::none());
    let auth = AuthEmulator::new(&store, &storage);
    TestHarness { kv, store, auth }
}

/// Listener recording each event with the session's email
pub fn event_recorder(log: &EventLog) -> impl Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |event, session| {
        log.lock()
            .unwrap()
            .push((event, session.map(|s| s.user.email.clone())));
    }
}

/// In-memory store whose writes and removes can be made to fail per key
#[derive(Default)]
pub struct FailingKvStore {
    inner: MemoryKvStore,
    failing_keys: Mutex<Vec<String>>,
}

impl FailingKvStore {
    pub fn fail_on(&self, key: &str) {
        self.failing_keys.lock().unwrap().push(key.to_string());
    }

    pub fn recover(&self) {
        self.failing_keys.lock().unwrap().clear();
    }

    fn check(&self, key: &str) -> DbResult<()> {
        if self.failing_keys.lock().unwrap().iter().any(|k| k == key) {
            let source = IoError::new(ErrorKind::PermissionDenied, "storage unavailable");
            return Err(DbError::io(PathBuf::from(key), source));
        }
        Ok(())
    }
}

impl KvStore for FailingKvStore {
    fn read(&self, key: &str) -> DbResult<Option<Value>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &Value) -> DbResult<()> {
        self.check(key)?;
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> DbResult<()> {
        self.check(key)?;
        self.inner.remove(key)
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> DbResult<Value>,
    ) -> DbResult<Value> {
        self.check(key)?;
        self.inner.update(key, apply)
    }
}
