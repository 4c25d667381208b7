use crate::record_store::{DIAGNOSES, DOCTOR_NOTES, PROFILES};
use crate::{Collection, KvStore};

use std::sync::Arc;

use mv_config::{LatencyConfig, StorageConfig};
use mv_core::{Diagnosis, DoctorNote, Profile};

/// Entry point to the named record collections living in one [`KvStore`].
#[derive(Clone)]
pub struct RecordStore {
    kv: Arc<dyn KvStore>,
    storage: StorageConfig,
    latency: LatencyConfig,
}

impl RecordStore {
    pub fn new(kv: Arc<dyn KvStore>, storage: StorageConfig, latency: LatencyConfig) -> Self {
        Self {
            kv,
            storage,
            latency,
        }
    }

    /// Typed handle on `name`, persisted under `<namespace>_<name>`.
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        Collection::new(
            Arc::clone(&self.kv),
            self.storage.collection_key(name),
            self.latency,
        )
    }

    pub fn diagnoses(&self) -> Collection<Diagnosis> {
        self.collection(DIAGNOSES)
    }

    pub fn doctor_notes(&self) -> Collection<DoctorNote> {
        self.collection(DOCTOR_NOTES)
    }

    pub fn profiles(&self) -> Collection<Profile> {
        self.collection(PROFILES)
    }

    pub fn kv(&self) -> Arc<dyn KvStore> {
        Arc::clone(&self.kv)
    }

    pub fn latency(&self) -> LatencyConfig {
        self.latency
    }
}
