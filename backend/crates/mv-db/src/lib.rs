pub mod error;
pub mod kv;
pub mod record_store;

pub use error::{DbError, Result};
pub use kv::file_kv_store::FileKvStore;
pub use kv::kv_store::KvStore;
pub use kv::memory_kv_store::MemoryKvStore;
pub use record_store::collection::Collection;
pub use record_store::order::Order;
pub use record_store::query::Query;
pub use record_store::record_store::RecordStore;
pub use record_store::{DIAGNOSES, DOCTOR_NOTES, PROFILES};
