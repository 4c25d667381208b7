use crate::Result as DbErrorResult;

use serde_json::Value;

/// Namespaced mapping from string keys to JSON values.
///
/// Every operation is synchronous and completes before returning, so a
/// caller that does not `.await` between `read` and `write` observes no
/// interleaving from other tasks. `update` makes that guarantee explicit by
/// holding the store's lock across the read-modify-write.
pub trait KvStore: Send + Sync {
    /// Missing keys read as `None`.
    fn read(&self, key: &str) -> DbErrorResult<Option<Value>>;

    fn write(&self, key: &str, value: &Value) -> DbErrorResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> DbErrorResult<()>;

    /// Atomically replace the value at `key` with `apply(current)` and
    /// return what was written. Nothing is written if `apply` fails.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> DbErrorResult<Value>,
    ) -> DbErrorResult<Value>;
}
