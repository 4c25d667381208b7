pub mod file_kv_store;
pub mod kv_store;
pub mod memory_kv_store;

/// Keys become file names, so they are restricted to `[A-Za-z0-9_-]`.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
