use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_NAMESPACE, DEFAULT_SESSION_KEY, DEFAULT_STORAGE_DIR,
    DEFAULT_USERS_KEY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key, relative to the config dir
    pub dir: String,
    /// Prefix of collection keys: `<namespace>_<collection>`
    pub namespace: String,
    pub session_key: String,
    pub users_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            namespace: String::from(DEFAULT_NAMESPACE),
            session_key: String::from(DEFAULT_SESSION_KEY),
            users_key: String::from(DEFAULT_USERS_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        for (name, value) in [
            ("storage.namespace", &self.namespace),
            ("storage.session_key", &self.session_key),
            ("storage.users_key", &self.users_key),
        ] {
            if !is_valid_key(value) {
                return Err(ConfigError::storage(format!(
                    "{name} must be non-empty and use only [A-Za-z0-9_-], got '{value}'"
                )));
            }
        }

        if self.session_key == self.users_key {
            return Err(ConfigError::storage(
                "storage.session_key and storage.users_key must differ",
            ));
        }

        Ok(())
    }

    /// Storage key of a record collection
    pub fn collection_key(&self, collection: &str) -> String {
        format!("{}_{}", self.namespace, collection)
    }
}

fn is_valid_key(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
