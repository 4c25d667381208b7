use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Storage IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON error for key '{key}': {source} {location}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Collection '{key}' is corrupt: {message} {location}")]
    CorruptCollection {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Record payload for '{key}' must be a JSON object, got {kind} {location}")]
    NotAnObject {
        key: String,
        kind: &'static str,
        location: ErrorLocation,
    },

    #[error("Storage lock poisoned {location}")]
    LockPoisoned { location: ErrorLocation },
}

impl DbError {
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn json(key: &str, source: serde_json::Error) -> Self {
        Self::Json {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_key(key: &str) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt_collection<S: Into<String>>(key: &str, message: S) -> Self {
        Self::CorruptCollection {
            key: key.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_an_object(key: &str, kind: &'static str) -> Self {
        Self::NotAnObject {
            key: key.to_string(),
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn lock_poisoned() -> Self {
        Self::LockPoisoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
