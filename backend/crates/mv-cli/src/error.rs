use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] mv_config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] mv_db::DbError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] mv_services::GatewayError),

    #[error("Failed to read {path}: {source} {location}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn read_file(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.display().to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
