use std::panic::Location;

use error_location::ErrorLocation;
use mv_db::DbError;
use thiserror::Error;

const DUPLICATE_EMAIL_MESSAGE: &str = "User already exists with this email";
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password. Please sign up first.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Duplicate email '{email}' {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials for '{email}' {location}")]
    InvalidCredentials {
        email: String,
        location: ErrorLocation,
    },

    #[error("Auth storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Stored auth data is malformed: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn duplicate_email(email: &str) -> Self {
        Self::DuplicateEmail {
            email: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials(email: &str) -> Self {
        Self::InvalidCredentials {
            email: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text shown to the user. Validation failures get a fixed message;
    /// anything else keeps its full description.
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateEmail { .. } => String::from(DUPLICATE_EMAIL_MESSAGE),
            Self::InvalidCredentials { .. } => String::from(INVALID_CREDENTIALS_MESSAGE),
            Self::Storage { .. } | Self::Json { .. } => self.to_string(),
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
