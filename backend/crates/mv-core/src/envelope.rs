use std::fmt;

use serde::{Deserialize, Serialize};

/// Error half of an [`Envelope`]. Carries only a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeError {
    pub message: String,
}

impl EnvelopeError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EnvelopeError {}

/// `{data, error}` result shape returned by every store, auth, storage and
/// function call. Expected failures travel in `error`; nothing is raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<EnvelopeError>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Successful envelope whose payload may legitimately be absent.
    pub fn maybe(data: Option<T>) -> Self {
        Self { data, error: None }
    }

    pub fn err<S: Into<String>>(message: S) -> Self {
        Self {
            data: None,
            error: Some(EnvelopeError::new(message)),
        }
    }

    /// Wrap any error, keeping its display text as the message.
    pub fn from_error<E: fmt::Display + ?Sized>(error: &E) -> Self {
        Self::err(error.to_string())
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Envelope<U> {
        Envelope {
            data: self.data.map(f),
            error: self.error,
        }
    }

    /// Collapse into a `Result`, treating a missing payload on success as `None`.
    pub fn into_result(self) -> Result<Option<T>, EnvelopeError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

impl<T> From<Result<T, EnvelopeError>> for Envelope<T> {
    fn from(result: Result<T, EnvelopeError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self {
                data: None,
                error: Some(error),
            },
        }
    }
}
