use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
const CREDITS_EXHAUSTED_MESSAGE: &str = "AI credits exhausted. Please add credits to continue.";
const EMPTY_RESPONSE_MESSAGE: &str = "No response from AI";

/// Failures of the `analyze-image` function against the AI gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("AI gateway rate limit hit {location}")]
    RateLimited { location: ErrorLocation },

    #[error("AI gateway credits exhausted {location}")]
    CreditsExhausted { location: ErrorLocation },

    #[error("AI gateway error: {status} {location}")]
    Upstream { status: u16, location: ErrorLocation },

    #[error("AI gateway returned no message content {location}")]
    EmptyResponse { location: ErrorLocation },

    #[error("{var} is not configured {location}")]
    MissingApiKey { var: String, location: ErrorLocation },

    #[error("Function '{name}' not found {location}")]
    UnknownFunction { name: String, location: ErrorLocation },

    #[error("Invalid request body: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn rate_limited() -> Self {
        Self::RateLimited {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credits_exhausted() -> Self {
        Self::CreditsExhausted {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream(status: u16) -> Self {
        Self::Upstream {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_response() -> Self {
        Self::EmptyResponse {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_api_key(var: &str) -> Self {
        Self::MissingApiKey {
            var: var.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_function(name: &str) -> Self {
        Self::UnknownFunction {
            name: name.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a non-success gateway status onto its error category
    #[track_caller]
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => Self::rate_limited(),
            402 => Self::credits_exhausted(),
            other => Self::upstream(other),
        }
    }

    /// HTTP status the `analyze-image` boundary answers with
    pub fn status(&self) -> u16 {
        match self {
            Self::RateLimited { .. } => 429,
            Self::CreditsExhausted { .. } => 402,
            Self::UnknownFunction { .. } => 404,
            _ => 500,
        }
    }

    /// Text shown to the user, without source locations
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited { .. } => String::from(RATE_LIMITED_MESSAGE),
            Self::CreditsExhausted { .. } => String::from(CREDITS_EXHAUSTED_MESSAGE),
            Self::Upstream { status, .. } => format!("AI gateway error: {status}"),
            Self::EmptyResponse { .. } => String::from(EMPTY_RESPONSE_MESSAGE),
            Self::MissingApiKey { var, .. } => format!("{var} is not configured"),
            Self::UnknownFunction { name, .. } => format!("Function '{name}' not found"),
            Self::InvalidRequest { message, .. } => format!("Invalid request body: {message}"),
            Self::Http { message, .. } | Self::Json { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
