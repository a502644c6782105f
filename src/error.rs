use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while configuring the lookup client
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when a required environment variable is missing or blank
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Error when an environment variable holds an unusable value
    #[error("Invalid value for {name}: {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Wrapper for reqwest errors raised while building the HTTP client
    #[error("HTTP client error: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Reasons a single air quality lookup can fail
#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection, timeout or body read failure. The request URL is stripped
    /// since its query string carries the API key.
    #[error("HTTP request error: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API request failed with status {status}")]
    Status {
        status: StatusCode,
        /// `data.message` from an AirVisual failure payload, e.g. "city_not_found"
        message: Option<String>,
        /// Raw response body
        body: String,
    },

    /// The API answered 2xx but the body is not valid JSON
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Network(e.without_url())
    }
}

impl LookupError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LookupError::Status { status, .. } => Some(*status),
            LookupError::Network(_) | LookupError::Parse(_) => None,
        }
    }

    /// Failure message reported by the API itself.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            LookupError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Best-effort description for logs: the remote payload when there is one,
    /// otherwise the error message.
    pub fn detail(&self) -> String {
        match self {
            LookupError::Status { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            _ => self.to_string(),
        }
    }
}
