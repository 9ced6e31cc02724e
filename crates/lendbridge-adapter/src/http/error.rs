/*
[INPUT]:  Error sources (client construction, HTTP transport, response classification)
[OUTPUT]: Construction errors and the per-call failure taxonomy
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing rendered failure shapes
*/

use reqwest::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

/// Label carried by every transport-level failure rendering.
pub const SERVER_ERROR_LABEL: &str = "Network/Server Error";

/// Errors raised while building a client. Per-call failures are
/// [`ApiFailure`] values, never this type.
#[derive(Error, Debug)]
pub enum LendingError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a single API call produced no usable data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Response did not declare a JSON content-type; the body was not parsed.
    #[error("Server Error ({status}): {status_text}")]
    NonJsonResponse { status: u16, status_text: String },

    /// JSON response with a non-2xx status. The payload is passed through
    /// untouched; its shape belongs to the backend.
    #[error("API error ({status})")]
    Api { status: u16, payload: Value },

    /// The request did not complete, or a JSON body failed to parse.
    #[error("{message}")]
    Network { message: String },
}

impl ApiFailure {
    pub fn non_json(status: StatusCode) -> Self {
        ApiFailure::NonJsonResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiFailure::Network {
            message: message.into(),
        }
    }

    /// HTTP status, when a response arrived at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiFailure::NonJsonResponse { status, .. } | ApiFailure::Api { status, .. } => {
                Some(*status)
            }
            ApiFailure::Network { .. } => None,
        }
    }

    /// The value shown on the output surface for this failure.
    pub fn render_value(&self) -> Value {
        match self {
            ApiFailure::Api { payload, .. } => payload.clone(),
            ApiFailure::NonJsonResponse { .. } | ApiFailure::Network { .. } => json!({
                "error": SERVER_ERROR_LABEL,
                "details": self.to_string(),
            }),
        }
    }
}

/// Result type alias for client construction
pub type Result<T> = std::result::Result<T, LendingError>;
