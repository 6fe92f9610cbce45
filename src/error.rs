//! Error Handling
//!
//! One error taxonomy is shared by every backend and by the dispatch facade:
//! a backend surfaces whatever went wrong on its wire as a `ProviderError`,
//! and the facade propagates it unchanged so callers can still tell vendors'
//! failure modes apart.

use thiserror::Error;

/// Any failure surfaced by a backend provider or by configuration handling.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport error (connection, TLS, client construction)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The backend API returned an error response
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
        /// Raw error payload, if the backend kept it
        details: Option<serde_json::Value>,
    },

    /// Authentication or authorization failure
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The backend rejected the request for quota/rate reasons
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// Invalid or incomplete configuration (missing model, bad endpoint, ...)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A request parameter failed validation before reaching the wire
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The chosen backend does not implement the requested operation
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The requested entity (model, resource) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A response could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A streaming response failed mid-flight
    #[error("Stream error: {0}")]
    StreamError(String),
}

impl ProviderError {
    /// Construct an `ApiError` without a detail payload.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    ///
    /// The dispatch layer itself never retries; backends and callers use
    /// this to decide.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::RateLimitError(_) | Self::StreamError(_) => true,
            Self::ApiError { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }

    /// Whether the failure is a caller-side problem (bad request/config)
    /// rather than a backend fault.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_)
                | Self::InvalidParameter(_)
                | Self::UnsupportedOperation(_)
                | Self::NotFound(_)
        )
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
