//! Error types for DigitalOcean operations.
//!
//! Provider-reported errors carry the `id`/`message` envelope DigitalOcean
//! returns on failures; everything else maps onto a small taxonomy covering
//! config access, transport, decoding, and pagination.

use thiserror::Error;

/// Main error type for fulla operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Config file or directory could not be accessed
    #[error("Config I/O error: {0}")]
    Io(String),

    /// Config file contents are not valid JSON or lack a `token` key
    #[error("Malformed config: {0}")]
    MalformedConfig(String),

    /// No API token has been configured
    #[error("No API token configured: {0}")]
    MissingToken(String),

    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not valid JSON where JSON was expected
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Pagination links could not be interpreted
    #[error("Pagination error: {0}")]
    Pagination(String),

    /// No image matches the requested slug or id
    #[error("Unknown image: {0}")]
    UnknownImage(String),

    /// The provider returned its error envelope instead of a payload
    #[error("API error ({id}): {message}")]
    Api {
        /// Provider error identifier (e.g. `unauthorized`, `not_found`)
        id: String,
        /// Human-readable error message
        message: String,
    },

    /// Base URL or joined request URL is invalid
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for fulla operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::MalformedConfig(_) => "MALFORMED_CONFIG",
            Self::MissingToken(_) => "MISSING_TOKEN",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Pagination(_) => "PAGINATION_ERROR",
            Self::UnknownImage(_) => "UNKNOWN_IMAGE",
            Self::Api { .. } => "API_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
