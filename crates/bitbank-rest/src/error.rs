//! Error types for REST API operations

use bitbank_auth::AuthError;
use bitbank_types::{BitbankApiError, PairParseError};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// URL, parameters or payload could not be built
    #[error("Invalid request: {0}")]
    RequestBuild(String),

    /// Transport failure (connect, send, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body is not JSON or does not match the expected shape
    #[error("Decode error (HTTP {status}): {message}")]
    Decode {
        /// HTTP status of the response
        status: u16,
        /// Parser message
        message: String,
    },

    /// Exchange reported a failure (`success: 0`)
    #[error("API error: {error}")]
    Api {
        /// Numeric code from the response
        code: u32,
        /// Classified error
        error: BitbankApiError,
    },

    /// Credentials could not be loaded
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Create an API error from the code in a failed envelope
    pub fn from_api_code(code: u32) -> Self {
        Self::Api {
            code,
            error: BitbankApiError::from_code(code),
        }
    }

    pub(crate) fn decode(status: u16, err: serde_json::Error) -> Self {
        Self::Decode {
            status,
            message: err.to_string(),
        }
    }

    /// Exchange error code, if the exchange reported one
    pub fn api_code(&self) -> Option<u32> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api { error, .. } if error.is_rate_limit())
    }

    /// Check if the request never produced a response
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<PairParseError> for RestError {
    fn from(err: PairParseError) -> Self {
        Self::RequestBuild(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
