//! cPanel client error types.

use thiserror::Error;

/// A specialized Result type for cPanel client operations.
pub type CpanelResult<T> = std::result::Result<T, CpanelError>;

/// Errors produced by the cPanel / WHM client.
///
/// The first two variants are raised locally before any request is sent.
/// The rest describe a call that was attempted and failed somewhere between
/// the socket and the API's own status field.
#[derive(Debug, Error)]
pub enum CpanelError {
    /// A mailbox address is not of the form `local@domain`.
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    /// Any other malformed input (empty field, unknown record type, bad ttl or line).
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Connection, timeout, DNS resolution or non-2xx HTTP status.
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The HTTP call succeeded but the body is not JSON.
    #[error("Invalid JSON response from cPanel API: {0}")]
    InvalidResponse(String),

    /// The API answered and reported a failure in its own status fields.
    #[error("cPanel API error: {0}")]
    Api(String),

    /// The HTTP client or an authorization header could not be built.
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl CpanelError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new remote API error.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a new setup error.
    pub fn setup(msg: impl Into<String>) -> Self {
        Self::Setup(msg.into())
    }

    /// Stable machine-readable tag for this error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "invalid_format",
            Self::Validation(_) => "validation",
            Self::RequestFailed(_) => "request_failed",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Api(_) => "api_error",
            Self::Setup(_) => "setup",
        }
    }

    /// Whether the error was raised locally, without any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_) | Self::Validation(_) | Self::Setup(_)
        )
    }
}
