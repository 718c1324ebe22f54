//! Error types exposed by the GitHub notifications layer.

use thiserror::Error;

/// Errors surfaced while configuring a session or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InboxError {
    /// The authentication token was missing or blank.
    #[error("personal access token is required")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// GitHub answered with a status the operation does not treat as success.
    #[error("{operation} returned unexpected status {status}")]
    UnexpectedStatus {
        /// Operation that was attempted.
        operation: String,
        /// Numeric HTTP status code.
        status: u16,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
