//! Typed errors for the Appwrite client.

use thiserror::Error;

/// Errors returned by [`AppwriteClient`](crate::AppwriteClient) calls.
#[derive(Debug, Error)]
pub enum AppwriteError {
    /// Transport-level failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `kind` is Appwrite's machine-readable error type when the body could
    /// be parsed (e.g. `document_not_found`), otherwise empty.
    #[error("Appwrite API error ({status}): {message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    /// The configured endpoint is not a valid base URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A required environment variable is missing.
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Result type alias for Appwrite operations.
pub type Result<T> = std::result::Result<T, AppwriteError>;
