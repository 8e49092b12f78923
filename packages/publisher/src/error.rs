//! Typed errors for the publisher library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Note that a store answering
//! `Ok(None)` is a distinct signal from any of these errors: it means the
//! backend refused the write without raising one.

use thiserror::Error;

/// Errors raised while validating draft input.
///
/// Validation runs before the submission pipeline, so none of these ever
/// reach a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Caption is empty.
    #[error("caption must not be empty")]
    CaptionTooShort,

    /// Caption exceeds the field limit.
    #[error("caption must be at most {limit} characters, got {len}")]
    CaptionTooLong { len: usize, limit: usize },
}

/// Errors raised by media storage backends.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Upload transport or backend failure.
    #[error("upload failed: {0}")]
    Upload(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The backend refused the file (quota, type restrictions, ...).
    #[error("file rejected: {reason}")]
    Rejected { reason: String },
}

impl MediaError {
    /// Wrap a backend error as an upload failure.
    pub fn upload(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Upload(err.into())
    }
}

/// Errors raised by document store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend transport or server failure.
    #[error("store error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Field serialization failed before reaching the wire.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Wrap a backend error.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

/// Result type alias for media storage operations.
pub type MediaResult<T> = std::result::Result<T, MediaError>;

/// Result type alias for document store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
