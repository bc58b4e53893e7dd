//! Stream error types.

use std::io;
use thiserror::Error;

/// Stream error type.
///
/// Out-of-range seeks and truncates on read-only handles are boolean
/// failures on [`StreamHandle`](crate::StreamHandle), not errors;
/// this enum covers the failures that can only happen at open or
/// lookup time.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Path has no buffer.
    #[error("not found: {0}")]
    NotFound(String),

    /// Unrecognized open mode string.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// No store registered for the URL's scheme.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// URL is missing the `scheme://path` shape.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl StreamError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create an InvalidMode error.
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode(mode.into())
    }

    /// Create an UnknownScheme error.
    pub fn unknown_scheme(scheme: impl Into<String>) -> Self {
        Self::UnknownScheme(scheme.into())
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl(url.into())
    }
}

/// Convert StreamError to std::io::Error for host compatibility.
impl From<StreamError> for io::Error {
    fn from(e: StreamError) -> Self {
        match e {
            StreamError::NotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            StreamError::InvalidMode(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            StreamError::UnknownScheme(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            StreamError::InvalidUrl(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
        }
    }
}

/// Stream result type.
pub type StreamResult<T> = Result<T, StreamError>;
