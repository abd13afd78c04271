use std::error::Error as StdError;

use thiserror::Error;

/// Voicespan's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Voicespan's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// A required bundle key was absent during decoding.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A bundle value was present but had the wrong shape (e.g. a number where
    /// a string was required).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn missing_field(key: impl Into<String>) -> Self {
        Self::MissingField(key.into())
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}
