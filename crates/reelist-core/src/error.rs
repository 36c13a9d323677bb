//! Error types for reelist.

use thiserror::Error;

/// Result type alias using reelist's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for reelist operations.
///
/// Stale page resolutions are deliberately *not* represented here: a result
/// arriving for a superseded criteria epoch is an internal discard condition
/// handled (and logged) inside the controller, never surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport failure (connectivity loss, timeout, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP response from the collection endpoint
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Page number outside the valid range for the collection
    #[error("Invalid page: {0}")]
    InvalidPage(u32),

    /// Malformed filter/sort/locale criteria
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Deserialize(e.to_string())
    }
}
