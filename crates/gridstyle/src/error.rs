//! Error types for the gridstyle crate.

use thiserror::Error;

/// Errors that can occur when encoding selectors or querying label runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The request cannot be encoded as given: a missing reference table,
    /// a structurally empty selection, a malformed override or axis.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A level index outside `[-levels, levels)`.
    #[error("level {level} is out of range for an axis with {levels} level(s)")]
    OutOfRange { level: isize, levels: usize },
}

impl GridError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        GridError::Configuration(message.into())
    }
}

/// Result type for gridstyle operations.
pub type Result<T> = std::result::Result<T, GridError>;
