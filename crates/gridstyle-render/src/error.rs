//! Error types for table rendering.
//!
//! Rendering itself never fails: missing values become blank cells. Errors
//! come from loading configuration (themes, column specs) and from turning
//! typed rows into records.

use thiserror::Error;

/// Error type for loading themes and table specs.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid colour or style definition in a theme.
    #[error("theme error: {0}")]
    Theme(String),

    /// Invalid column spec document.
    #[error("spec error: {0}")]
    Spec(String),

    /// A value could not be used as a record.
    #[error("record error: {0}")]
    Record(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failure.
    #[error("serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
