//! Error types for the editor layer.

use ce_core::CoreError;
use ce_curve::CurveError;
use ce_link::LinkError;

/// Editor error type wrapping the lower crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
