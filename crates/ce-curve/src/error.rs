//! Error types for curve sampling.

use thiserror::Error;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while configuring curve sampling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Invalid sampling parameter.
    #[error("Invalid sampling parameter: {what}")]
    InvalidSampling { what: &'static str },
}
