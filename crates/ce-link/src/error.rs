//! Error types for link encoding.

use thiserror::Error;

/// Result type for link operations.
pub type LinkResult<T> = Result<T, LinkError>;

/// Errors that can occur while building a shareable link.
///
/// Decoding has no error cases; see [`crate::decode`].
#[derive(Debug, Error)]
pub enum LinkError {
    /// The base location could not be parsed as an absolute URL.
    #[error("Invalid base location '{base}': {source}")]
    InvalidBase {
        base: String,
        source: url::ParseError,
    },

    /// The base location cannot carry a query (e.g. `mailto:`).
    #[error("Base location cannot carry query fields: {base}")]
    CannotBeABase { base: String },

    /// A value to encode was not a finite number.
    #[error(transparent)]
    Value(#[from] ce_core::CoreError),
}
