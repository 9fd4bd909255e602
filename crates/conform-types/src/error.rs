use thiserror::Error;

/// Errors produced while building values from external documents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("class marker must be a non-empty string, got {0}")]
    InvalidClassMarker(String),

    #[error("number cannot be represented: {0}")]
    UnsupportedNumber(String),
}

/// Convenience alias for value-model results.
pub type TypeResult<T> = Result<T, TypeError>;
