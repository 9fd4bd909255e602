//! Error types for the comparator crate.

use crate::failure::ComparisonFailure;

/// Errors that can occur while comparing two values.
///
/// [`CompareError::Failure`] is the ordinary "values differ" outcome and is
/// aggregated by collection comparators. Every other variant is fatal: it
/// signals a misconfigured registry or an input the comparator cannot walk,
/// and propagates immediately.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// The values are not equal.
    #[error(transparent)]
    Failure(Box<ComparisonFailure>),

    /// No registered comparator accepts the pair.
    #[error("no comparator accepts {expected} and {actual}")]
    NoComparator {
        expected: &'static str,
        actual: &'static str,
    },

    /// A comparator was invoked on a pair it does not accept.
    #[error("comparator '{comparator}' cannot compare {expected} and {actual}")]
    Unsupported {
        comparator: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The values are nested deeper than the configured limit.
    #[error("comparison nested deeper than {max_depth} levels at {path}")]
    DepthExceeded { max_depth: usize, path: String },

    /// Configuration is invalid or could not be read.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CompareError {
    /// Returns `true` for the non-fatal "values differ" outcome.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The comparison failure, if this is one.
    pub fn failure(&self) -> Option<&ComparisonFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Split a failure off from fatal errors.
    pub fn into_failure(self) -> Result<ComparisonFailure, Self> {
        match self {
            Self::Failure(failure) => Ok(*failure),
            fatal => Err(fatal),
        }
    }
}

impl From<ComparisonFailure> for CompareError {
    fn from(failure: ComparisonFailure) -> Self {
        Self::Failure(Box::new(failure))
    }
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
