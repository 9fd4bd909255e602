use conform_types::Value;

use crate::context::CompareContext;
use crate::error::CompareResult;

/// A type-specific equality check.
///
/// Comparators are held by a [`Registry`](crate::Registry), which picks the
/// first one whose [`accepts`](Comparator::accepts) returns `true` for a
/// pair. `accepts` must be cheap and side-effect free: it inspects value
/// kinds only, never contents.
///
/// The trait is object-safe and `Send + Sync` so comparators can be stored
/// in a `Vec<Box<dyn Comparator>>` and a registry shared across threads.
pub trait Comparator: Send + Sync {
    /// Human-readable name of this comparator (e.g., "array", "scalar").
    fn name(&self) -> &str;

    /// Whether this comparator can compare the pair.
    fn accepts(&self, expected: &Value, actual: &Value) -> bool;

    /// Compare the pair.
    ///
    /// Returns `Ok(())` when the values are equal under the context's
    /// options, [`CompareError::Failure`](crate::CompareError::Failure) when
    /// they differ, and any other error when the comparison cannot proceed.
    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()>;
}
