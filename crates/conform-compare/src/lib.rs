//! Structural equality comparators for Conform.
//!
//! A [`Registry`] dispatches each pair of values to the first
//! [`Comparator`] that accepts it. The [`ArrayComparator`] walks keyed
//! collections, recursing through the registry for every shared key, and
//! reports every missing key, extra key and nested mismatch in one
//! [`ComparisonFailure`] with aligned expected/actual renderings.
//!
//! # Quick Start
//!
//! ```rust
//! use conform_compare::{assert_equals, CompareConfig};
//! use conform_types::{KeyedArray, Value};
//!
//! let mut expected = KeyedArray::new();
//! expected.insert("a", 1);
//! let mut actual = expected.clone();
//! actual.insert("b", 2);
//!
//! let err = assert_equals(&expected.into(), &actual.into(), &CompareConfig::default())
//!     .unwrap_err();
//! let failure = err.failure().unwrap();
//! assert_eq!(failure.actual_as_string(), Some("Array\n(\n    [a] => 1\n    [b] => 2\n)"));
//! ```

pub mod comparator;
pub mod comparators;
pub mod config;
pub mod context;
pub mod error;
pub mod failure;
pub mod registry;
pub mod render;

// Re-exports for convenience.
pub use comparator::Comparator;
pub use comparators::{
    ArrayComparator, DoubleComparator, NumericComparator, ObjectComparator, ScalarComparator,
    TypeComparator,
};
pub use config::{CompareConfig, CompareOptions};
pub use context::CompareContext;
pub use error::{CompareError, CompareResult};
pub use failure::{ComparisonFailure, Discrepancy, DiscrepancyKind};
pub use registry::Registry;

use conform_types::Value;

/// Compare two values with the built-in comparators.
pub fn assert_equals(expected: &Value, actual: &Value, config: &CompareConfig) -> CompareResult<()> {
    Registry::default().assert_equals(expected, actual, config)
}
