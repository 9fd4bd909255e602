//! Value model for Conform.
//!
//! This crate provides the composite value types that the comparator crate
//! walks. Every other Conform crate depends on `conform-types`.
//!
//! # Key Types
//!
//! - [`Value`] -- A scalar, keyed collection, or object
//! - [`Key`] -- Integer or string key of a keyed collection
//! - [`KeyedArray`] -- Ordered mapping from unique keys to values
//! - [`ObjectValue`] -- Class-tagged property collection
//! - [`canonical_cmp`] -- Total ordering used to canonicalize collections

pub mod array;
pub mod convert;
pub mod error;
pub mod key;
pub mod ordering;
pub mod value;

pub use array::KeyedArray;
pub use convert::CLASS_MARKER;
pub use error::{TypeError, TypeResult};
pub use key::Key;
pub use ordering::canonical_cmp;
pub use value::{ObjectValue, Value};
