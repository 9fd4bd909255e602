//! Built-in comparators.

pub mod array;
pub mod numeric;
pub mod object;
pub mod scalar;
pub mod type_check;

pub use array::ArrayComparator;
pub use numeric::{DoubleComparator, NumericComparator};
pub use object::ObjectComparator;
pub use scalar::ScalarComparator;
pub use type_check::TypeComparator;
