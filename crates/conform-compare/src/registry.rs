use conform_types::Value;
use tracing::debug;

use crate::comparator::Comparator;
use crate::comparators::{
    ArrayComparator, DoubleComparator, NumericComparator, ObjectComparator, ScalarComparator,
    TypeComparator,
};
use crate::config::CompareConfig;
use crate::context::CompareContext;
use crate::error::{CompareError, CompareResult};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The set of comparators a comparison dispatches over.
///
/// Resolution is first-match: comparators added with [`Self::register`] are
/// consulted newest first, then the built-in comparators in their fixed
/// most-specific-first order. The built-in [`TypeComparator`] accepts every
/// pair, so a registry built with [`Self::with_default_comparators`] always
/// resolves.
pub struct Registry {
    custom: Vec<Box<dyn Comparator>>,
    builtin: Vec<Box<dyn Comparator>>,
}

impl Registry {
    /// Create a registry with no comparators at all.
    ///
    /// Use [`Self::register`] to add comparators, or
    /// [`Self::with_default_comparators`] for the standard set.
    pub fn new() -> Self {
        Self {
            custom: Vec::new(),
            builtin: Vec::new(),
        }
    }

    /// Create a registry with the built-in comparators:
    /// Array -> Object -> Double -> Numeric -> Scalar -> Type
    pub fn with_default_comparators() -> Self {
        Self {
            custom: Vec::new(),
            builtin: vec![
                Box::new(ArrayComparator),
                Box::new(ObjectComparator),
                Box::new(DoubleComparator),
                Box::new(NumericComparator),
                Box::new(ScalarComparator),
                Box::new(TypeComparator),
            ],
        }
    }

    /// Add a comparator that takes precedence over every comparator already
    /// in the registry.
    pub fn register(&mut self, comparator: Box<dyn Comparator>) {
        debug!(comparator = comparator.name(), "registered comparator");
        self.custom.push(comparator);
    }

    /// Number of comparators in the registry.
    pub fn comparator_count(&self) -> usize {
        self.custom.len() + self.builtin.len()
    }

    /// Comparator names in resolution order.
    pub fn comparator_names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Return the first comparator that accepts the pair.
    pub fn resolve(&self, expected: &Value, actual: &Value) -> CompareResult<&dyn Comparator> {
        match self.iter().find(|c| c.accepts(expected, actual)) {
            Some(comparator) => {
                debug!(
                    comparator = comparator.name(),
                    expected = expected.type_name(),
                    actual = actual.type_name(),
                    "resolved comparator"
                );
                Ok(comparator)
            }
            None => Err(CompareError::NoComparator {
                expected: expected.type_name(),
                actual: actual.type_name(),
            }),
        }
    }

    /// Compare two values under `config`.
    ///
    /// Returns `Ok(())` when they are equal and
    /// [`CompareError::Failure`] with the rendered diff when they are not.
    pub fn assert_equals(
        &self,
        expected: &Value,
        actual: &Value,
        config: &CompareConfig,
    ) -> CompareResult<()> {
        let mut ctx = CompareContext::new(self, config);
        ctx.compare(expected, actual)
    }

    fn iter(&self) -> impl Iterator<Item = &(dyn Comparator + 'static)> {
        self.custom
            .iter()
            .rev()
            .chain(self.builtin.iter())
            .map(|c| &**c)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_default_comparators()
    }
}
