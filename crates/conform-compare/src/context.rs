use conform_types::{Key, Value};
use tracing::{trace, warn};

use crate::config::{CompareConfig, CompareOptions};
use crate::error::{CompareError, CompareResult};
use crate::registry::Registry;

/// State carried down one recursive comparison.
///
/// Holds the registry used to dispatch nested pairs, the options forwarded
/// to every comparator, and the key path from the root to the pair being
/// compared. A context belongs to a single top-level comparison and is never
/// shared between comparisons.
pub struct CompareContext<'r> {
    registry: &'r Registry,
    options: CompareOptions,
    max_depth: usize,
    path: Vec<Key>,
}

impl<'r> CompareContext<'r> {
    pub fn new(registry: &'r Registry, config: &CompareConfig) -> Self {
        Self {
            registry,
            options: config.options(),
            max_depth: config.max_depth,
            path: Vec::new(),
        }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Number of keys between the root and the current pair.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The current key path rendered as `[a][0]`, or `<root>` at the top.
    pub fn path(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }
        self.path.iter().map(|key| format!("[{key}]")).collect()
    }

    /// Resolve a comparator for the pair and run it at the current depth.
    pub fn compare(&mut self, expected: &Value, actual: &Value) -> CompareResult<()> {
        let registry = self.registry;
        let comparator = registry.resolve(expected, actual)?;
        comparator.compare(expected, actual, self)
    }

    /// Compare the values stored under `key` on both sides, one level deeper.
    ///
    /// Fails with [`CompareError::DepthExceeded`] instead of descending past
    /// the configured maximum depth.
    pub fn compare_entry(&mut self, key: &Key, expected: &Value, actual: &Value) -> CompareResult<()> {
        if self.depth() >= self.max_depth {
            warn!(path = %self.path(), max_depth = self.max_depth, "comparison depth limit reached");
            return Err(CompareError::DepthExceeded {
                max_depth: self.max_depth,
                path: self.path(),
            });
        }

        self.path.push(key.clone());
        let result = self.compare(expected, actual);
        if result.is_ok() {
            trace!(path = %self.path(), "entries equal");
        }
        self.path.pop();
        result
    }
}
