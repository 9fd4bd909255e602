use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CompareError, CompareResult};

/// Default limit on collection nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for a comparison run.
///
/// Loadable from TOML; missing fields take their defaults:
///
/// ```toml
/// delta = 0.001
/// canonicalize = true
/// ignore_case = false
/// max_depth = 64
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Allowed absolute distance between two numbers.
    pub delta: f64,
    /// Sort collections by value (and re-key them) before comparing.
    pub canonicalize: bool,
    /// Compare strings case-insensitively.
    pub ignore_case: bool,
    /// Maximum nesting depth walked before the comparison is aborted.
    pub max_depth: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            delta: 0.0,
            canonicalize: false,
            ignore_case: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompareConfig {
    /// Exact comparison: no tolerance, order and case sensitive.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Order- and case-insensitive comparison.
    pub fn lenient() -> Self {
        Self {
            canonicalize: true,
            ignore_case: true,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(text: &str) -> CompareResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| CompareError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> CompareResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CompareError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Reject tolerances and limits no comparison can run with.
    pub fn validate(&self) -> CompareResult<()> {
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(CompareError::Config(format!(
                "delta must be a finite non-negative number, got {}",
                self.delta
            )));
        }
        if self.max_depth == 0 {
            return Err(CompareError::Config("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    /// The per-comparison options carried down the recursion.
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            delta: self.delta,
            canonicalize: self.canonicalize,
            ignore_case: self.ignore_case,
        }
    }
}

/// Equality relaxations forwarded unchanged to every nested comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompareOptions {
    pub delta: f64,
    pub canonicalize: bool,
    pub ignore_case: bool,
}
