//! Numbers compared within a tolerance.

use conform_types::Value;

use crate::comparator::Comparator;
use crate::context::CompareContext;
use crate::error::{CompareError, CompareResult};
use crate::failure::ComparisonFailure;
use crate::render;

/// Tolerance used for floats when no delta is configured.
pub const FLOAT_EPSILON: f64 = 1e-10;

/// Compares numeric values (integers, floats, numeric strings) as long as
/// they are not both strings. Fails when the distance exceeds the delta.
pub struct NumericComparator;

impl Comparator for NumericComparator {
    fn name(&self) -> &str {
        "numeric"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        expected.is_numeric() && actual.is_numeric() && !(expected.is_string() && actual.is_string())
    }

    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()> {
        compare_within(self.name(), expected, actual, ctx.options().delta)
    }
}

/// Compares numeric pairs where at least one side is a float.
///
/// A zero delta is replaced by [`FLOAT_EPSILON`] so rounding noise does not
/// fail a comparison.
pub struct DoubleComparator;

impl Comparator for DoubleComparator {
    fn name(&self) -> &str {
        "double"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        (expected.is_float() || actual.is_float()) && expected.is_numeric() && actual.is_numeric()
    }

    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()> {
        let delta = match ctx.options().delta {
            d if d == 0.0 => FLOAT_EPSILON,
            d => d,
        };
        compare_within(self.name(), expected, actual, delta)
    }
}

fn compare_within(comparator: &str, expected: &Value, actual: &Value, delta: f64) -> CompareResult<()> {
    let (Some(e), Some(a)) = (expected.as_number(), actual.as_number()) else {
        return Err(CompareError::Unsupported {
            comparator: comparator.to_string(),
            expected: expected.type_name(),
            actual: actual.type_name(),
        });
    };

    // Integers beyond 2^53 lose precision as floats.
    let equal = match (expected, actual) {
        (Value::Int(x), Value::Int(y)) if delta == 0.0 => x == y,
        _ => e == a || (e - a).abs() <= delta,
    };
    if equal {
        return Ok(());
    }

    Err(ComparisonFailure::new(
        expected.clone(),
        actual.clone(),
        format!(
            "Failed asserting that {} matches expected {}.",
            render::export(actual),
            render::export(expected)
        ),
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;
    use crate::registry::Registry;

    fn run(
        comparator: &dyn Comparator,
        expected: Value,
        actual: Value,
        delta: f64,
    ) -> CompareResult<()> {
        let registry = Registry::default();
        let config = CompareConfig {
            delta,
            ..Default::default()
        };
        let mut ctx = CompareContext::new(&registry, &config);
        comparator.compare(&expected, &actual, &mut ctx)
    }

    #[test]
    fn numeric_accepts_mixed_but_not_two_strings() {
        assert!(NumericComparator.accepts(&Value::Int(1), &Value::from("1")));
        assert!(NumericComparator.accepts(&Value::Int(1), &Value::Float(1.0)));
        assert!(!NumericComparator.accepts(&Value::from("1"), &Value::from("1")));
        assert!(!NumericComparator.accepts(&Value::Int(1), &Value::from("one")));
    }

    #[test]
    fn double_requires_a_float() {
        assert!(DoubleComparator.accepts(&Value::Float(1.0), &Value::Int(1)));
        assert!(DoubleComparator.accepts(&Value::from("2.5"), &Value::Float(2.5)));
        assert!(!DoubleComparator.accepts(&Value::Int(1), &Value::Int(1)));
        assert!(!DoubleComparator.accepts(&Value::Float(1.0), &Value::Null));
    }

    #[test]
    fn numeric_string_equals_integer() {
        assert!(run(&NumericComparator, Value::Int(42), Value::from("42"), 0.0).is_ok());
    }

    #[test]
    fn delta_tolerance() {
        assert!(run(&NumericComparator, Value::Int(10), Value::Int(12), 2.0).is_ok());
        assert!(run(&NumericComparator, Value::Int(10), Value::Int(13), 2.0).is_err());
    }

    #[test]
    fn large_integers_compare_exactly() {
        let big = i64::MAX;
        assert!(run(&NumericComparator, Value::Int(big), Value::Int(big - 1), 0.0).is_err());
    }

    #[test]
    fn double_uses_epsilon_without_delta() {
        assert!(run(&DoubleComparator, Value::Float(0.1 + 0.2), Value::Float(0.3), 0.0).is_ok());
        assert!(run(&DoubleComparator, Value::Float(0.3), Value::Float(0.31), 0.0).is_err());
    }

    #[test]
    fn nan_never_matches() {
        assert!(run(&DoubleComparator, Value::Float(f64::NAN), Value::Float(f64::NAN), 1.0).is_err());
    }

    #[test]
    fn infinities_match_themselves() {
        let inf = Value::Float(f64::INFINITY);
        assert!(run(&DoubleComparator, inf.clone(), inf, 0.0).is_ok());
    }

    #[test]
    fn failure_message_names_both_values() {
        let err = run(&NumericComparator, Value::Int(1), Value::Int(2), 0.0).unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(failure.message(), "Failed asserting that 2 matches expected 1.");
        assert!(failure.expected_as_string().is_none());
    }
}
