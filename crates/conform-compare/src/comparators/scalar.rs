use conform_types::Value;

use crate::comparator::Comparator;
use crate::context::CompareContext;
use crate::error::CompareResult;
use crate::failure::ComparisonFailure;
use crate::render;

/// Compares null, booleans, numbers and strings.
///
/// When either side is a string both sides are compared by their printed
/// form (lowercased under `ignore_case`), so `"true"` equals `true`.
/// Otherwise the values must be identical.
pub struct ScalarComparator;

impl Comparator for ScalarComparator {
    fn name(&self) -> &str {
        "scalar"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        expected.is_scalar() && actual.is_scalar()
    }

    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()> {
        let equal = if expected.is_string() || actual.is_string() {
            let (e, a) = (render::print(expected), render::print(actual));
            if ctx.options().ignore_case {
                e.to_lowercase() == a.to_lowercase()
            } else {
                e == a
            }
        } else {
            expected == actual
        };
        if equal {
            return Ok(());
        }

        let failure = if expected.is_string() && actual.is_string() {
            ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                "Failed asserting that two strings are equal.",
            )
            .with_strings(render::export(expected), render::export(actual))
        } else {
            ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                format!(
                    "Failed asserting that {} matches expected {}.",
                    render::export(actual),
                    render::export(expected)
                ),
            )
        };
        Err(failure.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;
    use crate::registry::Registry;

    fn run(expected: Value, actual: Value, ignore_case: bool) -> CompareResult<()> {
        let registry = Registry::default();
        let config = CompareConfig {
            ignore_case,
            ..Default::default()
        };
        let mut ctx = CompareContext::new(&registry, &config);
        ScalarComparator.compare(&expected, &actual, &mut ctx)
    }

    #[test]
    fn strings_compare_exactly_by_default() {
        assert!(run(Value::from("abc"), Value::from("abc"), false).is_ok());
        assert!(run(Value::from("abc"), Value::from("ABC"), false).is_err());
    }

    #[test]
    fn ignore_case_folds_strings() {
        assert!(run(Value::from("Hello"), Value::from("hELLO"), true).is_ok());
        assert!(run(Value::from("ÉCOLE"), Value::from("école"), true).is_ok());
        assert!(run(Value::from("Hello"), Value::from("help"), true).is_err());
    }

    #[test]
    fn string_failure_carries_quoted_renderings() {
        let err = run(Value::from("a"), Value::from("b"), false).unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(failure.message(), "Failed asserting that two strings are equal.");
        assert_eq!(failure.expected_as_string(), Some("'a'"));
        assert_eq!(failure.actual_as_string(), Some("'b'"));
    }

    #[test]
    fn string_against_other_scalar_uses_printed_form() {
        assert!(run(Value::from("true"), Value::Bool(true), false).is_ok());
        assert!(run(Value::Null, Value::from("null"), false).is_ok());
        assert!(run(Value::from("yes"), Value::Bool(true), false).is_err());
    }

    #[test]
    fn non_string_scalars_must_be_identical() {
        assert!(run(Value::Bool(true), Value::Bool(true), false).is_ok());
        assert!(run(Value::Null, Value::Null, false).is_ok());

        let err = run(Value::Null, Value::Bool(false), false).unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(
            failure.message(),
            "Failed asserting that false matches expected null."
        );
        assert!(failure.actual_as_string().is_none());
    }
}
