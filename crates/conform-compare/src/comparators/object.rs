use conform_types::Value;

use crate::comparator::Comparator;
use crate::comparators::array::diff_collections;
use crate::context::CompareContext;
use crate::error::{CompareError, CompareResult};
use crate::failure::ComparisonFailure;
use crate::render;

/// Summary message of a failed object comparison.
pub const OBJECTS_NOT_EQUAL: &str = "Failed asserting that two objects are equal.";

/// Compares two objects: same class, then property by property.
///
/// Properties are walked like a keyed collection but never canonicalized.
pub struct ObjectComparator;

impl Comparator for ObjectComparator {
    fn name(&self) -> &str {
        "object"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Object(_), Value::Object(_)))
    }

    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()> {
        let (Value::Object(expected_object), Value::Object(actual_object)) = (expected, actual)
        else {
            return Err(CompareError::Unsupported {
                comparator: self.name().to_string(),
                expected: expected.type_name(),
                actual: actual.type_name(),
            });
        };

        if expected_object.class != actual_object.class {
            return Err(ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                format!(
                    "{} Object is not an instance of expected class \"{}\".",
                    actual_object.class, expected_object.class
                ),
            )
            .with_strings(render::export(expected), render::export(actual))
            .into());
        }

        let title = format!("{} Object", expected_object.class);
        let diff = diff_collections(
            &title,
            &expected_object.properties,
            &actual_object.properties,
            false,
            ctx,
        )?;
        match diff {
            None => Ok(()),
            Some(diff) => Err(ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                OBJECTS_NOT_EQUAL,
            )
            .with_strings(diff.expected, diff.actual)
            .with_discrepancies(diff.discrepancies)
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;
    use crate::failure::DiscrepancyKind;
    use crate::registry::Registry;
    use conform_types::ObjectValue;

    fn point(x: i64, y: i64) -> Value {
        ObjectValue::new("Point")
            .with_property("x", x)
            .with_property("y", y)
            .into()
    }

    fn compare(expected: &Value, actual: &Value, config: &CompareConfig) -> CompareResult<()> {
        Registry::default().assert_equals(expected, actual, config)
    }

    #[test]
    fn equal_objects() {
        assert!(compare(&point(1, 2), &point(1, 2), &CompareConfig::default()).is_ok());
    }

    #[test]
    fn property_mismatch_renders_object_block() {
        let failure = compare(&point(1, 2), &point(1, 3), &CompareConfig::default())
            .unwrap_err()
            .into_failure()
            .unwrap();
        assert_eq!(failure.message(), OBJECTS_NOT_EQUAL);
        assert_eq!(
            failure.expected_as_string(),
            Some("Point Object\n(\n    [x] => 1\n    [y] => 2\n)")
        );
        assert_eq!(
            failure.actual_as_string(),
            Some("Point Object\n(\n    [x] => 1\n    [y] => 3\n)")
        );
        assert_eq!(failure.discrepancies()[0].kind, DiscrepancyKind::ValueMismatch);
    }

    #[test]
    fn class_mismatch_exports_both_objects() {
        let other: Value = ObjectValue::new("Vector").with_property("x", 1).into();
        let failure = compare(&point(1, 2), &other, &CompareConfig::default())
            .unwrap_err()
            .into_failure()
            .unwrap();
        assert_eq!(
            failure.message(),
            "Vector Object is not an instance of expected class \"Point\"."
        );
        assert_eq!(failure.actual_as_string(), Some("Vector Object\n(\n    [x] => 1\n)"));
    }

    #[test]
    fn properties_are_not_canonicalized() {
        let config = CompareConfig {
            canonicalize: true,
            ..Default::default()
        };
        assert!(compare(&point(1, 2), &point(2, 1), &config).is_err());
    }

    #[test]
    fn nested_collections_inside_properties_still_canonicalize() {
        let config = CompareConfig {
            canonicalize: true,
            ..Default::default()
        };
        let tags = |items: [&str; 2]| -> Value {
            ObjectValue::new("Post")
                .with_property("tags", conform_types::KeyedArray::from_values(items.map(Value::from)))
                .into()
        };
        assert!(compare(&tags(["a", "b"]), &tags(["b", "a"]), &config).is_ok());
    }
}
