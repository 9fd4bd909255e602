use conform_types::Value;

use crate::comparator::Comparator;
use crate::context::CompareContext;
use crate::error::CompareResult;
use crate::failure::ComparisonFailure;
use crate::render;

/// Fallback comparator: accepts every pair and fails when the two values
/// are of different types.
///
/// Placed last in resolution order. It only sees pairs no other comparator
/// accepts, such as a collection against a scalar.
pub struct TypeComparator;

impl Comparator for TypeComparator {
    fn name(&self) -> &str {
        "type"
    }

    fn accepts(&self, _expected: &Value, _actual: &Value) -> bool {
        true
    }

    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        _ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()> {
        if expected.type_name() == actual.type_name() {
            return Ok(());
        }
        Err(ComparisonFailure::new(
            expected.clone(),
            actual.clone(),
            format!(
                "{} does not match expected type \"{}\".",
                render::export(actual),
                expected.type_name()
            ),
        )
        .into())
    }
}
