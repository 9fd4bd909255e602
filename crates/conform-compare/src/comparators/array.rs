//! Keyed-collection comparison.
//!
//! Walks the expected collection in order, delegating every pair of values
//! stored under the same key to the registry, and renders an aligned
//! expected/actual listing of the two collections. The walk never stops at
//! the first difference: missing keys, extra keys and nested mismatches are
//! all collected into one failure.

use std::borrow::Cow;

use conform_types::{Key, KeyedArray, Value};
use indexmap::IndexSet;
use tracing::debug;

use crate::comparator::Comparator;
use crate::context::CompareContext;
use crate::error::{CompareError, CompareResult};
use crate::failure::{ComparisonFailure, Discrepancy, DiscrepancyKind};
use crate::render;

/// Summary message of a failed collection comparison.
pub const ARRAYS_NOT_EQUAL: &str = "Failed asserting that two arrays are equal.";

/// Compares two keyed collections.
pub struct ArrayComparator;

impl Comparator for ArrayComparator {
    fn name(&self) -> &str {
        "array"
    }

    fn accepts(&self, expected: &Value, actual: &Value) -> bool {
        matches!((expected, actual), (Value::Array(_), Value::Array(_)))
    }

    fn compare(
        &self,
        expected: &Value,
        actual: &Value,
        ctx: &mut CompareContext<'_>,
    ) -> CompareResult<()> {
        let (Value::Array(expected_entries), Value::Array(actual_entries)) = (expected, actual)
        else {
            return Err(CompareError::Unsupported {
                comparator: self.name().to_string(),
                expected: expected.type_name(),
                actual: actual.type_name(),
            });
        };

        let canonicalize = ctx.options().canonicalize;
        let title = render::ARRAY_TITLE;
        match diff_collections(title, expected_entries, actual_entries, canonicalize, ctx)? {
            None => Ok(()),
            Some(diff) => Err(ComparisonFailure::new(
                expected.clone(),
                actual.clone(),
                ARRAYS_NOT_EQUAL,
            )
            .with_strings(diff.expected, diff.actual)
            .with_canonicalized(canonicalize)
            .with_discrepancies(diff.discrepancies)
            .into()),
        }
    }
}

/// Rendered listings of two collections that differ.
pub(crate) struct CollectionDiff {
    pub expected: String,
    pub actual: String,
    pub discrepancies: Vec<Discrepancy>,
}

/// Walk two collections and render both sides as blocks titled `title`.
///
/// Returns `Ok(None)` when every key matches. Fatal errors from nested
/// comparisons abort the walk.
pub(crate) fn diff_collections(
    title: &str,
    expected: &KeyedArray,
    actual: &KeyedArray,
    canonicalize: bool,
    ctx: &mut CompareContext<'_>,
) -> CompareResult<Option<CollectionDiff>> {
    let (expected, actual) = if canonicalize {
        (
            Cow::Owned(expected.sorted_by_value()),
            Cow::Owned(actual.sorted_by_value()),
        )
    } else {
        (Cow::Borrowed(expected), Cow::Borrowed(actual))
    };

    let mut remaining: IndexSet<&Key> = actual.keys().collect();
    let mut expected_listing = render::block_header(title);
    let mut actual_listing = render::block_header(title);
    let mut discrepancies = Vec::new();

    for (key, expected_value) in expected.iter() {
        remaining.shift_remove(key);

        let Some(actual_value) = actual.get(key) else {
            debug!(path = %ctx.path(), %key, "key missing from actual");
            render::push_line(&mut expected_listing, key, &render::shortened_export(expected_value));
            discrepancies.push(Discrepancy::new(key.clone(), DiscrepancyKind::MissingKey));
            continue;
        };

        match ctx.compare_entry(key, expected_value, actual_value) {
            Ok(()) => {
                render::push_line(&mut expected_listing, key, &render::shortened_export(expected_value));
                render::push_line(&mut actual_listing, key, &render::shortened_export(actual_value));
            }
            Err(CompareError::Failure(failure)) => {
                debug!(path = %ctx.path(), %key, reason = failure.message(), "values differ");
                render::push_line(
                    &mut expected_listing,
                    key,
                    &nested_rendering(failure.expected_as_string(), failure.expected()),
                );
                render::push_line(
                    &mut actual_listing,
                    key,
                    &nested_rendering(failure.actual_as_string(), failure.actual()),
                );
                discrepancies.push(Discrepancy::new(key.clone(), DiscrepancyKind::ValueMismatch));
            }
            Err(fatal) => return Err(fatal),
        }
    }

    for (key, actual_value) in actual.iter().filter(|(key, _)| remaining.contains(key)) {
        debug!(path = %ctx.path(), %key, "unexpected key in actual");
        render::push_line(&mut actual_listing, key, &render::shortened_export(actual_value));
        discrepancies.push(Discrepancy::new(key.clone(), DiscrepancyKind::ExtraKey));
    }

    if discrepancies.is_empty() {
        return Ok(None);
    }

    expected_listing.push(')');
    actual_listing.push(')');
    Ok(Some(CollectionDiff {
        expected: expected_listing,
        actual: actual_listing,
        discrepancies,
    }))
}

// A nested failure's own rendering when it has one, else the full raw value.
fn nested_rendering(rendered: Option<&str>, raw: &Value) -> String {
    match rendered.filter(|text| !text.is_empty()) {
        Some(text) => render::indent(text),
        None => render::nested(raw),
    }
}
