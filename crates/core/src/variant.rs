//! Selection of a subtype from sibling optional fields.
//!
//! AdCOM encodes "one of display/video/audio" (and similar) as optional
//! sibling objects. The typed model turns those into Rust enums; these helpers
//! do the selection and report what was missing or ambiguous.

use crate::error::{AdcomError, AdcomResult};

/// Exactly one populated candidate, or an error naming the object.
pub(crate) fn exactly_one<T>(
    object: &'static str,
    expected: &'static str,
    candidates: impl IntoIterator<Item = (&'static str, Option<T>)>,
) -> AdcomResult<T> {
    match at_most_one(object, candidates)? {
        Some(value) => Ok(value),
        None => Err(AdcomError::MissingVariant { object, expected }),
    }
}

/// At most one populated candidate.
pub(crate) fn at_most_one<T>(
    object: &'static str,
    candidates: impl IntoIterator<Item = (&'static str, Option<T>)>,
) -> AdcomResult<Option<T>> {
    let mut present: Vec<(&'static str, T)> = candidates
        .into_iter()
        .filter_map(|(slot, value)| value.map(|v| (slot, v)))
        .collect();

    if present.len() > 1 {
        return Err(AdcomError::AmbiguousVariant {
            object,
            found: present.into_iter().map(|(slot, _)| slot).collect(),
        });
    }
    Ok(present.pop().map(|(_, value)| value))
}
