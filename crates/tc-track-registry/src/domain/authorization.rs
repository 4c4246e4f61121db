//! # Authorization Layer
//!
//! Pure caller-vs-owner predicates. Every mutating or ownership-restricted
//! operation composes an existence check (`NotFound` when absent) with the
//! ownership predicate (`NoPermission` when it fails), in that order, so the
//! caller always sees the correct distinct error kind.

use crate::domain::entities::TrackRecord;
use crate::domain::value_objects::ListenerId;

/// Returns true iff the record exists and its creator equals `identity`.
///
/// Absence is false, not an error; the caller decides whether absence was
/// already ruled out.
#[must_use]
pub fn is_owner(record: Option<&TrackRecord>, identity: ListenerId) -> bool {
    record.is_some_and(|track| track.creator == identity)
}

// =============================================================================
// TESTS
// =============================================================================
