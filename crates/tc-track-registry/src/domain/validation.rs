//! # Validation Layer
//!
//! Pure field-constraint predicates, applied before any mutation that
//! accepts user-supplied text or length fields. These functions never
//! consult stored state and have no side effects.
//!
//! All text bounds are byte lengths with an exclusive upper bound:
//! `0 < len(field) < upper`.

// =============================================================================
// FIELD LIMIT CONSTANTS
// =============================================================================

/// Field bounds for track records.
pub mod limits {
    /// Maximum track name length in bytes.
    pub const MAX_NAME_BYTES: usize = 64;

    /// Maximum performer length in bytes.
    pub const MAX_PERFORMER_BYTES: usize = 32;

    /// Maximum category length in bytes.
    pub const MAX_CATEGORY_BYTES: usize = 32;

    /// Maximum length of a single label in bytes.
    pub const MAX_LABEL_BYTES: usize = 24;

    /// Maximum number of labels per track.
    pub const MAX_LABELS: usize = 8;

    /// Exclusive upper bound on track length in seconds (max valid is 9999).
    pub const TRACK_LENGTH_LIMIT: u64 = 10_000;
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Checks a text field against `0 < byte_len <= max`.
fn check_text(field: &str, max: usize) -> bool {
    !field.is_empty() && field.len() <= max
}

/// Checks a track name (1-64 bytes).
#[must_use]
pub fn check_name(name: &str) -> bool {
    check_text(name, limits::MAX_NAME_BYTES)
}

/// Checks a performer (1-32 bytes).
#[must_use]
pub fn check_performer(performer: &str) -> bool {
    check_text(performer, limits::MAX_PERFORMER_BYTES)
}

/// Checks a category (1-32 bytes).
#[must_use]
pub fn check_category(category: &str) -> bool {
    check_text(category, limits::MAX_CATEGORY_BYTES)
}

/// Checks a track length in seconds (1-9999).
#[must_use]
pub fn check_length(length: u64) -> bool {
    length > 0 && length < limits::TRACK_LENGTH_LIMIT
}

/// Checks a label set: 1-8 elements, every element 1-24 bytes.
///
/// The set fails if any element fails, confirmed by comparing the count of
/// passing elements against the total count.
#[must_use]
pub fn check_labels(labels: &[String]) -> bool {
    if labels.is_empty() || labels.len() > limits::MAX_LABELS {
        return false;
    }
    let passing = labels
        .iter()
        .filter(|label| check_text(label, limits::MAX_LABEL_BYTES))
        .count();
    passing == labels.len()
}

// =============================================================================
// TESTS
// =============================================================================
