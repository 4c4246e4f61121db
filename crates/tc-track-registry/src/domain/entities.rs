//! # Core Domain Entities
//!
//! Main business entities for the track catalog: the stored track record,
//! the per-listener grant record, and the ambient call context supplied by
//! the host execution environment.

use crate::domain::value_objects::{ListenerId, TrackId};
use serde::{Deserialize, Serialize};

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// Ambient context for one catalog operation.
///
/// The host execution environment authenticates the caller and serializes
/// all calls; this struct threads those two ambient facts explicitly so
/// authorization and timestamp logic stay testable with injected values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// Authenticated identity of whoever invoked the current operation.
    pub caller: ListenerId,
    /// Current ledger height, used as the creation timestamp.
    pub ledger_height: u64,
}

impl CallContext {
    /// Creates a call context for the given caller at the given height.
    #[must_use]
    pub const fn new(caller: ListenerId, ledger_height: u64) -> Self {
        Self {
            caller,
            ledger_height,
        }
    }
}

// =============================================================================
// TRACK RECORD
// =============================================================================

/// Stored metadata for one music track.
///
/// ## Invariants
/// - `name`, `performer`, `category`, and every label are non-empty
/// - `added_at` never changes after creation
/// - `creator` changes only via an explicit, authorized ownership transfer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Track title, 1-64 bytes.
    pub name: String,
    /// Performing artist, 1-32 bytes. Not updatable after registration.
    pub performer: String,
    /// Identity of the current owner.
    pub creator: ListenerId,
    /// Duration in seconds, 1-9999.
    pub length: u64,
    /// Ledger height at registration time.
    pub added_at: u64,
    /// Genre or category, 1-32 bytes.
    pub category: String,
    /// Ordered labels, 1-8 entries of 1-24 bytes each.
    pub labels: Vec<String>,
}

// =============================================================================
// GRANT KEY
// =============================================================================

/// Lookup key for the access-rights table: one (track, listener) pair.
///
/// The stored value is a single `can_access` boolean. A grant exists only
/// if explicitly inserted; absence is a not-found condition, never an
/// implicit denial.
pub type GrantKey = (TrackId, ListenerId);

// =============================================================================
// TESTS
// =============================================================================
