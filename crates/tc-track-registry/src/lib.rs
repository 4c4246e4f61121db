//! # TC Track Registry - Music-Track Catalog Subsystem
//!
//! Record store for music-track metadata plus a per-track, per-listener
//! access-control table. Runs inside a deterministic, transaction-ordered
//! execution environment: the host authenticates the caller, supplies the
//! current ledger height, and serializes every call as an atomic
//! all-or-nothing state transition.
//!
//! ## State Model
//!
//! | State | Owner | Keyed by |
//! |-------|-------|----------|
//! | Track records | Track Registry | `TrackId` |
//! | Access grants | Access Rights Table | `(TrackId, ListenerId)` |
//! | Registration counter | Track Registry | — |
//!
//! ## Control Flow
//!
//! Every public operation validates (where applicable), then authorizes
//! (where applicable), then reads/writes the tables as one unit. Existence
//! is always checked before ownership so `NotFound` and `NoPermission`
//! stay distinct.
//!
//! ## Usage Example
//!
//! ```ignore
//! use tc_track_registry::prelude::*;
//!
//! let mut catalog = TrackCatalog::new();
//! let ctx = CallContext::new(caller, ledger_height);
//!
//! let id = catalog.register_track(&ctx, "Naima", "John Coltrane", 261, "Jazz", labels)?;
//! assert!(catalog.is_track_in_catalog(id));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod errors;
pub mod registry;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{CallContext, GrantKey, TrackRecord};

    // Value objects
    pub use crate::domain::value_objects::{ListenerId, TrackId};

    // Validation and authorization predicates
    pub use crate::domain::authorization::is_owner;
    pub use crate::domain::validation::{
        check_category, check_labels, check_length, check_name, check_performer, limits,
    };

    // Errors
    pub use crate::errors::RegistryError;

    // Store
    pub use crate::registry::TrackCatalog;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
