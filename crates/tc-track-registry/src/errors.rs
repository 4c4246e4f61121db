//! # Error Types
//!
//! The complete error taxonomy for catalog operations. Every error is a
//! terminal outcome returned to the immediate caller with zero state
//! mutation; there is no internal recovery or retry anywhere in this core.

use thiserror::Error;

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by track catalog operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Referenced track or grant record does not exist.
    #[error("track or grant record not found")]
    NotFound,

    /// Reserved for duplicate-insert scenarios. Registration always
    /// allocates a fresh identifier, so no current operation raises it.
    #[error("record already exists")]
    AlreadyExists,

    /// Track name fails the 1-64 byte bound.
    #[error("track name must be 1-64 bytes")]
    InvalidName,

    /// Performer fails the 1-32 byte bound.
    #[error("performer must be 1-32 bytes")]
    InvalidPerformer,

    /// Category fails the 1-32 byte bound.
    #[error("category must be 1-32 bytes")]
    InvalidCategory,

    /// Track length is outside 1-9999 seconds.
    #[error("track length must be 1-9999 seconds")]
    InvalidLength,

    /// Label set fails the 1-8 entries of 1-24 bytes each bound.
    #[error("labels must be 1-8 entries of 1-24 bytes each")]
    InvalidLabels,

    /// Caller is not the track's current owner.
    #[error("caller is not the track owner")]
    NoPermission,

    /// A required access grant is absent or false.
    #[error("required access grant is absent or false")]
    AccessForbidden,

    /// Reserved for future administrative gating; never raised today.
    #[error("operation restricted to administrators")]
    AdminRestricted,

    /// Reserved for future administrative gating; never raised today.
    #[error("operation is currently limited")]
    LimitedOperation,
}

impl RegistryError {
    /// Returns true if this error came from a field-validation failure.
    #[must_use]
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidName
                | Self::InvalidPerformer
                | Self::InvalidCategory
                | Self::InvalidLength
                | Self::InvalidLabels
        )
    }

    /// Returns true if this error came from an authorization failure.
    #[must_use]
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::NoPermission | Self::AccessForbidden)
    }
}

// =============================================================================
// TESTS
// =============================================================================
