//! # Track Catalog Store
//!
//! The owned store object holding both persistent tables and the identifier
//! counter, plus the full public operation surface. Created once at ledger
//! genesis and mutated only through the operations below; the host execution
//! environment serializes calls and supplies per-call atomicity.
//!
//! Every mutating operation runs all of its validation and authorization
//! checks before touching either table, so a failed operation leaves zero
//! partial state behind.

use crate::domain::authorization;
use crate::domain::entities::{CallContext, GrantKey, TrackRecord};
use crate::domain::validation;
use crate::domain::value_objects::{ListenerId, TrackId};
use crate::errors::RegistryError;

use std::collections::HashMap;
use tracing::{debug, info, warn};

// =============================================================================
// TRACK CATALOG
// =============================================================================

/// Music-track registry plus per-listener access rights.
///
/// ## Invariants
/// - `track_counter` is monotonically non-decreasing; its post-increment
///   value becomes each new track's identifier, so identifiers start at 1
///   and are never reused even after deletion
/// - a stored record always has non-empty name/performer/category/labels
/// - deleting a track removes only the deleting caller's own grant; other
///   listeners' grants for that track are left in place
#[derive(Debug, Default)]
pub struct TrackCatalog {
    /// Track records, keyed by identifier.
    tracks: HashMap<TrackId, TrackRecord>,
    /// Access grants, keyed by (track, listener).
    grants: HashMap<GrantKey, bool>,
    /// Monotonic registration counter; starts at 0.
    track_counter: u64,
}

impl TrackCatalog {
    /// Creates an empty catalog at ledger genesis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // GUARD HELPERS
    // =========================================================================

    /// Fetches a record, mapping absence to `NotFound`.
    fn track(&self, track_id: TrackId) -> Result<&TrackRecord, RegistryError> {
        self.tracks.get(&track_id).ok_or(RegistryError::NotFound)
    }

    /// Existence then ownership, in that order, so the caller always sees
    /// the correct distinct error kind.
    fn ensure_owner(&self, track_id: TrackId, caller: ListenerId) -> Result<(), RegistryError> {
        let record = self.tracks.get(&track_id);
        if record.is_none() {
            return Err(RegistryError::NotFound);
        }
        if !authorization::is_owner(record, caller) {
            warn!(track = %track_id, %caller, "caller is not the track owner");
            return Err(RegistryError::NoPermission);
        }
        Ok(())
    }

    /// Rewrites `creator` on an existing record.
    fn apply_transfer(
        &mut self,
        track_id: TrackId,
        new_creator: ListenerId,
    ) -> Result<(), RegistryError> {
        let record = self
            .tracks
            .get_mut(&track_id)
            .ok_or(RegistryError::NotFound)?;
        record.creator = new_creator;
        info!(track = %track_id, new_owner = %new_creator, "track ownership transferred");
        Ok(())
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Registers a new track owned by the caller.
    ///
    /// All five field validations run before any write; the first failing
    /// check short-circuits with no partial state change. On success the
    /// record insert, the caller's self-grant, and the counter increment
    /// commit together, and the new identifier is returned.
    pub fn register_track(
        &mut self,
        ctx: &CallContext,
        name: &str,
        performer: &str,
        length: u64,
        category: &str,
        labels: Vec<String>,
    ) -> Result<TrackId, RegistryError> {
        if !validation::check_name(name) {
            return Err(RegistryError::InvalidName);
        }
        if !validation::check_performer(performer) {
            return Err(RegistryError::InvalidPerformer);
        }
        if !validation::check_length(length) {
            return Err(RegistryError::InvalidLength);
        }
        if !validation::check_category(category) {
            return Err(RegistryError::InvalidCategory);
        }
        if !validation::check_labels(&labels) {
            return Err(RegistryError::InvalidLabels);
        }

        let track_id = TrackId::new(self.track_counter + 1);
        let record = TrackRecord {
            name: name.to_owned(),
            performer: performer.to_owned(),
            creator: ctx.caller,
            length,
            added_at: ctx.ledger_height,
            category: category.to_owned(),
            labels,
        };

        self.tracks.insert(track_id, record);
        self.grants.insert((track_id, ctx.caller), true);
        self.track_counter = track_id.value();

        debug!(
            track = %track_id,
            caller = %ctx.caller,
            height = ctx.ledger_height,
            "track registered"
        );
        Ok(track_id)
    }

    /// Replaces name, length, category, and labels on an owned track.
    ///
    /// `creator` and `added_at` are left untouched; the performer is not
    /// updatable by design. Re-runs the same field validations as
    /// registration after the existence and ownership checks.
    pub fn modify_track_info(
        &mut self,
        ctx: &CallContext,
        track_id: TrackId,
        new_name: &str,
        new_length: u64,
        new_category: &str,
        new_labels: Vec<String>,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(track_id, ctx.caller)?;

        if !validation::check_name(new_name) {
            return Err(RegistryError::InvalidName);
        }
        if !validation::check_length(new_length) {
            return Err(RegistryError::InvalidLength);
        }
        if !validation::check_category(new_category) {
            return Err(RegistryError::InvalidCategory);
        }
        if !validation::check_labels(&new_labels) {
            return Err(RegistryError::InvalidLabels);
        }

        let record = self
            .tracks
            .get_mut(&track_id)
            .ok_or(RegistryError::NotFound)?;
        record.name = new_name.to_owned();
        record.length = new_length;
        record.category = new_category.to_owned();
        record.labels = new_labels;

        debug!(track = %track_id, caller = %ctx.caller, "track metadata updated");
        Ok(())
    }

    /// Transfers ownership of an owned track unconditionally.
    ///
    /// Does not create or check any grant for the new owner.
    pub fn change_track_owner(
        &mut self,
        ctx: &CallContext,
        track_id: TrackId,
        new_creator: ListenerId,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(track_id, ctx.caller)?;
        self.apply_transfer(track_id, new_creator)
    }

    /// Transfers ownership, requiring the new owner to already hold a
    /// `can_access = true` grant for the track.
    ///
    /// A missing or false grant fails with `AccessForbidden`; the transfer
    /// itself is then identical to [`Self::change_track_owner`].
    pub fn change_owner_with_access_check(
        &mut self,
        ctx: &CallContext,
        track_id: TrackId,
        new_creator: ListenerId,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(track_id, ctx.caller)?;
        if self.grants.get(&(track_id, new_creator)).copied() != Some(true) {
            warn!(
                track = %track_id,
                target = %new_creator,
                "guarded transfer target holds no access grant"
            );
            return Err(RegistryError::AccessForbidden);
        }
        self.apply_transfer(track_id, new_creator)
    }

    /// Deletes an owned track.
    ///
    /// Removes the record and only the `(track, caller)` grant; any other
    /// listener's grant for the track is left dangling. The identifier is
    /// never reused.
    pub fn delete_track(
        &mut self,
        ctx: &CallContext,
        track_id: TrackId,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(track_id, ctx.caller)?;
        self.tracks.remove(&track_id);
        self.grants.remove(&(track_id, ctx.caller));
        info!(track = %track_id, caller = %ctx.caller, "track deleted");
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Returns a full copy of the track record.
    pub fn get_track_info(&self, track_id: TrackId) -> Result<TrackRecord, RegistryError> {
        self.track(track_id).cloned()
    }

    /// Returns the track name.
    pub fn lookup_track_name(&self, track_id: TrackId) -> Result<String, RegistryError> {
        Ok(self.track(track_id)?.name.clone())
    }

    /// Returns the performer.
    pub fn lookup_track_performer(&self, track_id: TrackId) -> Result<String, RegistryError> {
        Ok(self.track(track_id)?.performer.clone())
    }

    /// Returns the category.
    pub fn lookup_track_category(&self, track_id: TrackId) -> Result<String, RegistryError> {
        Ok(self.track(track_id)?.category.clone())
    }

    /// Returns the label set.
    pub fn lookup_track_labels(&self, track_id: TrackId) -> Result<Vec<String>, RegistryError> {
        Ok(self.track(track_id)?.labels.clone())
    }

    /// Alias for [`Self::lookup_track_labels`].
    pub fn get_all_track_labels(&self, track_id: TrackId) -> Result<Vec<String>, RegistryError> {
        self.lookup_track_labels(track_id)
    }

    /// Alias for [`Self::lookup_track_labels`].
    pub fn get_track_metadata(&self, track_id: TrackId) -> Result<Vec<String>, RegistryError> {
        self.lookup_track_labels(track_id)
    }

    /// Returns the track length in seconds.
    pub fn lookup_track_length(&self, track_id: TrackId) -> Result<u64, RegistryError> {
        Ok(self.track(track_id)?.length)
    }

    /// Returns the track length, restricted to the current owner.
    pub fn get_creator_only_track_length(
        &self,
        ctx: &CallContext,
        track_id: TrackId,
    ) -> Result<u64, RegistryError> {
        self.ensure_owner(track_id, ctx.caller)?;
        self.lookup_track_length(track_id)
    }

    /// Returns the current owner.
    pub fn lookup_track_creator(&self, track_id: TrackId) -> Result<ListenerId, RegistryError> {
        Ok(self.track(track_id)?.creator)
    }

    /// Returns the ledger height at which the track was registered.
    pub fn lookup_track_creation_block(&self, track_id: TrackId) -> Result<u64, RegistryError> {
        Ok(self.track(track_id)?.added_at)
    }

    /// Returns the registration counter: the count of all tracks ever
    /// registered, not the live record count.
    #[must_use]
    pub fn get_catalog_size(&self) -> u64 {
        self.track_counter
    }

    /// Returns true if a record currently exists for the identifier.
    #[must_use]
    pub fn is_track_in_catalog(&self, track_id: TrackId) -> bool {
        self.tracks.contains_key(&track_id)
    }

    /// Returns the stored grant boolean for the exact (track, listener) pair.
    ///
    /// Absence of the pair is `NotFound`, never an implicit false grant, and
    /// track existence is not consulted: a grant left behind by a deleted
    /// track still answers with its stored value.
    pub fn check_listener_access(
        &self,
        track_id: TrackId,
        listener: ListenerId,
    ) -> Result<bool, RegistryError> {
        self.grants
            .get(&(track_id, listener))
            .copied()
            .ok_or(RegistryError::NotFound)
    }

    /// Alias for [`Self::check_listener_access`].
    pub fn verify_listener_access(
        &self,
        track_id: TrackId,
        listener: ListenerId,
    ) -> Result<bool, RegistryError> {
        self.check_listener_access(track_id, listener)
    }
}

// =============================================================================
// TESTS
// =============================================================================
