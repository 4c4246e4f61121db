//! # Integration Tests
//!
//! End-to-end coverage of the catalog's public operation surface, driving
//! every scenario through the same calls the host execution environment
//! would make.

pub mod field_bounds;

// =============================================================================
// SHARED FIXTURES
// =============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use tc_track_registry::prelude::*;

    /// Fixed identity A for deterministic scenarios.
    pub const ALICE: ListenerId = ListenerId::new([0xaa; 20]);

    /// Fixed identity B for deterministic scenarios.
    pub const BOB: ListenerId = ListenerId::new([0xbb; 20]);

    /// A fresh random identity, for scenarios that need a stranger.
    pub fn random_listener() -> ListenerId {
        ListenerId::new(rand::random())
    }

    /// Call context at a fixed ledger height.
    pub fn ctx(caller: ListenerId) -> CallContext {
        CallContext::new(caller, 1000)
    }

    /// Registers a well-formed track and returns its identifier.
    pub fn register_ok(catalog: &mut TrackCatalog, caller: ListenerId) -> TrackId {
        catalog
            .register_track(
                &ctx(caller),
                "Giant Steps",
                "John Coltrane",
                287,
                "Jazz",
                vec!["bebop".to_string(), "changes".to_string()],
            )
            .expect("well-formed registration should succeed")
    }
}
