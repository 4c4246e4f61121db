//! # Field Bounds Tests
//!
//! Boundary coverage for every validated field, driven through the public
//! registration and modification operations.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{ctx, register_ok, ALICE};
    use tc_track_registry::prelude::*;

    fn register_named(catalog: &mut TrackCatalog, name: &str) -> Result<TrackId, RegistryError> {
        catalog.register_track(
            &ctx(ALICE),
            name,
            "Performer",
            120,
            "Pop",
            vec!["tag".to_string()],
        )
    }

    fn register_with_length(
        catalog: &mut TrackCatalog,
        length: u64,
    ) -> Result<TrackId, RegistryError> {
        catalog.register_track(
            &ctx(ALICE),
            "Name",
            "Performer",
            length,
            "Pop",
            vec!["tag".to_string()],
        )
    }

    fn register_with_labels(
        catalog: &mut TrackCatalog,
        labels: Vec<String>,
    ) -> Result<TrackId, RegistryError> {
        catalog.register_track(&ctx(ALICE), "Name", "Performer", 120, "Pop", labels)
    }

    #[test]
    fn name_accepts_64_bytes_and_rejects_65_and_empty() {
        let mut catalog = TrackCatalog::new();

        assert!(register_named(&mut catalog, &"n".repeat(64)).is_ok());
        assert_eq!(
            register_named(&mut catalog, &"n".repeat(65)),
            Err(RegistryError::InvalidName)
        );
        assert_eq!(
            register_named(&mut catalog, ""),
            Err(RegistryError::InvalidName)
        );
    }

    #[test]
    fn performer_and_category_stop_at_32_bytes() {
        let mut catalog = TrackCatalog::new();

        let ok = catalog.register_track(
            &ctx(ALICE),
            "Name",
            &"p".repeat(32),
            120,
            &"c".repeat(32),
            vec!["tag".to_string()],
        );
        assert!(ok.is_ok());

        let err = catalog.register_track(
            &ctx(ALICE),
            "Name",
            &"p".repeat(33),
            120,
            "Pop",
            vec!["tag".to_string()],
        );
        assert_eq!(err, Err(RegistryError::InvalidPerformer));

        let err = catalog.register_track(
            &ctx(ALICE),
            "Name",
            "Performer",
            120,
            &"c".repeat(33),
            vec!["tag".to_string()],
        );
        assert_eq!(err, Err(RegistryError::InvalidCategory));
    }

    #[test]
    fn length_bounds_are_exclusive_on_both_sides() {
        let mut catalog = TrackCatalog::new();

        assert!(register_with_length(&mut catalog, 1).is_ok());
        assert!(register_with_length(&mut catalog, 9999).is_ok());
        assert_eq!(
            register_with_length(&mut catalog, 0),
            Err(RegistryError::InvalidLength)
        );
        assert_eq!(
            register_with_length(&mut catalog, 10_000),
            Err(RegistryError::InvalidLength)
        );
    }

    #[test]
    fn label_set_bounds() {
        let mut catalog = TrackCatalog::new();

        let eight = vec!["l".repeat(24); 8];
        assert!(register_with_labels(&mut catalog, eight).is_ok());

        let nine = vec!["l".to_string(); 9];
        assert_eq!(
            register_with_labels(&mut catalog, nine),
            Err(RegistryError::InvalidLabels)
        );

        assert_eq!(
            register_with_labels(&mut catalog, vec![]),
            Err(RegistryError::InvalidLabels)
        );

        // A single empty label poisons an otherwise valid set.
        let mut mixed = vec!["ok".to_string(); 7];
        mixed.push(String::new());
        assert_eq!(
            register_with_labels(&mut catalog, mixed),
            Err(RegistryError::InvalidLabels)
        );

        let oversized = vec!["l".repeat(25)];
        assert_eq!(
            register_with_labels(&mut catalog, oversized),
            Err(RegistryError::InvalidLabels)
        );
    }

    #[test]
    fn failed_registration_allocates_no_identifier() {
        let mut catalog = TrackCatalog::new();

        assert!(register_with_length(&mut catalog, 0).is_err());
        assert_eq!(catalog.get_catalog_size(), 0);

        // The next successful registration still gets id 1.
        let id = register_ok(&mut catalog, ALICE);
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn modification_enforces_the_same_bounds() {
        let mut catalog = TrackCatalog::new();
        let id = register_ok(&mut catalog, ALICE);

        let err = catalog.modify_track_info(
            &ctx(ALICE),
            id,
            &"n".repeat(65),
            120,
            "Pop",
            vec!["tag".to_string()],
        );
        assert_eq!(err, Err(RegistryError::InvalidName));

        let err = catalog.modify_track_info(
            &ctx(ALICE),
            id,
            "Name",
            10_000,
            "Pop",
            vec!["tag".to_string()],
        );
        assert_eq!(err, Err(RegistryError::InvalidLength));

        let err =
            catalog.modify_track_info(&ctx(ALICE), id, "Name", 120, "Pop", vec![String::new()]);
        assert_eq!(err, Err(RegistryError::InvalidLabels));

        // The record is untouched after every rejected modification.
        let record = catalog.get_track_info(id).unwrap();
        assert_eq!(record.name, "Giant Steps");
        assert_eq!(record.length, 287);
    }
}
