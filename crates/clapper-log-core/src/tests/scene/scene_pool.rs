use crate::{ImportedScene, SceneId, ScenePool, ShootError, THUMBNAIL};

fn ids(pool: &ScenePool) -> Vec<&str> {
    pool.scenes().iter().map(SceneId::as_str).collect()
}

/// WHAT: A range on an empty pool yields s01..sNN in order
/// WHY: Crews bulk-create the day's numbered scenes in one step
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_pool_when_adding_range_ten_then_s01_to_s10() {
    // Given: An empty pool
    let mut pool = ScenePool::new();

    // When: Adding a range ending at 10
    pool.add_range(10).unwrap();

    // Then: Exactly ten sequential ids in ascending order
    assert_eq!(
        ids(&pool),
        vec!["s01", "s02", "s03", "s04", "s05", "s06", "s07", "s08", "s09", "s10"]
    );
}

/// WHAT: Range bounds outside 1..=99 are rejected without mutation
/// WHY: Prevents generating s00 or three-digit codes
#[test]
#[allow(clippy::unwrap_used)]
fn given_out_of_range_bound_when_adding_range_then_pool_unchanged() {
    // Given: A pool with one scene
    let mut pool = ScenePool::new();
    pool.add_custom("insert").unwrap();
    let before = pool.clone();

    // When: Adding ranges ending at 0 and 100
    let zero = pool.add_range(0);
    let hundred = pool.add_range(100);

    // Then: Both are validation errors and the pool is untouched
    assert!(matches!(zero, Err(ShootError::Validation { .. })));
    assert!(matches!(hundred, Err(ShootError::Validation { .. })));
    assert_eq!(pool, before);
}

/// WHAT: Ranges append even when sequential ids already exist
/// WHY: Re-shoots need a second s01 slot
#[test]
#[allow(clippy::unwrap_used)]
fn given_existing_range_when_adding_again_then_duplicates_appended() {
    // Given: A pool with s01..s02
    let mut pool = ScenePool::new();
    pool.add_range(2).unwrap();

    // When: Adding s01..s03
    pool.add_range(3).unwrap();

    // Then: Both batches are present in insertion order
    assert_eq!(ids(&pool), vec!["s01", "s02", "s01", "s02", "s03"]);
}

/// WHAT: Custom names are trimmed and blank names rejected
/// WHY: Whitespace-only entries would be unselectable ghosts
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_names_when_adding_then_trimmed_or_rejected() {
    // Given: An empty pool
    let mut pool = ScenePool::new();

    // When: Adding a padded name and a blank one
    pool.add_custom("  pickup shot  ").unwrap();
    let blank = pool.add_custom("   ");

    // Then: Only the trimmed name is present
    assert!(matches!(blank, Err(ShootError::Validation { .. })));
    assert_eq!(ids(&pool), vec!["pickup shot"]);
}

/// WHAT: Thumbnail toggles between exactly one and zero entries
/// WHY: The special scene must never be duplicated
#[test]
fn given_thumbnail_when_toggling_twice_then_added_then_removed() {
    // Given: An empty pool
    let mut pool = ScenePool::new();

    // When: Toggling on
    let on = pool.toggle_thumbnail();

    // Then: One thumbnail entry
    assert!(on);
    assert_eq!(ids(&pool), vec![THUMBNAIL]);

    // When: Toggling off
    let off = pool.toggle_thumbnail();

    // Then: Gone
    assert!(!off);
    assert!(pool.is_empty());
}

/// WHAT: A custom scene spelled like the thumbnail is rejected
/// WHY: The thumbnail appears at most once and only through its toggle
#[test]
fn given_thumbnail_present_when_adding_custom_thumbnail_then_rejected() {
    // Given: The thumbnail toggled on
    let mut pool = ScenePool::new();
    pool.toggle_thumbnail();

    // When: Typing the same name by hand, padded
    let result = pool.add_custom("  thumbnail ");

    // Then: Rejected, still a single thumbnail
    assert!(matches!(result, Err(ShootError::Validation { .. })));
    assert_eq!(ids(&pool), vec![THUMBNAIL]);
}

/// WHAT: A custom scene ending with the monologue marker is rejected
/// WHY: While monologue is on the pool holds exactly one monologue entry
#[test]
fn given_monologue_on_when_adding_custom_monologue_then_single_entry_kept() {
    // Given: Monologue on for Akira
    let mut pool = ScenePool::new();
    pool.toggle_monologue(Some("Akira"));

    // When: Adding another person's monologue by hand
    let result = pool.add_custom("Yoko - monologue");

    // Then: Rejected, only the toggled entry remains
    assert!(matches!(result, Err(ShootError::Validation { .. })));
    assert_eq!(ids(&pool), vec!["Akira - monologue"]);
    assert!(pool.is_monologue_on());
}

/// WHAT: Monologue with a name produces a suffixed id
/// WHY: The person's name identifies which monologue is being shot
#[test]
fn given_person_name_when_toggling_monologue_then_named_entry() {
    // Given: An empty pool
    let mut pool = ScenePool::new();

    // When: Toggling on with a padded name
    let on = pool.toggle_monologue(Some("  Akira "));

    // Then: One named monologue entry
    assert!(on);
    assert!(pool.is_monologue_on());
    assert_eq!(ids(&pool), vec!["Akira - monologue"]);
}

/// WHAT: Monologue without a name uses the bare marker
/// WHY: The name is optional
#[test]
fn given_no_name_when_toggling_monologue_then_bare_marker() {
    // Given: An empty pool
    let mut pool = ScenePool::new();

    // When: Toggling with a blank name
    pool.toggle_monologue(Some("  "));

    // Then: Bare marker
    assert_eq!(ids(&pool), vec!["monologue"]);
}

/// WHAT: Editing the name while on keeps exactly one monologue entry
/// WHY: Live edits must not leave stale or duplicate monologue slots
#[test]
#[allow(clippy::unwrap_used)]
fn given_monologue_on_when_renaming_repeatedly_then_exactly_one_entry() {
    // Given: A pool with scenes and a monologue switched on
    let mut pool = ScenePool::new();
    pool.add_range(2).unwrap();
    pool.toggle_monologue(None);

    for name in ["A", "Ak", "Aki", ""] {
        // When: The name is edited
        pool.rename_monologue(Some(name)).unwrap();

        // Then: Exactly one monologue entry, flag still on
        let monologues = pool.scenes().iter().filter(|s| s.is_monologue()).count();
        assert_eq!(monologues, 1, "after renaming to {name:?}");
        assert!(pool.is_monologue_on());
    }

    assert_eq!(ids(&pool), vec!["s01", "s02", "monologue"]);
}

/// WHAT: Renaming while off is an invalid transition
/// WHY: There is no live entry to update
#[test]
fn given_monologue_off_when_renaming_then_invalid_transition() {
    // Given: An empty pool
    let mut pool = ScenePool::new();

    // When: Renaming
    let result = pool.rename_monologue(Some("Akira"));

    // Then: Rejected, nothing added
    assert!(matches!(result, Err(ShootError::InvalidTransition { .. })));
    assert!(pool.is_empty());
}

/// WHAT: Toggling off removes all monologue-suffixed entries
/// WHY: A pool stored before hand-typed monologues were rejected may still hold extras
#[test]
#[allow(clippy::unwrap_used)]
fn given_stored_pool_with_extra_monologue_when_toggling_off_then_all_removed() {
    // Given: A named monologue plus a hand-typed one, as stored
    let mut pool: ScenePool = serde_json::from_str(
        r#"{"scenes":["Akira - monologue","Yoko - monologue","s05"],"monologue_on":true}"#,
    )
    .unwrap();

    // When: Toggling off
    let on = pool.toggle_monologue(None);

    // Then: Only the non-monologue scene remains
    assert!(!on);
    assert_eq!(ids(&pool), vec!["s05"]);
}

/// WHAT: Toggling on clears stray monologue entries first
/// WHY: A stored pool with a leftover entry must still end up with exactly one
#[test]
#[allow(clippy::unwrap_used)]
fn given_stored_stray_monologue_when_toggling_on_then_single_entry() {
    // Given: A stored pool with a marker entry but the flag off
    let mut pool: ScenePool = serde_json::from_str(r#"{"scenes":["Yoko - monologue"]}"#).unwrap();

    // When: Toggling on
    pool.toggle_monologue(Some("Akira"));

    // Then: Only the new entry
    assert_eq!(ids(&pool), vec!["Akira - monologue"]);
}

/// WHAT: Consume removes only the first exact match
/// WHY: Duplicated slots are shot one at a time
#[test]
#[allow(clippy::unwrap_used)]
fn given_duplicates_when_consuming_then_first_match_removed() {
    // Given: s01, s02, s01
    let mut pool = ScenePool::new();
    pool.add_range(2).unwrap();
    pool.add_custom("s01").unwrap();

    // When: Consuming s01 and then an absent scene
    let found = pool.consume(&SceneId::sequential(1));
    let missing = pool.consume(&SceneId::new("s42"));

    // Then: One s01 left at the end; absent scene is a no-op
    assert!(found);
    assert!(!missing);
    assert_eq!(ids(&pool), vec!["s02", "s01"]);
}

/// WHAT: Consuming the monologue switches the flag off
/// WHY: Once shot, the operator can add a new monologue without a double toggle
#[test]
fn given_monologue_on_when_consumed_then_flag_off() {
    // Given: Monologue on
    let mut pool = ScenePool::new();
    pool.toggle_monologue(Some("Akira"));

    // When: Its entry is consumed
    pool.consume(&SceneId::monologue(Some("Akira")));

    // Then: Flag off, next toggle adds again
    assert!(!pool.is_monologue_on());
    assert!(pool.toggle_monologue(None));
}

/// WHAT: Imported batches append display ids in order
/// WHY: Schedules arrive in shooting order
#[test]
#[allow(clippy::unwrap_used)]
fn given_import_batch_when_adding_then_code_and_title_appended() {
    // Given: A two-entry batch
    let mut pool = ScenePool::new();
    let batch = vec![
        ImportedScene {
            code: "s03".to_string(),
            title: "Kitchen".to_string(),
        },
        ImportedScene {
            code: "s04".to_string(),
            title: "Roof".to_string(),
        },
    ];

    // When: Adding it and then an empty batch
    pool.add_imported(&batch).unwrap();
    let empty = pool.add_imported(&[]);

    // Then: Both entries present; empty batch rejected
    assert_eq!(ids(&pool), vec!["s03 Kitchen", "s04 Roof"]);
    assert!(matches!(empty, Err(ShootError::Validation { .. })));
}

/// WHAT: A batch containing a special-looking title is rejected whole
/// WHY: An imported "monologue" title would otherwise be deleted by the next toggle
#[test]
#[allow(clippy::unwrap_used)]
fn given_import_with_special_title_when_adding_then_batch_rejected_and_pool_untouched() {
    // Given: A pool with one scene and a batch whose second title ends with the marker
    let mut pool = ScenePool::new();
    pool.add_range(1).unwrap();
    let batch = vec![
        ImportedScene {
            code: "s02".to_string(),
            title: "Kitchen".to_string(),
        },
        ImportedScene {
            code: "s03".to_string(),
            title: "The monologue".to_string(),
        },
    ];

    // When
    let result = pool.add_imported(&batch);

    // Then: Nothing from the batch was appended
    assert!(matches!(result, Err(ShootError::Validation { .. })));
    assert_eq!(ids(&pool), vec!["s01"]);
    assert!(!pool.is_monologue_on());
}
