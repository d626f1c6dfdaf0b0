use crate::{
    AppError,
    store::{KeyValueStore, MemoryStore, ShootDayId, ShootDayRepository, StoreKey},
    tests::busy_snapshot,
};

use clapper_log_core::{RecordingState, SceneId, ShootDaySnapshot};

pub(crate) fn repository(store: &MemoryStore, multi_day: bool) -> ShootDayRepository {
    ShootDayRepository::new(Box::new(store.clone()), "local", multi_day)
}

#[allow(clippy::unwrap_used)]
fn day(raw: &str) -> ShootDayId {
    ShootDayId::parse(raw).unwrap()
}

/// WHAT: A saved day loads back identical, live take included
/// WHY: Restarting mid-take must restore the exact timer instants
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_day_when_loaded_then_snapshot_identical() {
    // Given: A day with one record and a paused take
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    let snapshot = busy_snapshot();

    // When: Saved and loaded
    repo.save(&day("2026-10-14"), &snapshot).unwrap();
    let loaded = repo.load(&day("2026-10-14")).unwrap();

    // Then: Same snapshot, stored field by field under the day scope
    assert_eq!(loaded, snapshot);
    assert_eq!(
        loaded.current.as_ref().map(|s| s.state()),
        Some(RecordingState::Paused)
    );
    let keys = store.raw_keys();
    assert!(keys.contains(&"day/local/2026-10-14/scenes".to_string()));
    assert!(keys.contains(&"day/local/2026-10-14/current_record".to_string()));
    assert!(keys.contains(&"day/local/2026-10-14/records".to_string()));
}

/// WHAT: Saving a day is one store commit
/// WHY: A crash between field writes would leave a torn day
#[test]
#[allow(clippy::unwrap_used)]
fn given_snapshot_when_saved_then_single_commit() {
    // Given
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);

    // When
    repo.save(&day("d1"), &busy_snapshot()).unwrap();

    // Then
    assert_eq!(store.commits(), 1);
}

/// WHAT: A day never saved loads as empty
/// WHY: Switching to a new day id starts a clean sheet
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_day_when_loaded_then_default_snapshot() {
    // Given
    let store = MemoryStore::new();
    let repo = repository(&store, true);

    // When
    let loaded = repo.load(&day("never")).unwrap();

    // Then
    assert_eq!(loaded, ShootDaySnapshot::default());
}

/// WHAT: Cleared optional fields are removed from the store
/// WHY: A stale `current_record` would resurrect a finished take on reload
#[test]
#[allow(clippy::unwrap_used)]
fn given_take_finished_when_saved_again_then_current_record_key_removed() {
    // Given: Saved mid-take
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    let mut snapshot = busy_snapshot();
    repo.save(&day("d1"), &snapshot).unwrap();

    // When: Saved again with no live take or selection
    snapshot.current = None;
    snapshot.selected_scene = None;
    repo.save(&day("d1"), &snapshot).unwrap();

    // Then: Those keys are gone and the load matches
    let keys = store.raw_keys();
    assert!(!keys.contains(&"day/local/d1/current_record".to_string()));
    assert!(!keys.contains(&"day/local/d1/selected_scene".to_string()));
    assert_eq!(repo.load(&day("d1")).unwrap(), snapshot);
}

/// WHAT: Saving an empty snapshot removes every key of the day
/// WHY: A reset day must not linger in storage or in the day listing
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_day_when_saved_empty_then_no_keys_left_and_not_listed() {
    // Given: A day with scenes, records and a live take
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    repo.save(&day("2026-10-14"), &busy_snapshot()).unwrap();

    // When
    repo.save(&day("2026-10-14"), &ShootDaySnapshot::default()).unwrap();

    // Then: Nothing stored, still loads as an empty day
    assert!(
        store
            .raw_keys()
            .iter()
            .all(|k| !k.starts_with("day/local/2026-10-14/"))
    );
    assert!(repo.list_days().unwrap().is_empty());
    assert_eq!(
        repo.load(&day("2026-10-14")).unwrap(),
        ShootDaySnapshot::default()
    );
}

/// WHAT: Days are listed once each, sorted, for this user only
/// WHY: The day picker must not show other users' days or duplicates per field
#[test]
#[allow(clippy::unwrap_used)]
fn given_days_of_two_users_when_listed_then_only_own_days_sorted() {
    // Given: Two days for "local", one for "other"
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    repo.save(&day("2026-10-15"), &busy_snapshot()).unwrap();
    repo.save(&day("2026-10-14"), &busy_snapshot()).unwrap();
    let mut other = ShootDayRepository::new(Box::new(store.clone()), "other", true);
    other.save(&day("2026-01-01"), &busy_snapshot()).unwrap();

    // When
    let days = repo.list_days().unwrap();

    // Then
    assert_eq!(days, vec![day("2026-10-14"), day("2026-10-15")]);
}

/// WHAT: Renaming moves every key and removes the old ones
/// WHY: A rename that copied without deleting would list the day twice
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_active_day_when_renamed_then_keys_migrated_and_active_updated() {
    // Given: An active day with data
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    let snapshot = busy_snapshot();
    repo.save(&day("2026-10-14"), &snapshot).unwrap();
    repo.set_active_day(&day("2026-10-14")).unwrap();

    // When
    repo.rename_day(&day("2026-10-14"), &day("pickup")).unwrap();

    // Then: Data under the new id only, active day follows
    assert_eq!(repo.load(&day("pickup")).unwrap(), snapshot);
    assert_eq!(
        repo.load(&day("2026-10-14")).unwrap(),
        ShootDaySnapshot::default()
    );
    assert!(
        store
            .raw_keys()
            .iter()
            .all(|k| !k.starts_with("day/local/2026-10-14/"))
    );
    assert_eq!(repo.list_days().unwrap(), vec![day("pickup")]);
    assert_eq!(repo.active_day().unwrap(), Some(day("pickup")));
}

/// WHAT: Renaming onto an existing day fails and changes nothing
/// WHY: Silently merging two days would mix their records
#[test]
#[allow(clippy::unwrap_used)]
fn given_target_day_exists_when_renaming_then_error_and_store_untouched() {
    // Given: Two saved days
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    repo.save(&day("a"), &busy_snapshot()).unwrap();
    repo.save(&day("b"), &busy_snapshot()).unwrap();
    let before = store.raw_keys();

    // When
    let result = repo.rename_day(&day("a"), &day("b"));

    // Then
    assert!(matches!(result, Err(AppError::StoreError { .. })));
    assert_eq!(store.raw_keys(), before);
}

/// WHAT: Single-day mode keeps one global set of fields
/// WHY: Devices configured without shoot days share one sheet regardless of date
#[test]
#[allow(clippy::unwrap_used)]
fn given_single_day_mode_when_saving_then_global_keys_and_no_day_listing() {
    // Given
    let store = MemoryStore::new();
    let mut repo = repository(&store, false);
    let snapshot = busy_snapshot();

    // When: Saved under one id, loaded under another
    repo.save(&day("2026-10-14"), &snapshot).unwrap();
    let loaded = repo.load(&day("2026-10-15")).unwrap();

    // Then: Same data, global keys, no days, no rename
    assert_eq!(loaded, snapshot);
    assert!(store.raw_keys().iter().all(|k| k.starts_with("global/")));
    assert!(repo.list_days().unwrap().is_empty());
    assert!(repo.rename_day(&day("2026-10-14"), &day("x")).is_err());
}

/// WHAT: A failing store surfaces the error from save
/// WHY: The autosave task logs it and relies on the next snapshot
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_store_when_saving_then_error_and_nothing_written() {
    // Given
    let store = MemoryStore::new();
    let mut repo = repository(&store, true);
    store.set_failing(true);

    // When
    let result = repo.save(&day("d1"), &busy_snapshot());

    // Then
    assert!(matches!(result, Err(AppError::StoreError { .. })));
    assert!(store.raw_keys().is_empty());
}

/// WHAT: A stored selection decodes to the same scene id
/// WHY: Scene ids are stored as plain JSON strings
#[test]
#[allow(clippy::unwrap_used)]
fn given_selected_scene_when_saved_then_stored_as_json_string() {
    // Given
    let store = MemoryStore::new();
    let mut repo = repository(&store, false);
    let snapshot = ShootDaySnapshot {
        selected_scene: Some(SceneId::new("s07")),
        ..ShootDaySnapshot::default()
    };

    // When
    repo.save(&day("d1"), &snapshot).unwrap();

    // Then
    assert_eq!(
        store
            .get(&StoreKey::global("selected_scene"))
            .unwrap()
            .as_deref(),
        Some("\"s07\"")
    );
}
