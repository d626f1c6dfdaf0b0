use crate::store::{ShootDayId, StoreKey, StoreScope};

/// WHAT: Each scope renders to its documented path form
/// WHY: These strings are the on-disk keys; changing them orphans saved days
#[test]
#[allow(clippy::unwrap_used)]
fn given_each_scope_when_rendered_then_matches_path_form() {
    // Given: One key per scope
    let day = ShootDayId::parse("2026-10-14").unwrap();
    let global = StoreKey::global("scenes");
    let user = StoreKey::new(
        StoreScope::User {
            user: "local".to_string(),
        },
        "active_day",
    );
    let scoped = StoreKey::new(
        StoreScope::Day {
            user: "local".to_string(),
            day,
        },
        "records",
    );

    // When / Then: Rendered forms
    assert_eq!(global.to_string(), "global/scenes");
    assert_eq!(user.to_string(), "user/local/active_day");
    assert_eq!(scoped.to_string(), "day/local/2026-10-14/records");
}

/// WHAT: Rendered keys parse back to the same key
/// WHY: Listing days and renaming rely on reading keys back from the store
#[test]
#[allow(clippy::unwrap_used)]
fn given_rendered_keys_when_parsed_then_scope_and_field_recovered() {
    // Given: Rendered keys
    let raw = ["global/scenes", "user/local/active_day", "day/local/pickup/current_record"];

    // When: Parsed
    let parsed: Vec<StoreKey> = raw.iter().map(|r| StoreKey::parse(r).unwrap()).collect();

    // Then: Round trip is exact and the day is exposed
    for (raw, key) in raw.iter().zip(&parsed) {
        assert_eq!(key.to_string(), *raw);
    }
    assert_eq!(parsed[0].day(), None);
    assert_eq!(parsed[2].day(), Some(&ShootDayId::parse("pickup").unwrap()));
    assert_eq!(parsed[2].field, "current_record");
}

/// WHAT: Foreign or truncated keys are not parsed
/// WHY: The store file may hold keys this version does not own
#[test]
fn given_malformed_keys_when_parsed_then_none() {
    // Given / When / Then
    assert!(StoreKey::parse("settings/theme").is_none());
    assert!(StoreKey::parse("day/local").is_none());
    assert!(StoreKey::parse("day/local/pickup").is_none());
    assert!(StoreKey::parse("user/local").is_none());
}

/// WHAT: Scope prefixes end in a separator
/// WHY: `day/loc/` must not match keys of a user called `local`
#[test]
#[allow(clippy::unwrap_used)]
fn given_scopes_when_prefixed_then_prefix_ends_with_separator() {
    // Given
    let day = StoreScope::Day {
        user: "loc".to_string(),
        day: ShootDayId::parse("d1").unwrap(),
    };

    // When / Then
    assert_eq!(day.prefix(), "day/loc/d1/");
    assert_eq!(StoreScope::days_prefix("loc"), "day/loc/");
    assert!(!"day/local/d1/scenes".starts_with(&StoreScope::days_prefix("loc")));
}

/// WHAT: Day ids are trimmed and may not be empty or contain '/'
/// WHY: A slash in a day id would break key parsing
#[test]
#[allow(clippy::unwrap_used)]
fn given_day_ids_when_parsed_then_slashes_and_blanks_rejected() {
    // Given / When / Then
    assert_eq!(ShootDayId::parse("  pickup ").unwrap().to_string(), "pickup");
    assert!(ShootDayId::parse("   ").is_err());
    assert!(ShootDayId::parse("a/b").is_err());
}
