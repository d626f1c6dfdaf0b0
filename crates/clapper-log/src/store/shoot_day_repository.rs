use crate::{
    AppError, AppResult,
    store::{KeyValueStore, ShootDayId, StoreKey, StoreScope},
};

use std::{collections::BTreeSet, panic::Location};

use clapper_log_core::{ScenePool, ShootDaySnapshot};
use error_location::ErrorLocation;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument};

const FIELD_SCENES: &str = "scenes";
const FIELD_SELECTED_SCENE: &str = "selected_scene";
const FIELD_SETUP: &str = "setup";
const FIELD_CURRENT_RECORD: &str = "current_record";
const FIELD_RECORDS: &str = "records";
const FIELD_ACTIVE_DAY: &str = "active_day";

/// Loads and saves shoot-day snapshots field by field as JSON strings.
///
/// In single-day mode every day id maps onto the global scope.
pub struct ShootDayRepository {
    store: Box<dyn KeyValueStore>,
    user_id: String,
    multi_day: bool,
}

impl ShootDayRepository {
    /// Wrap a store for `user_id`.
    pub fn new(store: Box<dyn KeyValueStore>, user_id: impl Into<String>, multi_day: bool) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            multi_day,
        }
    }

    /// Whether days are stored separately.
    pub fn is_multi_day(&self) -> bool {
        self.multi_day
    }

    /// Read a day; missing fields come back empty.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn load(&self, day: &ShootDayId) -> AppResult<ShootDaySnapshot> {
        let scope = self.scope(day);

        let snapshot = ShootDaySnapshot {
            pool: self.read(&scope, FIELD_SCENES)?.unwrap_or_default(),
            selected_scene: self.read(&scope, FIELD_SELECTED_SCENE)?,
            setup: self.read(&scope, FIELD_SETUP)?,
            current: self.read(&scope, FIELD_CURRENT_RECORD)?,
            records: self.read(&scope, FIELD_RECORDS)?.unwrap_or_default(),
        };

        debug!(
            day = %day,
            scenes = snapshot.pool.len(),
            records = snapshot.records.len(),
            live = snapshot.current.is_some(),
            "Shoot day loaded"
        );

        Ok(snapshot)
    }

    /// Write every field of a day in one commit.
    ///
    /// Absent optionals, an empty pool and an empty log are removed, so an
    /// empty snapshot leaves no keys for the day.
    #[track_caller]
    #[instrument(skip(self, snapshot))]
    pub fn save(&mut self, day: &ShootDayId, snapshot: &ShootDaySnapshot) -> AppResult<()> {
        let scope = self.scope(day);
        let pool = (snapshot.pool != ScenePool::default()).then_some(&snapshot.pool);
        let records = (!snapshot.records.is_empty()).then_some(&snapshot.records);

        let entries = vec![
            entry(&scope, FIELD_SCENES, pool)?,
            entry(&scope, FIELD_SELECTED_SCENE, snapshot.selected_scene.as_ref())?,
            entry(&scope, FIELD_SETUP, snapshot.setup.as_ref())?,
            entry(&scope, FIELD_CURRENT_RECORD, snapshot.current.as_ref())?,
            entry(&scope, FIELD_RECORDS, records)?,
        ];

        self.store.apply(entries)?;
        debug!(day = %day, "Shoot day saved");

        Ok(())
    }

    /// Every day this user has stored data for, sorted.
    #[track_caller]
    pub fn list_days(&self) -> AppResult<Vec<ShootDayId>> {
        if !self.multi_day {
            return Ok(Vec::new());
        }

        let days: BTreeSet<ShootDayId> = self
            .store
            .keys_with_prefix(&StoreScope::days_prefix(&self.user_id))?
            .into_iter()
            .filter_map(|key| key.day().cloned())
            .collect();

        Ok(days.into_iter().collect())
    }

    /// The day that was active when the app last ran.
    #[track_caller]
    pub fn active_day(&self) -> AppResult<Option<ShootDayId>> {
        self.read(&self.user_scope(), FIELD_ACTIVE_DAY)
    }

    /// Remember `day` as the active one.
    #[track_caller]
    pub fn set_active_day(&mut self, day: &ShootDayId) -> AppResult<()> {
        let key = StoreKey::new(self.user_scope(), FIELD_ACTIVE_DAY);
        self.store.set(&key, serde_json::to_string(day)?)
    }

    /// Move every key of `from` under `to` and drop the old keys.
    ///
    /// Fails without touching the store if `to` already has data.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn rename_day(&mut self, from: &ShootDayId, to: &ShootDayId) -> AppResult<()> {
        if !self.multi_day {
            return Err(AppError::StoreError {
                reason: "shoot days cannot be renamed in single-day mode".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if from == to {
            return Ok(());
        }
        if self.list_days()?.contains(to) {
            return Err(AppError::StoreError {
                reason: format!("shoot day '{to}' already exists"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let to_scope = self.scope(to);
        let mut entries = Vec::new();

        for key in self.store.keys_with_prefix(&self.scope(from).prefix())? {
            if let Some(value) = self.store.get(&key)? {
                entries.push((StoreKey::new(to_scope.clone(), key.field.clone()), Some(value)));
            }
            entries.push((key, None));
        }

        if self.active_day()?.as_ref() == Some(from) {
            entries.push((
                StoreKey::new(self.user_scope(), FIELD_ACTIVE_DAY),
                Some(serde_json::to_string(to)?),
            ));
        }

        let migrated = entries.len();
        self.store.apply(entries)?;
        info!(from = %from, to = %to, writes = migrated, "Shoot day renamed");

        Ok(())
    }

    fn scope(&self, day: &ShootDayId) -> StoreScope {
        if self.multi_day {
            StoreScope::Day {
                user: self.user_id.clone(),
                day: day.clone(),
            }
        } else {
            StoreScope::Global
        }
    }

    fn user_scope(&self) -> StoreScope {
        StoreScope::User {
            user: self.user_id.clone(),
        }
    }

    #[track_caller]
    fn read<T: DeserializeOwned>(&self, scope: &StoreScope, field: &str) -> AppResult<Option<T>> {
        let key = StoreKey::new(scope.clone(), field);
        match self.store.get(&key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

#[track_caller]
fn entry<T: Serialize>(
    scope: &StoreScope,
    field: &str,
    value: Option<&T>,
) -> AppResult<(StoreKey, Option<String>)> {
    let key = StoreKey::new(scope.clone(), field);
    let encoded = value.map(serde_json::to_string).transpose()?;
    Ok((key, encoded))
}
