use crate::{
    CoreResult, ShootError,
    scene::{ImportedScene, MAX_SEQUENTIAL_SCENE, SceneId},
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered collection of scenes still available to shoot.
///
/// Insertion order is preserved and duplicates are allowed, except that the
/// thumbnail and monologue specials appear at most once each. Every mutation
/// validates its input first; a rejected call leaves the pool untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenePool {
    scenes: Vec<SceneId>,
    #[serde(default)]
    monologue_on: bool,
}

impl ScenePool {
    /// Empty pool, as at the start of a shoot day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `s01..=s{end_inclusive}` without de-duplicating against
    /// sequential ids already present.
    #[track_caller]
    pub fn add_range(&mut self, end_inclusive: u32) -> CoreResult<()> {
        if !(1..=MAX_SEQUENTIAL_SCENE).contains(&end_inclusive) {
            return Err(ShootError::Validation {
                reason: format!(
                    "range end must be between 1 and {MAX_SEQUENTIAL_SCENE}, got {end_inclusive}"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.scenes
            .extend((1..=end_inclusive).map(SceneId::sequential));
        debug!(end_inclusive, total = self.scenes.len(), "Scene range added");

        Ok(())
    }

    /// Append one custom scene, trimmed.
    ///
    /// Names that read as a special are rejected; specials only enter the
    /// pool through their toggles.
    #[track_caller]
    pub fn add_custom(&mut self, name: &str) -> CoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShootError::Validation {
                reason: "custom scene name is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let scene = SceneId::new(name);
        reject_special(&scene)?;

        self.scenes.push(scene);
        debug!(scene = name, "Custom scene added");

        Ok(())
    }

    /// Append a parsed schedule batch in order.
    ///
    /// The whole batch is rejected if any entry reads as a special.
    #[track_caller]
    pub fn add_imported(&mut self, batch: &[ImportedScene]) -> CoreResult<()> {
        if batch.is_empty() {
            return Err(ShootError::Validation {
                reason: "imported scene list is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let scenes: Vec<SceneId> = batch.iter().map(ImportedScene::scene_id).collect();
        for scene in &scenes {
            reject_special(scene)?;
        }

        self.scenes.extend(scenes);
        debug!(count = batch.len(), "Imported scenes added");

        Ok(())
    }

    /// Add the thumbnail special, or remove it if already present.
    ///
    /// Returns whether the thumbnail is in the pool afterwards.
    pub fn toggle_thumbnail(&mut self) -> bool {
        if self.has_thumbnail() {
            self.scenes.retain(|scene| !scene.is_thumbnail());
            false
        } else {
            self.scenes.push(SceneId::thumbnail());
            true
        }
    }

    /// Turn the monologue special on (with an optional person name) or off.
    ///
    /// Returns whether monologue is on afterwards.
    pub fn toggle_monologue(&mut self, person_name: Option<&str>) -> bool {
        self.remove_monologues();

        if self.monologue_on {
            self.monologue_on = false;
        } else {
            self.scenes.push(SceneId::monologue(person_name));
            self.monologue_on = true;
        }

        self.monologue_on
    }

    /// Replace the live monologue entry after the person name was edited.
    #[track_caller]
    pub fn rename_monologue(&mut self, person_name: Option<&str>) -> CoreResult<()> {
        if !self.monologue_on {
            return Err(ShootError::InvalidTransition {
                action: "rename monologue",
                state: "monologue is not added",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.remove_monologues();
        self.scenes.push(SceneId::monologue(person_name));

        Ok(())
    }

    /// Remove the first exact match of `scene`. Returns whether one was found.
    pub fn consume(&mut self, scene: &SceneId) -> bool {
        let Some(index) = self.scenes.iter().position(|s| s == scene) else {
            return false;
        };

        self.scenes.remove(index);

        if scene.is_monologue() && !self.scenes.iter().any(SceneId::is_monologue) {
            self.monologue_on = false;
        }

        true
    }

    /// Whether `scene` is currently available.
    pub fn contains(&self, scene: &SceneId) -> bool {
        self.scenes.contains(scene)
    }

    /// Available scenes in insertion order.
    pub fn scenes(&self) -> &[SceneId] {
        &self.scenes
    }

    /// Number of available scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// True when no scenes are available.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Whether the thumbnail special is present.
    pub fn has_thumbnail(&self) -> bool {
        self.scenes.iter().any(SceneId::is_thumbnail)
    }

    /// Whether the monologue special is switched on.
    pub fn is_monologue_on(&self) -> bool {
        self.monologue_on
    }

    /// The live monologue entry, if any.
    pub fn monologue_scene(&self) -> Option<&SceneId> {
        self.scenes.iter().find(|scene| scene.is_monologue())
    }

    /// Drop every scene and switch the specials off.
    pub fn clear(&mut self) {
        self.scenes.clear();
        self.monologue_on = false;
    }

    fn remove_monologues(&mut self) {
        self.scenes.retain(|scene| !scene.is_monologue());
    }
}

#[track_caller]
fn reject_special(scene: &SceneId) -> CoreResult<()> {
    if scene.is_thumbnail() || scene.is_monologue() {
        return Err(ShootError::Validation {
            reason: format!("'{scene}' is reserved for the thumbnail and monologue toggles"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
