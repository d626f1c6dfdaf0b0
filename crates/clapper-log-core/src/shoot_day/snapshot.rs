use crate::{
    record::RecordLog,
    scene::{SceneId, ScenePool},
    timer::{RecordingSession, SetupTimer},
};

use serde::{Deserialize, Serialize};

/// Serializable state of one shoot day.
///
/// Contains instants, never elapsed times, so restoring it later recomputes
/// the live timers against the current clock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootDaySnapshot {
    /// Available scenes.
    #[serde(default)]
    pub pool: ScenePool,
    /// Scene picked by the operator.
    #[serde(default)]
    pub selected_scene: Option<SceneId>,
    /// Live setup phase.
    #[serde(default)]
    pub setup: Option<SetupTimer>,
    /// Live take.
    #[serde(default)]
    pub current: Option<RecordingSession>,
    /// Completed takes.
    #[serde(default)]
    pub records: RecordLog,
}
