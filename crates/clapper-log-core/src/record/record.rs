use crate::scene::SceneId;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed take. Created only by stopping a recording; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Session id of the take, for log correlation.
    pub session_id: Uuid,
    /// Scene that was shot.
    pub scene: SceneId,
    /// Time-of-day the take started, `HH:MM:SS`.
    pub start_time: String,
    /// Time-of-day the take stopped, `HH:MM:SS`.
    pub end_time: String,
    /// Recording time excluding pauses, `HH:MM:SS`.
    pub duration: String,
    /// Setup time before the take, `HH:MM:SS`, when a setup phase ran.
    #[serde(default)]
    pub setup_duration: Option<String>,
    /// `interrupted` when the take was paused, otherwise empty.
    #[serde(default)]
    pub notes: String,
    /// Completion instant, epoch millis.
    pub timestamp: i64,
}
