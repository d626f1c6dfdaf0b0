mod scene_id;
mod scene_import;
mod scene_pool;

pub use {
    scene_id::{MONOLOGUE_MARKER, SceneId, THUMBNAIL},
    scene_import::{ImportedScene, parse_scene_list},
    scene_pool::ScenePool,
};

/// Highest sequential scene number a range can generate (`s99`).
pub const MAX_SEQUENTIAL_SCENE: u32 = 99;
