use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed id of the thumbnail special scene.
pub const THUMBNAIL: &str = "thumbnail";

/// Marker every monologue scene id ends with.
pub const MONOLOGUE_MARKER: &str = "monologue";

/// Display identifier of a scene slot (`s01`, `thumbnail`, a custom name, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Wrap a display string without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Sequential id `sNN`, zero-padded to two digits.
    pub fn sequential(number: u32) -> Self {
        Self(format!("s{number:02}"))
    }

    /// The thumbnail special.
    pub fn thumbnail() -> Self {
        Self(THUMBNAIL.to_string())
    }

    /// Monologue id, prefixed with the person's name when one is given.
    pub fn monologue(person_name: Option<&str>) -> Self {
        match person_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Self(format!("{name} - {MONOLOGUE_MARKER}")),
            None => Self(MONOLOGUE_MARKER.to_string()),
        }
    }

    /// Borrow the display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for an empty or whitespace-only id.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True for the thumbnail special.
    pub fn is_thumbnail(&self) -> bool {
        self.0 == THUMBNAIL
    }

    /// True for any monologue entry, with or without a person name.
    pub fn is_monologue(&self) -> bool {
        self.0.ends_with(MONOLOGUE_MARKER)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
