use crate::config::default_user_id;

use serde::{Deserialize, Serialize};

/// Identity the shoot days are stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Opaque id of the signed-in user.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}
