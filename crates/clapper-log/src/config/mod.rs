mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod export_config;
mod session_config;
mod storage_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, export_config::ExportConfig,
    session_config::SessionConfig, storage_config::StorageConfig,
};

pub(crate) const DEFAULT_TRACK_SETUP: bool = true;
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub(crate) const DEFAULT_DEBOUNCE_MS: u64 = 100;
pub(crate) const DEFAULT_MULTI_DAY: bool = true;
pub(crate) const DEFAULT_FILE_PREFIX: &str = "shoot-log";
pub(crate) const DEFAULT_USER_ID: &str = "local";

pub(crate) fn default_track_setup() -> bool {
    DEFAULT_TRACK_SETUP
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

pub(crate) fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

pub(crate) fn default_multi_day() -> bool {
    DEFAULT_MULTI_DAY
}

pub(crate) fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

pub(crate) fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}
