mod change_listener;
#[allow(clippy::module_inception)]
mod shoot_day;
mod shoot_day_options;
mod snapshot;

pub use {
    change_listener::ChangeListener, shoot_day::ShootDay, shoot_day_options::ShootDayOptions,
    snapshot::ShootDaySnapshot,
};
