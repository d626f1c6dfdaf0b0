/// Behaviour switches for a shoot day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShootDayOptions {
    /// Whether the setup phase is available and its duration exported.
    pub track_setup: bool,
}

impl Default for ShootDayOptions {
    fn default() -> Self {
        Self { track_setup: true }
    }
}
