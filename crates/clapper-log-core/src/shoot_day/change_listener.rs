use crate::shoot_day::ShootDaySnapshot;

/// Receives the aggregate's snapshot once per applied transition.
///
/// Rejected operations never notify. The host decides whether to persist
/// synchronously or debounce.
pub trait ChangeListener: Send {
    /// Called after a transition has been fully applied.
    fn on_change(&mut self, snapshot: &ShootDaySnapshot);
}

impl<F> ChangeListener for F
where
    F: FnMut(&ShootDaySnapshot) + Send,
{
    fn on_change(&mut self, snapshot: &ShootDaySnapshot) {
        self(snapshot)
    }
}
