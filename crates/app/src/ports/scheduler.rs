//! Scheduler port: timers on the UI thread.

use std::time::Duration;

/// Runs callbacks later on the same thread.
pub trait Scheduler {
    /// Guard for a repeating timer. Dropping it cancels the timer.
    type Handle;

    /// Call `tick` every `period` until the returned handle is dropped.
    fn every<F>(&self, period: Duration, tick: F) -> Self::Handle
    where
        F: FnMut() + 'static;

    /// Call `task` once after `delay`. Not cancellable.
    fn after<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static;
}
