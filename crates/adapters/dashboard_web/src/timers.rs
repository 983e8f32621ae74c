//! `gloo-timers` implementation of the scheduler port.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use sleepy_app::ports::Scheduler;

/// Browser timers (`setInterval` / `setTimeout`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for GlooScheduler {
    /// `Interval` clears itself when dropped.
    type Handle = Interval;

    fn every<F>(&self, period: Duration, tick: F) -> Interval
    where
        F: FnMut() + 'static,
    {
        Interval::new(millis(period), tick)
    }

    fn after<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(millis(delay), task).forget();
    }
}
