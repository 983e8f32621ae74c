//! Indicator blinker: owns the repeating timer that makes the dot breathe.
//!
//! The timer handle is private to the blinker; the only way to start or stop
//! the alternation is through [`Blinker::start`], [`Blinker::stop`] and
//! [`Blinker::toggle`]. A page without an indicator dot never runs a timer.

use std::time::Duration;

use sleepy_domain::blink::{BlinkState, Glow, GlowCycle};

use crate::ports::{Element, Scheduler};

/// Drives the glow of the indicator dot.
pub struct Blinker<S: Scheduler, E> {
    scheduler: S,
    dot: Option<E>,
    period: Duration,
    timer: Option<S::Handle>,
}

impl<S, E> Blinker<S, E>
where
    S: Scheduler,
    E: Element + 'static,
{
    /// Create a stopped blinker for `dot` (if the page has one).
    pub fn new(scheduler: S, dot: Option<E>, period: Duration) -> Self {
        Self {
            scheduler,
            dot,
            period,
            timer: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> BlinkState {
        if self.timer.is_some() {
            BlinkState::Running
        } else {
            BlinkState::Stopped
        }
    }

    /// Whether the page has a dot to blink.
    #[must_use]
    pub fn has_dot(&self) -> bool {
        self.dot.is_some()
    }

    /// Start alternating the glow. No-op when already running or dot-less.
    pub fn start(&mut self) -> BlinkState {
        if self.timer.is_some() {
            return BlinkState::Running;
        }
        let Some(dot) = self.dot.clone() else {
            tracing::debug!("no indicator dot, blink not started");
            return BlinkState::Stopped;
        };

        let mut cycle = GlowCycle::default();
        self.timer = Some(self.scheduler.every(self.period, move || {
            dot.set_style("box-shadow", cycle.advance().css());
        }));
        tracing::debug!(period = ?self.period, "indicator blink started");
        BlinkState::Running
    }

    /// Cancel the timer and leave the dot on its steady bright glow.
    pub fn stop(&mut self) -> BlinkState {
        if self.timer.take().is_some() {
            if let Some(dot) = &self.dot {
                dot.set_style("box-shadow", Glow::Bright.css());
            }
            tracing::debug!("indicator blink stopped");
        }
        BlinkState::Stopped
    }

    /// React to the cancel key: stop when running, restart when stopped.
    ///
    /// Returns the new state, or `None` when there is no dot to blink.
    pub fn toggle(&mut self) -> Option<BlinkState> {
        if !self.has_dot() {
            tracing::debug!("no indicator dot, cancel key ignored");
            return None;
        }
        Some(match self.state().toggled() {
            BlinkState::Running => self.start(),
            BlinkState::Stopped => self.stop(),
        })
    }
}
