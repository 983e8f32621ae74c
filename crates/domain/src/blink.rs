//! Indicator blink: glow levels and the running/stopped state machine.
//!
//! The dot "breathes" by alternating between two fixed glows. The state
//! machine has two states and one input (the cancel key):
//!
//! ```text
//!            toggle
//!   Running --------> Stopped
//!      ^                 |
//!      +-----------------+
//!            toggle
//! ```
//!
//! Initial state is `Running` when the page has an indicator dot.

use serde::{Deserialize, Serialize};

/// Glow intensity of the indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glow {
    /// Steady glow; also what the dot shows while the blink is stopped.
    Bright,
    Dim,
}

impl Glow {
    /// CSS `box-shadow` value for this level.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Bright => "0 0 10px rgba(46, 204, 113, 0.7)",
            Self::Dim => "0 0 5px rgba(46, 204, 113, 0.5)",
        }
    }

    /// The other level.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Bright => Self::Dim,
            Self::Dim => Self::Bright,
        }
    }
}

/// Alternating glow sequence, starting from a bright dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowCycle {
    current: Glow,
}

impl Default for GlowCycle {
    fn default() -> Self {
        Self {
            current: Glow::Bright,
        }
    }
}

impl GlowCycle {
    /// Advance one tick and return the glow to paint. The first tick dims.
    pub fn advance(&mut self) -> Glow {
        self.current = self.current.flipped();
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Glow {
        self.current
    }
}

/// Whether the blink timer is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlinkState {
    Running,
    Stopped,
}

impl BlinkState {
    /// State reached after the cancel key is pressed.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Stopped,
            Self::Stopped => Self::Running,
        }
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

impl std::fmt::Display for BlinkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Stopped => f.write_str("stopped"),
        }
    }
}
