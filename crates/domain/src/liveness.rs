//! Liveness: whether the watched person is alive (some device active) or asleep.

use serde::{Deserialize, Serialize};

use crate::blink::Glow;

/// Color painted on the device labels whenever they are written.
pub const DEVICE_LABEL_COLOR: &str = "#4ef34eff";

/// The two states the status indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Alive,
    Asleep,
}

/// Colors applied to the status label and the indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// CSS color of the status label.
    pub text_color: &'static str,
    /// CSS background of the indicator dot.
    pub dot_color: &'static str,
    /// CSS `box-shadow` of the indicator dot.
    pub dot_glow: &'static str,
}

const ALIVE: Appearance = Appearance {
    text_color: "#78ff67d0",
    dot_color: "#2ecc71",
    dot_glow: Glow::Bright.css(),
};

const ASLEEP: Appearance = Appearance {
    text_color: "#e74c3c",
    dot_color: "#e74c3c",
    dot_glow: "0 0 10px rgba(231, 76, 60, 0.7)",
};

impl Liveness {
    /// Appearance painted for this state.
    #[must_use]
    pub const fn appearance(self) -> Appearance {
        match self {
            Self::Alive => ALIVE,
            Self::Asleep => ASLEEP,
        }
    }

    #[must_use]
    pub fn is_asleep(self) -> bool {
        matches!(self, Self::Asleep)
    }
}

impl From<bool> for Liveness {
    /// `asleep == true` maps to [`Liveness::Asleep`], anything else is alive.
    fn from(asleep: bool) -> Self {
        if asleep { Self::Asleep } else { Self::Alive }
    }
}

impl std::fmt::Display for Liveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alive => f.write_str("alive"),
            Self::Asleep => f.write_str("asleep"),
        }
    }
}
