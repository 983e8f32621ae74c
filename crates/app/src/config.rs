//! Widget configuration: JSON document with per-page overrides.
//!
//! Every field has a default matching the stock status page, so the document
//! is optional. Overrides (in the browser: `data-*` attributes on `<body>`)
//! take precedence over document values.

use std::time::Duration;

use serde::Deserialize;

/// Default status endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5203";

/// Override key for [`WidgetConfig::endpoint`] (`data-status-endpoint`).
pub const ENDPOINT_OVERRIDE: &str = "statusEndpoint";

/// Override key for [`WidgetConfig::refresh_interval_ms`] (`data-refresh-ms`).
/// `0` disables periodic refresh.
pub const REFRESH_OVERRIDE: &str = "refreshMs";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// URL the status snapshot is fetched from.
    pub endpoint: String,
    /// Reload the status on this period; `None` loads once.
    pub refresh_interval_ms: Option<u32>,
    /// Period of the indicator blink.
    pub blink_period_ms: u32,
    /// How long press feedback stays on a box.
    pub press_feedback_ms: u32,
    /// Status label texts.
    pub labels: Labels,
    /// The designated link box.
    pub link: LinkConfig,
}

/// Texts written into the status label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub alive: String,
    pub asleep: String,
}

/// The single box that navigates away from the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// `id` of the box element.
    pub element_id: String,
    /// Where activation navigates to.
    pub url: String,
    /// Accessible name announced for the box.
    pub aria_label: String,
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides found through `lookup`, keyed by [`ENDPOINT_OVERRIDE`]
    /// and [`REFRESH_OVERRIDE`]. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(ENDPOINT_OVERRIDE) {
            let val = val.trim();
            if !val.is_empty() {
                self.endpoint = val.to_string();
            }
        }
        if let Some(val) = lookup(REFRESH_OVERRIDE) {
            if let Ok(ms) = val.trim().parse::<u32>() {
                self.refresh_interval_ms = (ms > 0).then_some(ms);
            }
        }
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an empty endpoint or a zero period.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation("endpoint must not be empty".to_string()));
        }
        if self.blink_period_ms == 0 {
            return Err(ConfigError::Validation(
                "blink period must be non-zero".to_string(),
            ));
        }
        if self.refresh_interval_ms == Some(0) {
            return Err(ConfigError::Validation(
                "refresh interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }

    #[must_use]
    pub fn blink_period(&self) -> Duration {
        Duration::from_millis(u64::from(self.blink_period_ms))
    }

    #[must_use]
    pub fn press_feedback(&self) -> Duration {
        Duration::from_millis(u64::from(self.press_feedback_ms))
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh_interval_ms: None,
            blink_period_ms: 2000,
            press_feedback_ms: 200,
            labels: Labels::default(),
            link: LinkConfig::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            alive: "活着".to_string(),
            asleep: "似了".to_string(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            element_id: "box4".to_string(),
            url: "https://github.com/wunanc/Web_Myself".to_string(),
            aria_label: "跳转到GitHub仓库页面".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse widget config")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid widget config: {0}")]
    Validation(String),
}
