//! Reading the widget configuration out of the page.
//!
//! The page may embed a JSON document:
//!
//! ```html
//! <script type="application/json" id="sleepy-config">{ "refresh_interval_ms": 3000 }</script>
//! ```
//!
//! and override single values on `<body>` (`data-status-endpoint`,
//! `data-refresh-ms`). Without either the stock defaults apply.

use sleepy_app::config::WidgetConfig;
use web_sys::Document;

/// `id` of the embedded configuration document.
pub const CONFIG_ELEMENT_ID: &str = "sleepy-config";

/// Build the configuration for `document`.
///
/// A malformed or invalid document is logged and replaced by the defaults;
/// overrides are applied either way.
pub fn load(document: &Document) -> WidgetConfig {
    let mut config = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
        .map_or_else(WidgetConfig::default, |text| {
            WidgetConfig::from_json(&text).unwrap_or_else(|err| {
                leptos::logging::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                WidgetConfig::default()
            })
        });

    if let Some(body) = document.body() {
        let dataset = body.dataset();
        config.apply_overrides(|key| dataset.get(key));
    }

    if let Err(err) = config.validate() {
        leptos::logging::warn!("falling back to default widget config: {err}");
        return WidgetConfig::default();
    }
    config
}
