//! Status snapshot: the JSON object returned by the status endpoint.
//!
//! A snapshot is transient: it is decoded, rendered once, and dropped. No
//! field is validated. Only a body that is not JSON at all fails to decode;
//! missing, `null` or oddly typed fields fall back so the page still shows
//! something.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::StatusError;
use crate::liveness::Liveness;
use crate::time::{self, ReportedAt};

/// One reading of the watched devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Label of the primary device (the desktop's foreground window).
    #[serde(rename = "pc", default, deserialize_with = "label")]
    pub primary_device: String,
    /// Label of the secondary device (the phone's foreground app).
    #[serde(rename = "mobile", default, deserialize_with = "label")]
    pub secondary_device: String,
    /// `true` only when the backend sent literal `true`.
    #[serde(rename = "si", default, deserialize_with = "strictly_true")]
    pub asleep: bool,
    /// Process name behind the primary device label, when reported.
    #[serde(
        rename = "pc_process",
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_process: Option<String>,
    /// When the backend produced this reading.
    #[serde(
        rename = "timestamp",
        default,
        deserialize_with = "time::deserialize_lenient",
        skip_serializing
    )]
    pub reported_at: Option<ReportedAt>,
    /// Backend health marker, `"ok"` in practice.
    #[serde(
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
}

impl StatusSnapshot {
    /// Build a snapshot from the three rendered fields.
    #[must_use]
    pub fn new(
        primary_device: impl Into<String>,
        secondary_device: impl Into<String>,
        asleep: bool,
    ) -> Self {
        Self {
            primary_device: primary_device.into(),
            secondary_device: secondary_device.into(),
            asleep,
            ..Self::default()
        }
    }

    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Parse`] when `body` is not JSON. Any JSON
    /// value decodes; one that is not an object yields the default snapshot.
    pub fn from_json(body: &str) -> Result<Self, StatusError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Liveness selected by the `asleep` flag.
    #[must_use]
    pub fn liveness(&self) -> Liveness {
        Liveness::from(self.asleep)
    }
}

/// Text as the page would show it: strings verbatim, other scalars in their
/// JSON spelling, `null` as empty.
fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

fn strictly_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}
