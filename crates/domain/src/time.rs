//! Time and timestamp helpers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Local wall-clock time at which the backend produced a snapshot.
///
/// The backend formats it without an offset, so it stays naive.
pub type ReportedAt = NaiveDateTime;

/// Format the backend uses for `timestamp` (`2024-05-01 13:37:00`).
pub const REPORTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a backend timestamp, returning `None` when it does not match
/// [`REPORTED_AT_FORMAT`].
#[must_use]
pub fn parse_reported_at(value: &str) -> Option<ReportedAt> {
    NaiveDateTime::parse_from_str(value.trim(), REPORTED_AT_FORMAT).ok()
}

/// Serde helper: decode an optional timestamp, mapping anything that is not
/// a string in [`REPORTED_AT_FORMAT`] to `None` instead of failing the whole
/// document.
///
/// # Errors
///
/// Only fails when the deserializer itself fails.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<ReportedAt>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(raw) => parse_reported_at(&raw),
        _ => None,
    })
}
