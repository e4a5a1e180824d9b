//! Second-precision UTC timestamp wire format.
//!
//! Both `startTime` and per-action `time` fields travel as
//! `YYYY-MM-DDTHH:MM:SSZ` strings. This module is used with
//! `#[serde(with = "timestamp")]` and also exposes [`parse`] / [`format`]
//! for code that handles raw wire strings (decode-time schema checks,
//! console reports).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// strftime pattern for the wire format.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a wire timestamp into a UTC datetime.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, FORMAT).map(|naive| naive.and_utc())
}

/// Format a UTC datetime in the wire format, truncating sub-second precision.
#[must_use]
pub fn format(time: &DateTime<Utc>) -> String {
    time.format(FORMAT).to_string()
}

/// Serde serializer for `#[serde(with = "timestamp")]` fields.
pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(time))
}

/// Serde deserializer for `#[serde(with = "timestamp")]` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
