//! Server timestamp handling.
//!
//! The API reports `createdAt` and `updatedAt` as RFC 3339 strings, e.g.
//! `2024-06-15T10:30:45.123Z`. Hydrated objects keep a display-friendly
//! rendering instead of the raw machine format.

use chrono::{DateTime, Utc};

/// Display format for hydrated timestamps (always UTC).
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an RFC 3339 server timestamp, normalizing to UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Reformats a server timestamp for display as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Input that is not an RFC 3339 timestamp comes back unchanged, which also
/// makes this function idempotent on its own output.
#[must_use]
pub fn display_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
