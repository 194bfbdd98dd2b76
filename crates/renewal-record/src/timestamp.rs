//! Lazy timestamp parsing
//!
//! Upstream timestamps stay raw strings on the records and are parsed only
//! at the comparison that needs them, so a malformed value in a field no
//! rule touches never fails an evaluation. Two encodings appear in
//! practice, both with an explicit offset: RFC 3339 with a `T` separator
//! (the contract service) and a space-separated form (older account
//! snapshots).

use chrono::{DateTime, FixedOffset, Utc};

/// Space-separated variant, with optional fractional seconds
const SPACE_SEPARATED: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// A timestamp that was present but could not be read as an instant
///
/// This is a contract violation from the upstream data source, not a
/// missing-field situation, and must propagate rather than be coerced to
/// a default.
#[derive(Debug, thiserror::Error)]
#[error("field `{field}` holds an invalid timestamp: {value:?}")]
pub struct TimestampError {
    /// Wire-level name of the field the value was read from
    pub field: &'static str,
    /// The offending raw value
    pub value: String,
    /// Failure from the last encoding attempted
    #[source]
    pub source: chrono::format::ParseError,
}

/// Parse an upstream timestamp, normalized to UTC
///
/// `field` is the wire-level field name, used only for error reporting.
pub fn parse_instant(field: &'static str, value: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::<FixedOffset>::parse_from_str(value, SPACE_SEPARATED))
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| TimestampError {
            field,
            value: value.to_owned(),
            source,
        })
}
