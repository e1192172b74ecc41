//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp stamped on every handled notification.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as ISO-8601 with millisecond precision and a `Z`
/// suffix, e.g. `2026-10-19T08:15:30.042Z`.
#[must_use]
pub fn format_iso8601(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter writing a [`Timestamp`] with [`format_iso8601`].
pub mod iso8601 {
    use serde::Serializer;

    use super::{Timestamp, format_iso8601};

    /// Serialize `ts` as an ISO-8601 string.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso8601(ts))
    }
}
