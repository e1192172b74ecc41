//! Notification — a change notification received on the changelog route.
//!
//! The payload is arbitrary JSON; the only invariants are that it parsed
//! and nests no deeper than [`MAX_NESTING`].
//! Bodies that fail to parse become a [`Rejection`] instead.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChangelogError;
use crate::time::{self, Timestamp};

/// Deepest array/object nesting accepted in a payload.
///
/// Printing and dropping a [`Value`] recurse once per level, so the bound
/// keeps both within a worker thread's stack.
pub const MAX_NESTING: usize = 1024;

fn nesting_exceeds(body: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in body {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

fn decode(body: &[u8]) -> Result<Value, serde_json::Error> {
    if nesting_exceeds(body, MAX_NESTING) {
        return Err(serde_json::Error::custom(format!(
            "nesting deeper than {MAX_NESTING} levels"
        )));
    }
    let mut json = serde_json::Deserializer::from_slice(body);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// An accepted change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// When the request body finished arriving.
    pub timestamp: Timestamp,
    /// The decoded JSON payload.
    pub payload: Value,
}

impl Notification {
    /// Wrap an already-decoded payload.
    #[must_use]
    pub fn new(timestamp: Timestamp, payload: Value) -> Self {
        Self { timestamp, payload }
    }

    /// Decode `body` as JSON, stamping the result with `timestamp`.
    ///
    /// Numbers keep their written form, so values outside the `f64` range
    /// are accepted. Nesting is allowed up to [`MAX_NESTING`] levels.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::InvalidJson`] when `body` is not a single
    /// well-formed JSON value or nests deeper than [`MAX_NESTING`]. An
    /// empty body is rejected.
    pub fn parse(timestamp: Timestamp, body: &[u8]) -> Result<Self, ChangelogError> {
        decode(body)
            .map(|payload| Self::new(timestamp, payload))
            .map_err(|source| ChangelogError::InvalidJson { timestamp, source })
    }

    /// Payload rendered as JSON indented by two spaces.
    #[must_use]
    pub fn pretty_payload(&self) -> String {
        // Serializing a `Value` into a `String` cannot fail.
        serde_json::to_string_pretty(&self.payload).unwrap_or_default()
    }
}

/// A body that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// When the request body finished arriving.
    pub timestamp: Timestamp,
    /// The raw body, decoded lossily as UTF-8.
    pub raw_body: String,
}

impl Rejection {
    /// Capture a raw body that failed to parse.
    #[must_use]
    pub fn new(timestamp: Timestamp, body: &[u8]) -> Self {
        Self {
            timestamp,
            raw_body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

/// Acknowledgment returned for an accepted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Always `true`.
    pub received: bool,
    /// Time the notification was accepted.
    #[serde(serialize_with = "time::iso8601::serialize")]
    pub timestamp: Timestamp,
}

impl Receipt {
    /// Acknowledge `notification`.
    #[must_use]
    pub fn for_notification(notification: &Notification) -> Self {
        Self {
            received: true,
            timestamp: notification.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_object_payload() {
        let ts = time::now();
        let notification = Notification::parse(ts, br#"{"change":"added feature X"}"#).unwrap();
        assert_eq!(notification.timestamp, ts);
        assert_eq!(notification.payload, json!({"change": "added feature X"}));
    }

    #[test]
    fn should_parse_scalar_payloads() {
        let ts = time::now();
        for body in ["42", "\"text\"", "null", "true", "[]", " {} \n"] {
            assert!(
                Notification::parse(ts, body.as_bytes()).is_ok(),
                "expected {body:?} to parse"
            );
        }
    }

    #[test]
    fn should_accept_nesting_beyond_default_recursion_limit() {
        let body = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let notification = Notification::parse(time::now(), body.as_bytes()).unwrap();
        assert!(notification.pretty_payload().starts_with("[\n  [\n    ["));
    }

    #[test]
    fn should_accept_nesting_up_to_limit() {
        let body = format!(
            "{}0{}",
            "{\"a\":".repeat(MAX_NESTING),
            "}".repeat(MAX_NESTING)
        );
        assert!(Notification::parse(time::now(), body.as_bytes()).is_ok());
    }

    #[test]
    fn should_reject_nesting_past_limit() {
        let depth = MAX_NESTING + 1;
        let body = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(Notification::parse(time::now(), body.as_bytes()).is_err());
    }

    #[test]
    fn should_ignore_brackets_inside_strings_when_counting_depth() {
        let body = format!("[\"{}\\\"\"]", "[".repeat(MAX_NESTING * 2));
        assert!(Notification::parse(time::now(), body.as_bytes()).is_ok());
    }

    #[test]
    fn should_accept_numbers_outside_f64_range() {
        let body = b"[1e400, -2.5E+999, 123456789012345678901234567890]";
        let notification = Notification::parse(time::now(), body).unwrap();
        assert_eq!(
            notification.pretty_payload(),
            "[\n  1e400,\n  -2.5E+999,\n  123456789012345678901234567890\n]"
        );
    }

    #[test]
    fn should_reject_trailing_characters() {
        assert!(Notification::parse(time::now(), b"{} {}").is_err());
    }

    #[test]
    fn should_reject_empty_body() {
        let ts = time::now();
        let err = Notification::parse(ts, b"").unwrap_err();
        assert_eq!(err.timestamp(), ts);
    }

    #[test]
    fn should_reject_non_json_body() {
        for body in ["not json", "{", "{\"a\":1}}", "undefined", "{'a':1}"] {
            assert!(
                Notification::parse(time::now(), body.as_bytes()).is_err(),
                "expected {body:?} to be rejected"
            );
        }
    }

    #[test]
    fn should_pretty_print_with_two_space_indent_in_insertion_order() {
        let notification =
            Notification::parse(time::now(), br#"{"z":1,"a":{"b":[1,2]}}"#).unwrap();
        assert_eq!(
            notification.pretty_payload(),
            "{\n  \"z\": 1,\n  \"a\": {\n    \"b\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn should_keep_invalid_utf8_in_rejection() {
        let rejection = Rejection::new(time::now(), b"ab\xffcd");
        assert_eq!(rejection.raw_body, "ab\u{fffd}cd");
    }

    #[test]
    fn should_serialize_receipt() {
        let ts = time::now();
        let receipt = Receipt::for_notification(&Notification::new(ts, json!({})));
        let value = serde_json::to_value(receipt).unwrap();
        assert_eq!(
            value,
            json!({"received": true, "timestamp": time::format_iso8601(&ts)})
        );
    }
}
