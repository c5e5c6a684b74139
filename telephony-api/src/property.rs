//! Typed access to loosely-typed resource payloads
//!
//! A [`PropertyStore`] wraps the JSON object the service returned for an
//! entity and projects individual fields into typed values on access.
//! Parsing is deferred: a malformed field only fails when it is read.
//!
//! Absence and malformation are distinct outcomes:
//! - absent (or `null`) fields read as `None`,
//! - present fields that cannot be coerced fail with
//!   [`ApiError::MalformedData`](crate::ApiError::MalformedData),
//! - [`PropertyStore::get_boolean`] is the exception: it has no absent state
//!   and reads anything other than `true` as `false`.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::{ApiError, Result};

/// Raw field mapping of a resource payload
pub type Payload = Map<String, Value>;

/// Immutable description of a textual timestamp layout
///
/// Passed explicitly to [`PropertyStore::get_date`] and to query builders
/// that format dates, so no formatter state is shared between callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pattern: &'static str,
}

impl DateFormat {
    /// Timestamps on resource payloads, e.g. `2014-08-12T10:17:54Z`
    pub const ISO_8601_UTC: DateFormat = DateFormat::new("%Y-%m-%dT%H:%M:%SZ");

    /// Timestamps accepted by the account transaction query
    pub const TRANSACTION: DateFormat = DateFormat::new("%Y-%m-%dT%H:%M:%SZ");

    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn parse(&self, text: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, self.pattern).map(|naive| naive.and_utc())
    }

    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.format(self.pattern).to_string()
    }
}

/// Typed-accessor wrapper over an untyped field mapping
///
/// The payload is only ever replaced wholesale. Readers take an `Arc`
/// snapshot, so a concurrent [`replace`](Self::replace) never exposes a
/// half-updated payload.
#[derive(Debug, Default)]
pub struct PropertyStore {
    data: RwLock<Arc<Payload>>,
}

impl Clone for PropertyStore {
    fn clone(&self) -> Self {
        Self {
            data: RwLock::new(self.snapshot()),
        }
    }
}

impl From<Payload> for PropertyStore {
    fn from(payload: Payload) -> Self {
        Self::new(payload)
    }
}

impl PropertyStore {
    pub fn new(payload: Payload) -> Self {
        Self {
            data: RwLock::new(Arc::new(payload)),
        }
    }

    /// Current payload
    pub fn snapshot(&self) -> Arc<Payload> {
        self.data.read().clone()
    }

    /// Atomically swap the backing payload
    pub fn replace(&self, payload: Payload) {
        *self.data.write() = Arc::new(payload);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.data.read().get(field).is_some_and(|v| !v.is_null())
    }

    /// Raw JSON value of a field
    pub fn get_value(&self, field: &str) -> Option<Value> {
        self.data.read().get(field).filter(|v| !v.is_null()).cloned()
    }

    /// Field as text
    ///
    /// Numbers and booleans are returned in their textual form, nested values
    /// as compact JSON.
    pub fn get_string(&self, field: &str) -> Option<String> {
        self.get_value(field).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        })
    }

    /// Field as a timestamp in the given layout
    pub fn get_date(&self, field: &str, format: &DateFormat) -> Result<Option<DateTime<Utc>>> {
        match self.get_value(field) {
            None => Ok(None),
            Some(Value::String(text)) => format
                .parse(&text)
                .map(Some)
                .map_err(|e| ApiError::malformed(field, &text, format!("{} ({})", e, format.pattern()))),
            Some(other) => Err(ApiError::malformed(field, &other, "expected a timestamp string")),
        }
    }

    /// Field holding milliseconds since the Unix epoch, as a timestamp
    pub fn get_epoch_millis(&self, field: &str) -> Result<Option<DateTime<Utc>>> {
        match self.get_long(field)? {
            None => Ok(None),
            Some(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| ApiError::malformed(field, millis, "timestamp out of range")),
        }
    }

    /// Field as a signed integer; integer strings are accepted
    pub fn get_long(&self, field: &str) -> Result<Option<i64>> {
        match self.get_value(field) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| ApiError::malformed(field, &n, "not a 64-bit integer")),
            Some(Value::String(text)) => text
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|e| ApiError::malformed(field, &text, e.to_string())),
            Some(other) => Err(ApiError::malformed(field, &other, "expected an integer")),
        }
    }

    /// Field as a flag; absent fields read as `false`
    pub fn get_boolean(&self, field: &str) -> bool {
        match self.get_value(field) {
            Some(Value::Bool(b)) => b,
            Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Embedded object field, e.g. a nested sub-resource payload
    pub fn get_object(&self, field: &str) -> Option<Payload> {
        match self.get_value(field) {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

/// Interpret a response body as an entity payload
pub(crate) fn into_payload(value: Value, context: &str) -> Result<Payload> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::malformed(context, other, "expected a JSON object")),
    }
}
