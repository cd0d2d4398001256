//! Record payload model.

use crate::{ScrubError, ScrubResult};
use serde_json::Value;
use std::borrow::Cow;

/// A decoded record payload: an ordered mapping from field name to value.
///
/// Key order is preserved end-to-end (`serde_json` with `preserve_order`), so
/// a redacted copy serializes with the same field ordering as its input.
pub type Record = serde_json::Map<String, Value>;

/// Decodes a raw payload string into a [`Record`].
pub fn decode_payload(raw: &str) -> ScrubResult<Record> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(ScrubError::NotAnObject),
    }
}

/// Serializes a record back to JSON text.
///
/// Field order is the record's own order, and non-ASCII text is emitted
/// verbatim rather than escaped.
#[must_use]
pub fn encode_payload(record: &Record) -> String {
    serde_json::to_string(record).unwrap_or_default()
}

/// Renders a scalar value for pattern matching.
///
/// Strings match as-is and numbers by their decimal rendering, since source
/// data stores phone and ID numbers both quoted and unquoted. Booleans,
/// nulls, and nested structure are opaque to the engine.
#[must_use]
pub fn matchable_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}
