//! Envelope normalization for the news feed
//!
//! The upstream sometimes returns the article list bare, sometimes wrapped
//! in an object under `data`, `articles`, or `value`. Anything else coerces
//! to an empty list rather than an error.

use serde_json::Value;
use tracing::warn;

/// Keys an object envelope may carry the article array under, in priority order
const ENVELOPE_KEYS: [&str; 3] = ["data", "articles", "value"];

/// Extract the article records from an arbitrary response payload
///
/// A bare array is taken as-is. An object is probed for an array-valued
/// `data`, then `articles`, then `value` field; a non-array value under one
/// of those keys falls through to the next. Unrecognized shapes degrade to
/// an empty list.
pub fn extract_articles(payload: &Value) -> Vec<Value> {
    if let Some(items) = payload.as_array() {
        return items.clone();
    }

    if let Some(object) = payload.as_object() {
        for key in ENVELOPE_KEYS {
            if let Some(items) = object.get(key).and_then(Value::as_array) {
                return items.clone();
            }
        }
    }

    // Upstream contract changes would land here; keep them visible in logs
    // even though the display degrades to "no news" instead of erroring.
    warn!(
        "Unrecognized news envelope shape ({}), coercing to empty list",
        describe_shape(payload)
    );
    Vec::new()
}

fn describe_shape(payload: &Value) -> String {
    match payload {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
    }
}
