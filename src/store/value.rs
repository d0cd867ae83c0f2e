//! Value coercion for the string-only backends

use serde_json::Value;

/// Render a value the way the text and SQLite backends store it.
///
/// Strings are stored as-is; every other shape is stored as compact JSON
/// text (`42`, `true`, `null`, `[1,2]`).
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
