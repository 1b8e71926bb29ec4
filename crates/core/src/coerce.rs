//! Lenient value coercion.
//!
//! Malformed input never fails a request: it degrades to a caller-supplied
//! default instead.

use serde_json::Value;

/// Checkbox values that count as unchecked even when the key is present.
const FALSY_VALUES: &[&str] = &["0", "false", "off"];

/// Parse `raw` as an integer, falling back to `default` when it is missing,
/// blank or not a clean integer.
pub fn coerce_int(raw: Option<&str>, default: i32) -> i32 {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.parse().unwrap_or(default),
        _ => default,
    }
}

/// Coerce a JSON value to an integer.
///
/// Integer numbers within `i32` range and numeric strings are accepted;
/// everything else (floats, booleans, null, arrays, objects) yields `default`.
pub fn coerce_json_int(value: &Value, default: i32) -> i32 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(default),
        Value::String(s) => coerce_int(Some(s.as_str()), default),
        _ => default,
    }
}

/// Whether a checkbox-style value counts as set.
pub fn is_checked(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        Some(value) => {
            !value.is_empty() && !FALSY_VALUES.iter().any(|f| value.eq_ignore_ascii_case(f))
        }
        None => false,
    }
}
