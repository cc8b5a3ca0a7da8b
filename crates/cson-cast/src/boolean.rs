use serde_json::Value;

/// Converts a value to `bool`. Never fails.
///
/// - `null` → `false`
/// - booleans → themselves
/// - numbers → `true` unless zero
/// - strings → [`parse_bool`], else `false`
/// - arrays and objects → `false`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use cson_cast::to_bool;
///
/// assert!(to_bool(&json!(true)));
/// assert!(to_bool(&json!(-1)));
/// assert!(!to_bool(&json!(0.0)));
/// assert!(to_bool(&json!("TRUE")));
/// assert!(!to_bool(&json!("yes")));
/// ```
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => parse_bool(s).unwrap_or(false),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
