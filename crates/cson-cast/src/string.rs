use serde_json::Value;

/// Converts a value to its text form. Never fails.
///
/// `null` is the empty string and strings are returned without quotes.
/// Numbers and booleans use their canonical JSON text, arrays and
/// objects their compact JSON encoding.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use cson_cast::to_string;
///
/// assert_eq!(to_string(&json!(null)), "");
/// assert_eq!(to_string(&json!("hi")), "hi");
/// assert_eq!(to_string(&json!(1715442247)), "1715442247");
/// assert_eq!(to_string(&json!({"a": [1, true]})), r#"{"a":[1,true]}"#);
/// ```
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
