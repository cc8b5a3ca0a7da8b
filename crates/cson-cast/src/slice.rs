use serde_json::Value;

/// Converts a value to a sequence of values. Never fails.
///
/// Only arrays have elements; every other value yields an empty vec.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use cson_cast::to_vec;
///
/// assert_eq!(to_vec(&json!([1, "a"])), vec![json!(1), json!("a")]);
/// assert!(to_vec(&json!({"a": 1})).is_empty());
/// ```
pub fn to_vec(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        _ => Vec::new(),
    }
}
