//! Lenient typed accessors.
//!
//! Each accessor reads the addressed value under shared access and converts
//! it with the coercions from `cson_cast`. None of them fail: a value of the
//! wrong shape, or a missing one, reads as the type's zero value.

use std::fmt;

use cson_cast::deep_equal;
use serde_json::Value;

use crate::json::Json;
use crate::store::Store;

impl<S: Store> Json<S> {
    /// The addressed value, or `null` if there is none.
    pub fn value(&self) -> Value {
        self.with_value(Value::clone)
    }

    /// Short for [`value`](Self::value).
    pub fn val(&self) -> Value {
        self.value()
    }

    /// Short for `to_string()`. See the [`Display`](fmt::Display) impl.
    pub fn str(&self) -> String {
        self.to_string()
    }

    pub fn to_f64(&self) -> f64 {
        self.with_value(cson_cast::to_f64)
    }

    pub fn to_i64(&self) -> i64 {
        self.with_value(cson_cast::to_i64)
    }

    pub fn to_bool(&self) -> bool {
        self.with_value(cson_cast::to_bool)
    }

    /// Elements of an array value, each wrapped in its own unsynchronized
    /// container. Anything but an array yields an empty vec.
    ///
    /// The elements are copies: arrays are not addressable by path, so the
    /// returned containers are detached from this tree.
    pub fn to_vec(&self) -> Vec<Json> {
        self.with_value(cson_cast::to_vec)
            .into_iter()
            .map(Json::new)
            .collect()
    }

    /// Structural equality with `other`, which may be a plain value or
    /// another container.
    pub fn equals(&self, other: impl Into<Value>) -> bool {
        let other = other.into();
        self.with_value(|value| deep_equal(value, &other))
    }
}

/// `null` renders as the empty string, strings without quotes, numbers and
/// booleans as JSON text, arrays and objects as compact JSON.
impl<S: Store> fmt::Display for Json<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_value(cson_cast::to_string))
    }
}

impl<S: Store> From<Json<S>> for Value {
    fn from(json: Json<S>) -> Self {
        json.value()
    }
}

impl<S: Store> From<&Json<S>> for Value {
    fn from(json: &Json<S>) -> Self {
        json.value()
    }
}

impl<S: Store, T: Store> PartialEq<Json<T>> for Json<S> {
    fn eq(&self, other: &Json<T>) -> bool {
        // Snapshot first: both handles may guard the same lock.
        self.equals(other.value())
    }
}

impl<S: Store> PartialEq<Value> for Json<S> {
    fn eq(&self, other: &Value) -> bool {
        self.with_value(|value| deep_equal(value, other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::SyncJson;
    use serde_json::json;

    fn sample() -> Json {
        Json::new(json!({
            "h": {"c": 0, "e": "", "s": 1715442247},
            "c": {"total": 3698},
            "flags": {"on": "true", "off": 0, "ratio": "0.75"},
            "list": [1, "two", {"three": 3}]
        }))
    }

    #[test]
    fn test_value_of_missing_is_null() {
        assert_eq!(sample().get("nope").value(), Value::Null);
        assert_eq!(sample().get("c.total").val(), json!(3698));
    }

    #[test]
    fn test_nil_accessors_return_zero_values() {
        let nil: Json = Json::empty();
        assert_eq!(nil.to_i64(), 0);
        assert_eq!(nil.to_f64(), 0.0);
        assert!(!nil.to_bool());
        assert_eq!(nil.to_string(), "");
        assert_eq!(nil.str(), "");
        assert!(nil.to_vec().is_empty());
    }

    #[test]
    fn test_numeric_accessors() {
        let json = sample();
        assert_eq!(json.get("h.s").to_i64(), 1715442247);
        assert_eq!(json.get("h.s").to_f64(), 1715442247.0);
        assert_eq!(json.get("flags.ratio").to_f64(), 0.75);
        assert_eq!(json.get("flags.ratio").to_i64(), 0);
        assert_eq!(json.get("h.e").to_i64(), 0);
    }

    #[test]
    fn test_bool_accessor() {
        let json = sample();
        assert!(json.get("flags.on").to_bool());
        assert!(!json.get("flags.off").to_bool());
        assert!(!json.get("h").to_bool());
    }

    #[test]
    fn test_string_accessor() {
        let json = sample();
        assert_eq!(json.get("h.s").to_string(), "1715442247");
        assert_eq!(json.get("flags.on").to_string(), "true");
        assert_eq!(json.get("c").to_string(), r#"{"total":3698}"#);
        assert_eq!(format!("[{}]", json.get("h.e")), "[]");
    }

    #[test]
    fn test_vec_accessor() {
        let items = sample().get("list").to_vec();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].to_i64(), 1);
        assert_eq!(items[1].str(), "two");
        assert_eq!(items[2].get("three").to_i64(), 3);
        assert!(sample().get("c").to_vec().is_empty());
    }

    #[test]
    fn test_vec_elements_are_detached() {
        let json = sample();
        let items = json.get("list").to_vec();
        items[2].set("three", 4);
        assert_eq!(json.get("list").value(), json!([1, "two", {"three": 3}]));
    }

    #[test]
    fn test_vec_from_synchronized_tree() {
        let json = SyncJson::wrap(json!([true, false]));
        let items = json.to_vec();
        assert!(items[0].to_bool());
        assert!(!items[0].is_synchronized());
    }

    #[test]
    fn test_equals_distinct_instances() {
        let a: Json = Json::new(json!({"x": [1, 2], "y": {"z": null}}));
        let b: Json = Json::new(json!({"y": {"z": null}, "x": [1.0, 2]}));
        assert!(a.equals(&b));
        assert!(a == b);
        assert!(!a.equals(json!({"x": [1, 2]})));
    }

    #[test]
    fn test_equals_across_store_kinds() {
        let local: Json = Json::new(json!({"k": "v"}));
        let synced = local.synchronized();
        assert!(local == synced);
        assert!(synced == json!({"k": "v"}));
    }

    #[test]
    fn test_eq_same_tree_synchronized() {
        let json = SyncJson::wrap(json!({"a": {"b": 1}, "c": {"b": 1}}));
        assert!(json.get("a") == json.get("c"));
        assert!(json.get("a") != json.get(""));
    }

    #[test]
    fn test_value_conversion() {
        let json = sample();
        let total: Value = json.get("c.total").into();
        assert_eq!(total, json!(3698));
    }
}
