//! Property-based tests for the container
//!
//! - set-then-get returns what was set, for any path without empty steps
//! - coercion accessors never panic on whatever a path resolves to

use cson::{Json, SyncJson};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_]{1,6}", 1..5).prop_map(|steps| steps.join("."))
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1e12f64..1e12).prop_map(|f| json!(f)),
        "[ -~]{0,12}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn test_set_then_get_returns_value(path in arb_path(), value in arb_value()) {
        let json: Json = Json::empty();
        let got = json.set(&path, value.clone()).get(&path).value();
        prop_assert_eq!(got, value);
    }

    #[test]
    fn test_set_then_get_on_any_prior_tree(
        prior in arb_value(),
        path in arb_path(),
        value in arb_value(),
    ) {
        let json: Json = Json::new(prior);
        json.set(&path, value.clone());
        prop_assert!(json.get(&path).equals(value));
    }

    #[test]
    fn test_synchronized_set_then_get(path in arb_path(), value in arb_scalar()) {
        let json = SyncJson::empty();
        json.set(&path, value.clone());
        prop_assert_eq!(json.get(&path).value(), value);
    }

    #[test]
    fn test_accessors_never_panic(doc in arb_value(), path in arb_path()) {
        let json: Json = Json::new(doc);
        let node = json.get(&path);
        let _ = node.to_i64();
        let _ = node.to_f64();
        let _ = node.to_bool();
        let _ = node.to_string();
        let _ = node.to_vec();
        let _ = node.to_bytes().unwrap();
    }

    #[test]
    fn test_intermediates_are_objects_after_set(prior in arb_value(), path in arb_path()) {
        let json: Json = Json::new(prior);
        json.set(&path, 1);
        let steps: Vec<&str> = path.split('.').collect();
        for depth in 0..steps.len() {
            let prefix = steps[..depth].join(".");
            prop_assert!(json.get(&prefix).value().is_object(), "{}", prefix);
        }
    }

    #[test]
    fn test_codec_roundtrip_is_structurally_equal(doc in arb_value()) {
        let json: Json = Json::new(doc);
        let decoded: Json = Json::from_bytes(&json.to_bytes().unwrap()).unwrap();
        prop_assert!(decoded == json);
    }
}
