use serde_json::json;
use setpick_utils::*;

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": 1, "a": {"d": [{"z": 0, "y": 1}], "c": 2}});
    assert_eq!(
        jsonify(&value),
        r#"{"a":{"c":2,"d":[{"y":1,"z":0}]},"b":1}"#
    );
}

#[test]
fn test_u8s_from_str_is_deterministic() {
    assert_eq!(u8s_from_str("seed"), u8s_from_str("seed"));
    assert_ne!(u8s_from_str("seed"), u8s_from_str("seed2"));
}
