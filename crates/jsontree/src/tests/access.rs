use alloc::string::String;

use rstest::rstest;

use crate::{AccessError, Value, json};

// ─────────────────────────────────────────────────────────────────────
// Auto-vivification
// ─────────────────────────────────────────────────────────────────────

#[test]
fn indexed_write_on_fresh_null_builds_the_whole_path() {
    let mut v = Value::Null;
    v["a"][3] = json!(7);

    assert!(v.is_object());
    let a = v.at("a").unwrap();
    assert!(a.is_array());
    assert_eq!(a.len(), 4);
    assert_eq!(a.at_index(0).unwrap(), &Value::Null);
    assert_eq!(a.at_index(2).unwrap(), &Value::Null);
    assert_eq!(a.at_index(3).unwrap(), &Value::Number(7.0));
}

#[test]
fn chained_writes_vivify_one_level_per_step() {
    let mut v = Value::Null;
    v["a"]["b"][2] = json!(5);

    assert!(v.is_object());
    assert!(v["a"].is_object());
    assert!(v["a"]["b"].is_array());
    assert_eq!(v["a"]["b"][2], Value::Number(5.0));
}

#[test]
fn keyed_write_replaces_a_scalar_with_an_object() {
    let mut v = json!([1, 2]);
    *v.entry("k") = json!(true);

    assert!(v.is_object());
    assert_eq!(v.at("k").unwrap(), &Value::Boolean(true));
}

#[test]
fn indexed_write_replaces_a_scalar_with_an_array() {
    let mut v = json!("text");
    *v.entry_index(1) = json!(9);

    assert!(v.is_array());
    assert_eq!(v.len(), 2);
    assert_eq!(v.at_index(0).unwrap(), &Value::Null);
}

#[test]
fn entry_returns_existing_slots_without_resetting_them() {
    let mut v = json!({"k": 1});
    assert_eq!(v.entry("k"), &mut Value::Number(1.0));
    *v.entry("k") = json!(2);
    assert_eq!(v.at("k").unwrap(), &Value::Number(2.0));
}

// ─────────────────────────────────────────────────────────────────────
// Read-only access
// ─────────────────────────────────────────────────────────────────────

#[test]
fn read_only_keyed_access_faults() {
    let v = json!({"a": 1});
    assert_eq!(
        v.at("missing"),
        Err(AccessError::KeyNotFound {
            key: String::from("missing")
        })
    );
    assert_eq!(
        json!([1]).at("a"),
        Err(AccessError::WrongVariant {
            expected: "object",
            found: "array"
        })
    );
}

#[test]
fn read_only_indexed_access_faults() {
    let v = Value::array([Value::from(1), Value::from(2)]);
    assert_eq!(
        v.at_index(5),
        Err(AccessError::IndexOutOfBounds { index: 5, len: 2 })
    );
    assert_eq!(
        json!({"a": 1}).at_index(0),
        Err(AccessError::WrongVariant {
            expected: "array",
            found: "object"
        })
    );
}

#[test]
fn index_sugar_resolves_misses_to_null() {
    let v = json!({"a": 1});
    assert_eq!(v["missing"], Value::Null);
    assert_eq!(v["a"][4], Value::Null);
    assert_eq!(Value::Null["anything"], Value::Null);
}

#[test]
fn read_only_access_never_mutates() {
    let v = json!({"a": 1});
    let _ = v.at("missing");
    let _ = v["missing"];
    assert_eq!(v, json!({"a": 1}));
}

// ─────────────────────────────────────────────────────────────────────
// Lenient retrieval
// ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case(json!(null), false)]
#[case(json!(false), false)]
#[case(json!(true), true)]
#[case(json!(0), false)]
#[case(json!(1), true)]
#[case(json!(-0.5), true)]
#[case(Value::Number(f64::NAN), true)]
#[case(json!(""), false)]
#[case(json!("false"), false)]
#[case(json!("0"), false)]
#[case(json!("x"), true)]
#[case(json!([]), true)]
#[case(json!({}), true)]
fn lenient_bool(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(value.get::<bool>(), expected);
}

#[rstest]
#[case(json!(null), 0.0)]
#[case(json!(false), 0.0)]
#[case(json!(true), 1.0)]
#[case(json!(2.5), 2.5)]
#[case(json!("3.5"), 3.5)]
#[case(json!("6e2"), 600.0)]
#[case(json!("unparsable"), 0.0)]
#[case(json!("3abc"), 0.0)]
#[case(json!([1, 2]), 0.0)]
#[case(json!({"a": 1}), 0.0)]
fn lenient_numeric(#[case] value: Value, #[case] expected: f64) {
    assert_eq!(value.get::<f64>(), expected);
}

#[test]
fn lenient_numeric_narrows() {
    assert_eq!(json!(2.9).get::<i32>(), 2);
    assert_eq!(json!(-1).get::<u32>(), 0);
    assert_eq!(json!(true).get::<i32>(), 1);
    assert_eq!(json!(300).get::<u8>(), 255);
}

#[rstest]
#[case(json!(null), "null")]
#[case(json!(true), "true")]
#[case(json!(3), "3")]
#[case(json!("s"), "s")]
#[case(json!([1, "x"]), r#"[1,"x"]"#)]
#[case(json!({"a": 1}), r#"{"a":1}"#)]
fn lenient_text(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.get::<String>(), expected);
}

// ─────────────────────────────────────────────────────────────────────
// Strict retrieval
// ─────────────────────────────────────────────────────────────────────

#[test]
fn strict_matches_return_the_payload() {
    assert_eq!(json!(true).strict_get::<bool>(), Ok(true));
    assert_eq!(json!(3.5).strict_get::<f64>(), Ok(3.5));
    assert_eq!(json!(3.9).strict_get::<i32>(), Ok(3));
    assert_eq!(json!("hi").strict_get::<String>(), Ok(String::from("hi")));
}

#[test]
fn strict_mismatch_is_a_fault_not_a_coercion() {
    assert_eq!(
        json!(123).strict_get::<String>(),
        Err(AccessError::TypeMismatch {
            requested: "string",
            found: "number"
        })
    );
    assert_eq!(
        json!("123").strict_get::<i64>(),
        Err(AccessError::TypeMismatch {
            requested: "number",
            found: "string"
        })
    );
    assert_eq!(
        json!(1).strict_get::<bool>(),
        Err(AccessError::TypeMismatch {
            requested: "boolean",
            found: "number"
        })
    );
    assert_eq!(
        json!(null).strict_get::<f64>(),
        Err(AccessError::TypeMismatch {
            requested: "number",
            found: "null"
        })
    );
}
