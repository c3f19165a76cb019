#![allow(missing_docs)]

use jsontree::{AccessError, Value, json, parse};

const FIXTURE: &str = r#"
{
    "msg": "hello",
    "value": 123,
    "array": [true, null, "text"],
    "object": { "nested": false },
    "pi": 3.25
}
"#;

#[test]
fn parse_access_mutate_serialize() {
    let mut doc = parse(FIXTURE).unwrap();

    assert_eq!(doc.at("msg").unwrap().get::<String>(), "hello");
    assert_eq!(doc["object"]["nested"].strict_get::<bool>(), Ok(false));
    assert_eq!(doc["value"].get::<i64>(), 123);

    // Mutate through the vivifying accessors: a new key in a nested object,
    // and an array write past the current length.
    doc["object"]["count"] = json!(2);
    doc["array"][4] = json!("grown");

    insta::assert_snapshot!(
        doc.serialize(),
        @r#"{"array":[true,null,"text",null,"grown"],"msg":"hello","object":{"count":2,"nested":false},"pi":3.25,"value":123}"#
    );
}

#[test]
fn output_round_trips_through_serde_json() {
    let doc = parse(FIXTURE).unwrap();
    let ours: serde_json::Value = serde_json::from_str(&doc.serialize()).unwrap();
    let reference: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(ours, reference);
}

#[test]
fn read_faults_are_inspectable() {
    let doc = parse(FIXTURE).unwrap();

    assert_eq!(
        doc.at("nope"),
        Err(AccessError::KeyNotFound {
            key: "nope".into()
        })
    );
    assert_eq!(
        doc["array"].at_index(9),
        Err(AccessError::IndexOutOfBounds { index: 9, len: 3 })
    );
    assert_eq!(
        doc["msg"].strict_get::<f64>(),
        Err(AccessError::TypeMismatch {
            requested: "number",
            found: "string"
        })
    );
}

#[test]
fn parse_faults_carry_position_and_context() {
    let err = parse("{ invalid json ").unwrap_err();
    assert_eq!(err.offset, 2);
    assert_eq!(
        err.to_string(),
        "expected string key at byte 2, near: { invalid json "
    );
}

#[test]
fn tree_built_from_scratch_matches_parsed_form() {
    let mut built = Value::Null;
    built["name"] = json!("demo");
    built["points"][0] = json!(1);
    built["points"][1] = json!(2);

    let parsed = parse(r#"{"name": "demo", "points": [1, 2]}"#).unwrap();
    assert_eq!(built, parsed);
}
