//! A guided tour of the value API: construction, vivification, lenient vs
//! strict retrieval, and the text codec.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsontree --example tour
//! ```

use jsontree::{Value, json, parse};

fn basic_construction() {
    let j_null = Value::Null;
    let j_true = Value::from(true);
    let j_number = Value::from(3.1415);
    let j_string = Value::from("hello world");

    println!("Basic types:");
    println!("  null:   {j_null}");
    println!("  bool:   {j_true}");
    println!("  number: {j_number}");
    println!("  string: {j_string}");
    println!();
}

fn arrays_and_objects() {
    let j_array = json!([1, 2, 3, "four"]);
    let j_obj = json!({
        "a": 1,
        "b": true,
        "c": ["x", "y", "z"]
    });

    println!("Array:  {j_array}");
    println!("Object: {j_obj}");
    println!();
}

fn vivifying_access() {
    let mut j = Value::Null;
    j["name"] = json!("jsontree");
    j["year"] = json!(2024);
    j["languages"] = json!(["rust"]);
    // Writing past the end grows the array and fills the gap with nulls.
    j["array"][5] = json!(42);

    println!("Built through vivification: {j}");
    println!("  name:           {}", j["name"].get::<String>());
    println!("  first language: {}", j["languages"][0].get::<String>());
    println!("  missing index:  {}", j["empty"][0].get::<i32>());
    println!();
}

fn copy_and_move() {
    let mut original = json!({"key": "value"});
    let copy = original.clone();
    let moved = original.take();

    println!("Copy:  {copy}");
    println!("Moved: {moved} (source is now {original})");
    println!();
}

fn lenient_vs_strict() {
    let j = Value::from(123);

    println!("get::<i32>            -> {}", j.get::<i32>());
    println!("get::<String>         -> {}", j.get::<String>());
    match j.strict_get::<String>() {
        Ok(s) => println!("strict_get::<String>  -> {s}"),
        Err(e) => println!("strict_get::<String>  -> error: {e}"),
    }
    println!();
}

fn parsing() {
    let raw = r#"{
        "msg": "hello",
        "value": 123,
        "array": [true, null, "text"],
        "object": { "nested": false }
    }"#;

    let parsed = parse(raw).expect("fixture is valid JSON");
    println!("Parsed: {parsed}");
    println!(
        "Nested access: {}",
        parsed["object"]["nested"].get::<bool>()
    );
    println!();
}

fn fault_inspection() {
    let doc = json!({"a": [1, 2]});

    if let Err(e) = doc.at("missing") {
        println!("missing key:   {e}");
    }
    if let Err(e) = doc["a"].at_index(5) {
        println!("out of bounds: {e}");
    }
    if let Err(e) = parse("{ invalid json ") {
        println!("parse fault:   {e}");
    }
    println!();
}

fn main() {
    basic_construction();
    arrays_and_objects();
    vivifying_access();
    copy_and_move();
    lenient_vs_strict();
    parsing();
    fault_inspection();

    println!("Tour complete.");
}
