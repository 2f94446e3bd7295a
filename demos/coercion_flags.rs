//! Opting into loose conversions with GetFlags.
//!
//! Run with: cargo run --example coercion_flags

use json_getter::{get_bool_with, get_i32_with, get_string, GetFlags};
use serde_json::json;

fn main() {
    // Strict by default: null is not zero, 1 is not true.
    assert!(get_i32_with(&json!(null), GetFlags::empty()).is_err());
    assert!(get_bool_with(&json!(1), GetFlags::empty()).is_err());

    // Each coercion is a separate opt-in.
    assert_eq!(
        get_i32_with(&json!(null), GetFlags::NULL_AS_ZERO).unwrap(),
        0
    );
    assert!(get_bool_with(&json!(1), GetFlags::NUMBER_AS_BOOL).unwrap());
    assert!(get_bool_with(&json!("True"), GetFlags::BOOL_STRING_AS_BOOL).unwrap());

    // Flags combine; exact bool-strings win over plain non-emptiness.
    let lenient = GetFlags::BOOL_STRING_AS_BOOL | GetFlags::STRING_AS_BOOL;
    assert!(!get_bool_with(&json!("false"), lenient).unwrap());
    assert!(get_bool_with(&json!("anything else"), lenient).unwrap());
    assert!(!get_bool_with(&json!(""), lenient).unwrap());

    // String extraction needs no flags: every scalar stringifies.
    for node in [json!(null), json!(true), json!(42), json!(2.5)] {
        println!("{:>8} -> {:?}", node.to_string(), get_string(&node).unwrap());
    }

    println!("all coercions behaved as expected");
}
