//! Property-based tests - pragmatic checks of the extraction invariants
//! across generated inputs rather than hand-picked cases.

use json_getter::{
    get_bool_by_pointer_or, get_bool_with, get_f64, get_i32, get_i64, get_string, get_u32,
    get_u64, GetFlags, Pointer,
};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    // Canonical decimal text of an integer parses back to the same value
    // through the string-coercion branch.
    #[test]
    fn prop_decimal_string_round_trip_i64(n in any::<i64>()) {
        let node = json!(n.to_string());
        prop_assert_eq!(get_i64(&node).unwrap(), n);
    }

    #[test]
    fn prop_decimal_string_round_trip_u64(n in any::<u64>()) {
        let node = json!(n.to_string());
        prop_assert_eq!(get_u64(&node).unwrap(), n);
    }

    // Stringify-then-parse reproduces integer number nodes exactly.
    #[test]
    fn prop_stringify_parse_round_trip(n in any::<i64>()) {
        let text = get_string(&json!(n)).unwrap();
        prop_assert_eq!(text.clone(), n.to_string());
        prop_assert_eq!(get_i64(&json!(text)).unwrap(), n);
    }

    // Exact-width dispatch: an i64 extracts as i32 iff it is in i32 range.
    #[test]
    fn prop_i32_window(n in any::<i64>()) {
        let node = json!(n);
        let narrow = get_i32(&node);
        if (i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&n) {
            prop_assert_eq!(narrow.unwrap(), n as i32);
        } else {
            prop_assert!(narrow.is_err());
        }
        prop_assert_eq!(get_i64(&node).unwrap(), n);
    }

    #[test]
    fn prop_u32_window(n in any::<u64>()) {
        let node = json!(n);
        let narrow = get_u32(&node);
        if n <= u64::from(u32::MAX) {
            prop_assert_eq!(narrow.unwrap(), n as u32);
        } else {
            prop_assert!(narrow.is_err());
        }
        prop_assert_eq!(get_u64(&node).unwrap(), n);
    }

    // Finite f64 number nodes extract losslessly.
    #[test]
    fn prop_f64_identity(d in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let node = json!(d);
        prop_assert_eq!(get_f64(&node).unwrap(), d);
    }

    // Number truthiness under NUMBER_AS_BOOL matches a != 0 comparison.
    #[test]
    fn prop_number_truthiness(n in any::<i64>()) {
        let node = json!(n);
        prop_assert_eq!(
            get_bool_with(&node, GetFlags::NUMBER_AS_BOOL).unwrap(),
            n != 0
        );
    }

    // Pointer text round-trips through parse/Display for arbitrary tokens,
    // including ones containing the escape characters.
    #[test]
    fn prop_pointer_round_trip(tokens in prop::collection::vec("[a-z~/0-9]{0,8}", 0..5)) {
        let pointer = Pointer::from_tokens(tokens.clone());
        let text = pointer.to_string();
        let parsed = Pointer::parse(&text).unwrap();
        prop_assert_eq!(parsed.tokens(), &tokens[..]);
        prop_assert_eq!(parsed.to_string(), text);
    }

    // The defaulted accessor returns the default for any path into an
    // empty document, never an error.
    #[test]
    fn prop_default_on_empty_doc(tokens in prop::collection::vec("[a-z]{1,6}", 1..4), default in any::<bool>()) {
        let doc = json!({});
        let pointer = Pointer::from_tokens(tokens);
        prop_assert_eq!(get_bool_by_pointer_or(&doc, &pointer, default), default);
    }

    // Malformed trailing garbage is rejected no matter the prefix value.
    // The suffix alphabet avoids hex digits and the 0x marker, which could
    // otherwise combine with a leading 0 into a valid literal.
    #[test]
    fn prop_trailing_garbage_is_malformed(n in any::<i32>(), suffix in "[g-w]{1,4}") {
        let node = json!(format!("{}{}", n, suffix));
        prop_assert!(get_i32(&node).is_err());
    }
}
