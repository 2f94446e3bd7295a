//! Typed extraction from document nodes.
//!
//! The conversion core of the crate. [`FromNode`] is implemented for the
//! eight supported targets (`bool`, `i32`, `u32`, `i64`, `u64`, `f32`,
//! `f64`, `String`) and dispatches on the node's category:
//!
//! | node | `bool` | integers | floats | `String` |
//! |---|---|---|---|---|
//! | null | `NULL_AS_ZERO` or fail | `NULL_AS_ZERO` or fail | `NULL_AS_ZERO` or fail | `"null"` |
//! | bool | itself | `0`/`1` | `0.0`/`1.0` | `"false"`/`"true"` |
//! | object, array | fail | fail | fail | fail |
//! | number | `NUMBER_AS_BOOL` truthiness or fail | exact width only | lossless at that precision only | decimal / fixed-point text |
//! | string | bool-string flags or fail | parsed | parsed | copied |
//!
//! String targets are the most permissive: stringifying any scalar is
//! always lossless. Integer targets are the strictest: a number node must
//! hold an exact value of the requested width, so `4294967296` extracts as
//! `i64` but fails as `i32`/`u32`, and `1.0` fails every integer target.
//!
//! Three accessor layers wrap the core, each adding policy without touching
//! the conversion semantics beneath it:
//!
//! - [`get`] / [`get_with`] extract from a node directly
//! - [`get_by_pointer`] resolves a [`Pointer`] first and wraps any failure
//!   with the rendered pointer text
//! - [`get_by_pointer_or`] swallows every failure into a caller default
//!
//! Named per-type families (`get_bool`, `get_i32_by_pointer`,
//! `get_string_by_pointer_or`, ...) cover the same surface without
//! turbofish.
//!
//! ## Examples
//!
//! ```rust
//! use json_getter::{get_bool_by_pointer_or, get_i64_by_pointer, get_u32_by_pointer};
//! use serde_json::json;
//!
//! let doc = json!({"retries": 3, "limit": "0x10"});
//!
//! assert_eq!(get_u32_by_pointer(&doc, "/retries").unwrap(), 3);
//! assert_eq!(get_i64_by_pointer(&doc, "/limit").unwrap(), 16);
//! assert!(!get_bool_by_pointer_or(&doc, "/missing", false));
//! ```

use crate::error::{Error, Result};
use crate::flags::GetFlags;
use crate::node::{NodeKind, NumberExt};
use crate::num::FromNumericStr;
use crate::pointer::Pointer;
use serde_json::Value;
use std::borrow::Cow;

mod sealed {
    pub trait Sealed {}
}

/// Types extractable from a document node.
///
/// Sealed: the target set is closed, so the per-category conversion table
/// stays total. Use the [`get`] family rather than calling this directly.
pub trait FromNode: sealed::Sealed + Sized {
    /// Extracts a value of this type from `node` under `flags`.
    fn from_node(node: &Value, flags: GetFlags) -> Result<Self>;
}

impl sealed::Sealed for bool {}

impl FromNode for bool {
    fn from_node(node: &Value, flags: GetFlags) -> Result<Self> {
        match node {
            Value::Null if flags.contains(GetFlags::NULL_AS_ZERO) => Ok(false),
            Value::Bool(b) => Ok(*b),
            Value::Number(n) if flags.contains(GetFlags::NUMBER_AS_BOOL) => {
                // Truthiness of the first applicable representation,
                // checked i64, u64, f64 in that order.
                if let Some(i) = n.as_i64() {
                    Ok(i != 0)
                } else if let Some(u) = n.as_u64() {
                    Ok(u != 0)
                } else if let Some(d) = n.as_f64() {
                    Ok(d != 0.0)
                } else {
                    Err(Error::mismatch(NodeKind::Number))
                }
            }
            Value::String(s) => {
                if flags.contains(GetFlags::BOOL_STRING_AS_BOOL) {
                    match s.as_str() {
                        "true" | "True" => return Ok(true),
                        "false" | "False" => return Ok(false),
                        _ => {}
                    }
                }
                if flags.contains(GetFlags::STRING_AS_BOOL) {
                    return Ok(!s.is_empty());
                }
                Err(Error::mismatch(NodeKind::String))
            }
            _ => Err(Error::mismatch(NodeKind::of(node))),
        }
    }
}

macro_rules! impl_integer_from_node {
    ($($ty:ty => $exact:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl FromNode for $ty {
            fn from_node(node: &Value, flags: GetFlags) -> Result<Self> {
                match node {
                    Value::Null if flags.contains(GetFlags::NULL_AS_ZERO) => Ok(0),
                    Value::Bool(b) => Ok(*b as $ty),
                    // Exact width only; no narrowing or widening between
                    // numeric subtypes.
                    Value::Number(n) => {
                        n.$exact().ok_or(Error::mismatch(NodeKind::Number))
                    }
                    Value::String(s) => <$ty>::from_numeric_str(s),
                    _ => Err(Error::mismatch(NodeKind::of(node))),
                }
            }
        }
    )*};
}

impl_integer_from_node!(
    i32 => as_exact_i32,
    u32 => as_exact_u32,
    i64 => as_exact_i64,
    u64 => as_exact_u64,
);

macro_rules! impl_float_from_node {
    ($($ty:ty => $lossless:ident),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl FromNode for $ty {
            fn from_node(node: &Value, flags: GetFlags) -> Result<Self> {
                match node {
                    Value::Null if flags.contains(GetFlags::NULL_AS_ZERO) => Ok(0.0),
                    Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
                    Value::Number(n) => {
                        n.$lossless().ok_or(Error::mismatch(NodeKind::Number))
                    }
                    Value::String(s) => <$ty>::from_numeric_str(s),
                    _ => Err(Error::mismatch(NodeKind::of(node))),
                }
            }
        }
    )*};
}

impl_float_from_node!(f32 => as_lossless_f32, f64 => as_lossless_f64);

impl sealed::Sealed for String {}

impl FromNode for String {
    fn from_node(node: &Value, _flags: GetFlags) -> Result<Self> {
        match node {
            Value::Null => Ok("null".to_string()),
            Value::Bool(true) => Ok("true".to_string()),
            Value::Bool(false) => Ok("false".to_string()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i.to_string())
                } else if let Some(u) = n.as_u64() {
                    Ok(u.to_string())
                } else if let Some(d) = n.as_f64() {
                    // Fixed-point with six fractional digits.
                    Ok(format!("{:.6}", d))
                } else {
                    Err(Error::mismatch(NodeKind::Number))
                }
            }
            Value::String(s) => Ok(s.clone()),
            _ => Err(Error::mismatch(NodeKind::of(node))),
        }
    }
}

/// A pointer argument: either a prebuilt [`Pointer`] or a textual literal
/// parsed on each call.
///
/// Implemented for `&Pointer`, `&str`, and `&String`, so pointer-taking
/// entry points accept both forms through one parameter:
///
/// ```rust
/// use json_getter::{get_i32_by_pointer, Pointer};
/// use serde_json::json;
///
/// let doc = json!({"port": 8080});
/// let prebuilt = Pointer::parse("/port").unwrap();
///
/// assert_eq!(get_i32_by_pointer(&doc, &prebuilt).unwrap(), 8080);
/// assert_eq!(get_i32_by_pointer(&doc, "/port").unwrap(), 8080);
/// ```
pub trait AsPointer {
    /// Borrows or parses the pointer this argument designates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointer`] for a literal that fails RFC 6901
    /// syntax.
    fn as_pointer(&self) -> Result<Cow<'_, Pointer>>;
}

impl AsPointer for &Pointer {
    #[inline]
    fn as_pointer(&self) -> Result<Cow<'_, Pointer>> {
        Ok(Cow::Borrowed(*self))
    }
}

impl AsPointer for &str {
    #[inline]
    fn as_pointer(&self) -> Result<Cow<'_, Pointer>> {
        Pointer::parse(self).map(Cow::Owned)
    }
}

impl AsPointer for &String {
    #[inline]
    fn as_pointer(&self) -> Result<Cow<'_, Pointer>> {
        Pointer::parse(self).map(Cow::Owned)
    }
}

/// Extracts a `T` from a node using the build-time default flags.
///
/// # Errors
///
/// Returns an error if the node's category is not convertible to `T` under
/// the default flags, or a string node fails numeric parsing.
///
/// # Examples
///
/// ```rust
/// use json_getter::get;
/// use serde_json::json;
///
/// assert_eq!(get::<i64>(&json!(42)).unwrap(), 42);
/// assert!(get::<i64>(&json!([42])).is_err());
/// ```
pub fn get<T: FromNode>(node: &Value) -> Result<T> {
    T::from_node(node, GetFlags::default_flags())
}

/// Extracts a `T` from a node under an explicit flag set.
///
/// # Errors
///
/// Returns an error if the node's category is not convertible to `T` under
/// `flags`, or a string node fails numeric parsing.
///
/// # Examples
///
/// ```rust
/// use json_getter::{get_with, GetFlags};
/// use serde_json::json;
///
/// let node = json!(null);
/// assert_eq!(get_with::<i64>(&node, GetFlags::NULL_AS_ZERO).unwrap(), 0);
/// ```
pub fn get_with<T: FromNode>(node: &Value, flags: GetFlags) -> Result<T> {
    T::from_node(node, flags)
}

/// Resolves a pointer against `root`, then extracts a `T` from the resolved
/// node using the build-time default flags.
///
/// # Errors
///
/// - [`Error::InvalidPointer`] if a literal fails to parse
/// - [`Error::Unresolved`] (`cannot get <pointer>`) if the pointer does not
///   resolve to a node
/// - [`Error::AtPointer`] (`cannot get <pointer>: <cause>`) if extraction
///   fails at the resolved node, with the cause preserved as the source
///
/// # Examples
///
/// ```rust
/// use json_getter::get_by_pointer;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [true]}});
/// assert!(get_by_pointer::<bool, _>(&doc, "/a/b/0").unwrap());
///
/// let err = get_by_pointer::<bool, _>(&doc, "/a/b/1").unwrap_err();
/// assert_eq!(err.to_string(), "cannot get /a/b/1");
/// ```
pub fn get_by_pointer<T, P>(root: &Value, pointer: P) -> Result<T>
where
    T: FromNode,
    P: AsPointer,
{
    let pointer = pointer.as_pointer()?;
    let node = pointer
        .resolve(root)
        .map_err(|_unresolved| Error::unresolved(pointer.to_string()))?;
    T::from_node(node, GetFlags::default_flags()).map_err(|e| e.at_pointer(pointer.to_string()))
}

/// Like [`get_by_pointer`], but any failure yields `default` instead of an
/// error.
///
/// The single recovery boundary of the crate: absent and malformed optional
/// fields collapse into one non-exceptional case, unconditionally.
///
/// # Examples
///
/// ```rust
/// use json_getter::get_by_pointer_or;
/// use serde_json::json;
///
/// let doc = json!({"timeout": 30});
/// assert_eq!(get_by_pointer_or(&doc, "/timeout", 10i64), 30);
/// assert_eq!(get_by_pointer_or(&doc, "/missing", 10i64), 10);
/// ```
pub fn get_by_pointer_or<T, P>(root: &Value, pointer: P, default: T) -> T
where
    T: FromNode,
    P: AsPointer,
{
    get_by_pointer(root, pointer).unwrap_or(default)
}

macro_rules! named_getters {
    ($($ty:ty, $name:literal:
        $get:ident, $get_with:ident, $by_pointer:ident, $by_pointer_or:ident;)*) => {$(
        #[doc = concat!("Extracts a `", $name, "` from a node using the build-time default flags.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the node is not convertible; see [`get`].
        pub fn $get(node: &Value) -> Result<$ty> {
            get(node)
        }

        #[doc = concat!("Extracts a `", $name, "` from a node under an explicit flag set.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the node is not convertible; see [`get_with`].
        pub fn $get_with(node: &Value, flags: GetFlags) -> Result<$ty> {
            get_with(node, flags)
        }

        #[doc = concat!("Resolves a pointer, then extracts a `", $name, "` from the resolved node.")]
        ///
        /// Accepts a prebuilt [`Pointer`] or a textual literal.
        ///
        /// # Errors
        ///
        /// Returns an error if the pointer does not resolve or extraction
        /// fails at the resolved node; see [`get_by_pointer`].
        pub fn $by_pointer<P: AsPointer>(root: &Value, pointer: P) -> Result<$ty> {
            get_by_pointer(root, pointer)
        }

        #[doc = concat!("Resolves a pointer and extracts a `", $name, "`, or returns `default` on any failure.")]
        pub fn $by_pointer_or<P: AsPointer>(root: &Value, pointer: P, default: $ty) -> $ty {
            get_by_pointer_or(root, pointer, default)
        }
    )*};
}

named_getters! {
    bool,   "bool":   get_bool,   get_bool_with,   get_bool_by_pointer,   get_bool_by_pointer_or;
    i32,    "i32":    get_i32,    get_i32_with,    get_i32_by_pointer,    get_i32_by_pointer_or;
    u32,    "u32":    get_u32,    get_u32_with,    get_u32_by_pointer,    get_u32_by_pointer_or;
    i64,    "i64":    get_i64,    get_i64_with,    get_i64_by_pointer,    get_i64_by_pointer_or;
    u64,    "u64":    get_u64,    get_u64_with,    get_u64_by_pointer,    get_u64_by_pointer_or;
    f32,    "f32":    get_f32,    get_f32_with,    get_f32_by_pointer,    get_f32_by_pointer_or;
    f64,    "f64":    get_f64,    get_f64_with,    get_f64_by_pointer,    get_f64_by_pointer_or;
    String, "String": get_string, get_string_with, get_string_by_pointer, get_string_by_pointer_or;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_from_bool_nodes() {
        assert!(get_bool(&json!(true)).unwrap());
        assert!(!get_bool(&json!(false)).unwrap());
    }

    #[test]
    fn test_bool_requires_number_as_bool() {
        let node = json!(1);
        assert!(matches!(
            get_bool_with(&node, GetFlags::empty()),
            Err(Error::TypeMismatch {
                kind: NodeKind::Number
            })
        ));
        assert!(get_bool_with(&node, GetFlags::NUMBER_AS_BOOL).unwrap());
        assert!(!get_bool_with(&json!(0), GetFlags::NUMBER_AS_BOOL).unwrap());
        assert!(get_bool_with(&json!(0.5), GetFlags::NUMBER_AS_BOOL).unwrap());
        assert!(!get_bool_with(&json!(0.0), GetFlags::NUMBER_AS_BOOL).unwrap());
    }

    #[test]
    fn test_bool_string_flags() {
        for (s, expected) in [("true", true), ("True", true), ("false", false), ("False", false)] {
            let node = json!(s);
            assert!(get_bool_with(&node, GetFlags::empty()).is_err());
            assert_eq!(
                get_bool_with(&node, GetFlags::BOOL_STRING_AS_BOOL).unwrap(),
                expected
            );
        }
        // BOOL_STRING_AS_BOOL alone does not cover other strings.
        assert!(get_bool_with(&json!("yes"), GetFlags::BOOL_STRING_AS_BOOL).is_err());
        // Non-emptiness kicks in with STRING_AS_BOOL.
        assert!(get_bool_with(&json!("yes"), GetFlags::STRING_AS_BOOL).unwrap());
        assert!(!get_bool_with(&json!(""), GetFlags::STRING_AS_BOOL).unwrap());
        // Exact matches win over non-emptiness when both flags are set.
        let both = GetFlags::BOOL_STRING_AS_BOOL | GetFlags::STRING_AS_BOOL;
        assert!(!get_bool_with(&json!("false"), both).unwrap());
    }

    #[test]
    fn test_null_as_zero() {
        let node = json!(null);
        assert!(matches!(
            get_i32_with(&node, GetFlags::empty()),
            Err(Error::TypeMismatch {
                kind: NodeKind::Null
            })
        ));
        assert_eq!(get_i32_with(&node, GetFlags::NULL_AS_ZERO).unwrap(), 0);
        assert_eq!(get_u64_with(&node, GetFlags::NULL_AS_ZERO).unwrap(), 0);
        assert_eq!(get_f64_with(&node, GetFlags::NULL_AS_ZERO).unwrap(), 0.0);
        assert!(!get_bool_with(&node, GetFlags::NULL_AS_ZERO).unwrap());
    }

    #[test]
    fn test_bool_widens_to_numbers() {
        assert_eq!(get_i32(&json!(true)).unwrap(), 1);
        assert_eq!(get_u64(&json!(false)).unwrap(), 0);
        assert_eq!(get_f64(&json!(true)).unwrap(), 1.0);
        assert_eq!(get_f32(&json!(false)).unwrap(), 0.0);
    }

    #[test]
    fn test_integers_are_exact_width() {
        let node = json!(4294967296u64); // 2^32
        assert!(get_i32(&node).is_err());
        assert!(get_u32(&node).is_err());
        assert_eq!(get_i64(&node).unwrap(), 1 << 32);
        assert_eq!(get_u64(&node).unwrap(), 1 << 32);

        // No float-to-integer narrowing, even for whole values.
        assert!(get_i64(&json!(1.0)).is_err());
        // No sign coercion.
        assert!(get_u32(&json!(-5)).is_err());
        assert_eq!(get_i32(&json!(-5)).unwrap(), -5);
    }

    #[test]
    fn test_floats_require_lossless() {
        assert_eq!(get_f64(&json!(1.5)).unwrap(), 1.5);
        assert_eq!(get_f64(&json!(42)).unwrap(), 42.0);
        assert_eq!(get_f32(&json!(1.5)).unwrap(), 1.5);
        assert!(get_f32(&json!(0.1)).is_err());
        assert!(get_f64(&json!(9007199254740993i64)).is_err());
    }

    #[test]
    fn test_string_from_scalars() {
        // Null and bools always stringify, regardless of flags.
        assert_eq!(get_string(&json!(null)).unwrap(), "null");
        assert_eq!(get_string(&json!(true)).unwrap(), "true");
        assert_eq!(get_string(&json!(false)).unwrap(), "false");
        assert_eq!(get_string(&json!(42)).unwrap(), "42");
        assert_eq!(get_string(&json!(-7)).unwrap(), "-7");
        assert_eq!(get_string(&json!(u64::MAX)).unwrap(), "18446744073709551615");
        assert_eq!(get_string(&json!(1.5)).unwrap(), "1.500000");
        assert_eq!(get_string(&json!("copy me")).unwrap(), "copy me");
    }

    #[test]
    fn test_containers_never_convert() {
        for node in [json!({}), json!([])] {
            assert!(get_bool(&node).is_err());
            assert!(get_i32(&node).is_err());
            assert!(get_f64(&node).is_err());
            assert!(get_string(&node).is_err());
        }
        let err = get_string(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert to object");
    }

    #[test]
    fn test_string_nodes_parse_as_numbers() {
        assert_eq!(get_i32(&json!("123")).unwrap(), 123);
        assert_eq!(get_i64(&json!("0x20")).unwrap(), 32);
        assert_eq!(get_f64(&json!("2.5e2")).unwrap(), 250.0);
        assert!(matches!(get_i32(&json!("123abc")), Err(Error::Malformed)));
        assert!(matches!(
            get_i64(&json!("99999999999999999999")),
            Err(Error::OutOfRange)
        ));
    }

    #[test]
    fn test_by_pointer_wraps_errors() {
        let doc = json!({"a": {"b": {"c": []}}});

        let err = get_i32_by_pointer(&doc, "/a/b/missing").unwrap_err();
        assert!(matches!(err, Error::Unresolved { .. }));
        assert!(err.to_string().contains("/a/b/missing"));

        let err = get_i32_by_pointer(&doc, "/a/b/c").unwrap_err();
        assert_eq!(err.to_string(), "cannot get /a/b/c: cannot convert to array");
        assert!(matches!(err, Error::AtPointer { .. }));
    }

    #[test]
    fn test_by_pointer_invalid_literal() {
        let doc = json!({});
        assert!(matches!(
            get_i32_by_pointer(&doc, "not-a-pointer"),
            Err(Error::InvalidPointer { .. })
        ));
    }

    #[test]
    fn test_by_pointer_or_swallows_everything() {
        let doc = json!({"present": "not a number"});
        assert_eq!(get_i32_by_pointer_or(&doc, "/missing/path", 7), 7);
        assert_eq!(get_i32_by_pointer_or(&doc, "/present", 7), 7);
        assert_eq!(get_i32_by_pointer_or(&doc, "bad pointer", 7), 7);
        assert_eq!(
            get_string_by_pointer_or(&doc, "/present", String::new()),
            "not a number"
        );
    }

    #[test]
    fn test_generic_entry_points() {
        let doc = json!({"n": 5});
        assert_eq!(get::<u32>(&doc["n"]).unwrap(), 5);
        assert_eq!(get_by_pointer::<u32, _>(&doc, "/n").unwrap(), 5);
        assert_eq!(get_by_pointer_or::<u32, _>(&doc, "/m", 9), 9);
    }
}
