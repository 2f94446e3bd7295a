//! Node categories and numeric sub-representations.
//!
//! The document tree itself belongs to [`serde_json`]; this module provides
//! the two views of it that typed extraction needs:
//!
//! - [`NodeKind`]: the seven JSON node categories as a tag enum, with the
//!   lowercase names used in error messages
//! - [`NumberExt`]: exactness predicates over [`serde_json::Number`] — which
//!   of the bounded scalar types can hold this number without changing it
//!
//! ## Exactness
//!
//! Integer extraction is exact-match-only: a number node holding `2^32` is a
//! valid `u64`/`i64` but not a `u32`, and no narrowing is ever applied.
//! Float extraction accepts values that are *losslessly* representable at the
//! requested precision, so integer nodes like `42` extract as `42.0` while
//! `2^53 + 1` does not fit an `f64` and is rejected.
//!
//! ## Examples
//!
//! ```rust
//! use json_getter::{NodeKind, NumberExt};
//! use serde_json::json;
//!
//! let node = json!(4294967296u64); // 2^32
//! assert_eq!(NodeKind::of(&node), NodeKind::Number);
//!
//! let n = node.as_number().unwrap();
//! assert_eq!(n.as_exact_u32(), None);
//! assert_eq!(n.as_exact_i64(), Some(4294967296));
//! ```

use serde_json::{Number, Value};
use std::fmt;

/// The category tag of a JSON node.
///
/// `false` and `true` are distinct categories, matching the tag set used in
/// conversion diagnostics (`cannot convert to true`, not `cannot convert to
/// bool`).
///
/// # Examples
///
/// ```rust
/// use json_getter::NodeKind;
/// use serde_json::json;
///
/// assert_eq!(NodeKind::of(&json!(null)), NodeKind::Null);
/// assert_eq!(NodeKind::of(&json!(true)), NodeKind::True);
/// assert_eq!(NodeKind::of(&json!([1, 2])), NodeKind::Array);
/// assert_eq!(NodeKind::Array.to_string(), "array");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    False,
    True,
    Object,
    Array,
    Number,
    String,
}

impl NodeKind {
    /// Returns the category of a document node.
    #[inline]
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => NodeKind::Null,
            Value::Bool(false) => NodeKind::False,
            Value::Bool(true) => NodeKind::True,
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
        }
    }

    /// Returns the lowercase tag name used in error messages.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::False => "false",
            NodeKind::True => "true",
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::Number => "number",
            NodeKind::String => "string",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 2^63 and 2^64 as f64. Comparisons stay in the f64 domain so that values at
// the signed/unsigned boundary are not misclassified by saturating casts.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Exactness predicates over [`serde_json::Number`].
///
/// Each method returns `Some` only when the stored value converts to the
/// target type with no change in value.
///
/// # Examples
///
/// ```rust
/// use json_getter::NumberExt;
/// use serde_json::json;
///
/// let n = json!(42).as_number().unwrap().clone();
/// assert_eq!(n.as_exact_i32(), Some(42));
/// assert_eq!(n.as_lossless_f64(), Some(42.0));
///
/// let n = json!(1.5).as_number().unwrap().clone();
/// assert_eq!(n.as_exact_i64(), None);
/// assert_eq!(n.as_lossless_f64(), Some(1.5));
/// ```
pub trait NumberExt {
    /// The value as an `i32`, if it is exactly one.
    fn as_exact_i32(&self) -> Option<i32>;

    /// The value as a `u32`, if it is exactly one.
    fn as_exact_u32(&self) -> Option<u32>;

    /// The value as an `i64`, if it is exactly one.
    fn as_exact_i64(&self) -> Option<i64>;

    /// The value as a `u64`, if it is exactly one.
    fn as_exact_u64(&self) -> Option<u64>;

    /// The value as an `f32`, if representable at that precision without loss.
    fn as_lossless_f32(&self) -> Option<f32>;

    /// The value as an `f64`, if representable at that precision without loss.
    fn as_lossless_f64(&self) -> Option<f64>;
}

impl NumberExt for Number {
    #[inline]
    fn as_exact_i32(&self) -> Option<i32> {
        self.as_i64().and_then(|i| i32::try_from(i).ok())
    }

    #[inline]
    fn as_exact_u32(&self) -> Option<u32> {
        self.as_u64().and_then(|u| u32::try_from(u).ok())
    }

    #[inline]
    fn as_exact_i64(&self) -> Option<i64> {
        self.as_i64()
    }

    #[inline]
    fn as_exact_u64(&self) -> Option<u64> {
        self.as_u64()
    }

    fn as_lossless_f32(&self) -> Option<f32> {
        let d = if self.is_f64() {
            self.as_f64()?
        } else {
            self.as_lossless_f64()?
        };
        let f = d as f32;
        (f64::from(f) == d).then_some(f)
    }

    fn as_lossless_f64(&self) -> Option<f64> {
        if self.is_f64() {
            return self.as_f64();
        }
        if let Some(i) = self.as_i64() {
            let d = i as f64;
            return ((-TWO_POW_63..TWO_POW_63).contains(&d) && d as i64 == i).then_some(d);
        }
        if let Some(u) = self.as_u64() {
            let d = u as f64;
            return (d < TWO_POW_64 && d as u64 == u).then_some(d);
        }
        None
    }
}
