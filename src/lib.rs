//! # json_getter
//!
//! Typed scalar extraction from already-parsed JSON documents.
//!
//! ## What is json_getter?
//!
//! [`serde_json::Value`] answers "what is at this spot in the document";
//! `json_getter` answers "give me this spot as a `u32`, or tell me precisely
//! why you can't". It layers four things over a parsed document:
//!
//! - **Typed extraction** of `bool`, `i32`, `u32`, `i64`, `u64`, `f32`,
//!   `f64`, and `String` from any node, with exact-width integer semantics
//!   (no silent narrowing, widening, or float truncation)
//! - **Coercion flags** that opt into loose conversions individually
//!   (null as zero, number truthiness, `"true"`/`"false"` strings as bools)
//! - **JSON Pointer lookup** (RFC 6901) that resolves a path first and wraps
//!   any failure with the rendered pointer for diagnostics
//! - **Defaulted access** that collapses "absent or malformed optional
//!   field" into a single non-exceptional case
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! json_getter = "0.1"
//! serde_json = "1.0"
//! ```
//!
//! ### Extracting from nodes
//!
//! ```rust
//! use json_getter::{get_i64, get_string, get_u32};
//! use serde_json::json;
//!
//! let node = json!(42);
//! assert_eq!(get_i64(&node).unwrap(), 42);
//! assert_eq!(get_u32(&node).unwrap(), 42);
//! assert_eq!(get_string(&node).unwrap(), "42");
//!
//! // Exact width only: 2^32 is an i64, not a u32.
//! let node = json!(4294967296u64);
//! assert!(get_u32(&node).is_err());
//! assert_eq!(get_i64(&node).unwrap(), 4294967296);
//! ```
//!
//! ### Pointer access with defaults
//!
//! ```rust
//! use json_getter::{get_bool_by_pointer_or, get_u32_by_pointer};
//! use serde_json::json;
//!
//! let config = json!({
//!     "server": {"port": 8080, "hosts": ["a", "b"]}
//! });
//!
//! assert_eq!(get_u32_by_pointer(&config, "/server/port").unwrap(), 8080);
//! assert!(!get_bool_by_pointer_or(&config, "/server/tls", false));
//! ```
//!
//! ### Opting into coercions
//!
//! ```rust
//! use json_getter::{get_bool_with, get_i32_with, GetFlags};
//! use serde_json::json;
//!
//! assert_eq!(
//!     get_i32_with(&json!(null), GetFlags::NULL_AS_ZERO).unwrap(),
//!     0
//! );
//! assert!(get_bool_with(&json!("True"), GetFlags::BOOL_STRING_AS_BOOL).unwrap());
//! ```
//!
//! String nodes coerce to numeric targets through a C-style parse: `"0x10"`
//! is 16 and `"010"` is 8. This mirrors the `strtol` auto-base rule rather
//! than JSON number syntax; see the conversion table in the
//! [`getter`](crate::getter) module docs.
//!
//! ## Error Reporting
//!
//! Failures are structured ([`Error`]) and chain pointer context around the
//! underlying cause:
//!
//! ```rust
//! use json_getter::get_u32_by_pointer;
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": {}}});
//! let err = get_u32_by_pointer(&doc, "/a/b").unwrap_err();
//! assert_eq!(err.to_string(), "cannot get /a/b: cannot convert to object");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Node extraction**: O(1) per call
//! - **Pointer resolution**: O(tokens), O(1) per object/array step
//! - **Memory**: allocation only for `String` extraction and error paths
//! - **Concurrency**: every operation is a pure function over shared
//!   references; no locks, no shared mutable state
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - The document and pointer inputs are never mutated or retained

pub mod error;
pub mod flags;
pub mod getter;
pub mod node;
mod num;
pub mod pointer;

pub use error::{Error, Result};
pub use flags::GetFlags;
pub use getter::{
    get, get_bool, get_bool_by_pointer, get_bool_by_pointer_or, get_bool_with, get_by_pointer,
    get_by_pointer_or, get_f32, get_f32_by_pointer, get_f32_by_pointer_or, get_f32_with, get_f64,
    get_f64_by_pointer, get_f64_by_pointer_or, get_f64_with, get_i32, get_i32_by_pointer,
    get_i32_by_pointer_or, get_i32_with, get_i64, get_i64_by_pointer, get_i64_by_pointer_or,
    get_i64_with, get_string, get_string_by_pointer, get_string_by_pointer_or, get_string_with,
    get_u32, get_u32_by_pointer, get_u32_by_pointer_or, get_u32_with, get_u64, get_u64_by_pointer,
    get_u64_by_pointer_or, get_u64_with, get_with, AsPointer, FromNode,
};
pub use node::{NodeKind, NumberExt};
pub use pointer::Pointer;
