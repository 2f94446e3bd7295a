//! Error types for typed JSON extraction.
//!
//! Every failure in this crate is an [`Error`] with a structured
//! discriminant, so callers can match on *why* an extraction failed instead
//! of scraping message strings.
//!
//! ## Error Categories
//!
//! - **Malformed**: a string node did not parse as a number at all
//! - **Out of range**: a string parsed, but the value does not fit the target type
//! - **Type mismatches**: the node's category is not convertible under the active flags
//! - **Pointer errors**: a pointer literal is not valid RFC 6901 syntax, or a
//!   well-formed pointer resolved to nothing
//!
//! ## Error Chaining
//!
//! Pointer-resolving accessors wrap extraction failures in
//! [`Error::AtPointer`], which carries the rendered pointer text and keeps the
//! original cause reachable through [`std::error::Error::source`]. The
//! rendered message reads `cannot get /a/b: cannot convert to object`.
//!
//! ## Examples
//!
//! ```rust
//! use json_getter::{get_i32, Error};
//! use serde_json::json;
//!
//! let node = json!({"nested": true});
//! match get_i32(&node) {
//!     Err(Error::TypeMismatch { .. }) => {}
//!     other => panic!("expected a type mismatch, got {:?}", other),
//! }
//! ```

use crate::node::NodeKind;
use thiserror::Error;

/// Represents all possible failures during typed extraction.
///
/// The rendered messages follow the `cannot convert to <kind>` /
/// `cannot get <pointer>` phrasing throughout, so a message produced three
/// layers down still reads naturally once pointer context is prepended.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A string node does not parse as a number at all.
    #[error("cannot convert to number")]
    Malformed,

    /// A string node parsed as a number, but the value does not fit the
    /// requested target type.
    #[error("out of range")]
    OutOfRange,

    /// The node's category is not convertible to the requested type under
    /// the active coercion flags.
    #[error("cannot convert to {kind}")]
    TypeMismatch { kind: NodeKind },

    /// A pointer literal is not valid RFC 6901 syntax.
    #[error("invalid pointer {literal:?} at offset {offset}")]
    InvalidPointer { literal: String, offset: usize },

    /// A pointer did not resolve to any node in the document.
    #[error("cannot get {pointer}")]
    Unresolved { pointer: String },

    /// Extraction failed at the node a pointer resolved to.
    ///
    /// The inner cause is preserved, not replaced; it is rendered after the
    /// pointer text and exposed through [`std::error::Error::source`].
    #[error("cannot get {pointer}: {source}")]
    AtPointer {
        pointer: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Creates a type-mismatch error for a node of the given category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::{Error, NodeKind};
    ///
    /// let err = Error::mismatch(NodeKind::Object);
    /// assert_eq!(err.to_string(), "cannot convert to object");
    /// ```
    #[must_use]
    pub fn mismatch(kind: NodeKind) -> Self {
        Error::TypeMismatch { kind }
    }

    /// Creates an invalid-pointer error for a literal that fails RFC 6901
    /// syntax at the given byte offset.
    #[must_use]
    pub fn invalid_pointer(literal: &str, offset: usize) -> Self {
        Error::InvalidPointer {
            literal: literal.to_string(),
            offset,
        }
    }

    /// Creates an unresolved-pointer error from the pointer's rendered text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::Error;
    ///
    /// let err = Error::unresolved("/a/b/c");
    /// assert_eq!(err.to_string(), "cannot get /a/b/c");
    /// ```
    #[must_use]
    pub fn unresolved(pointer: impl Into<String>) -> Self {
        Error::Unresolved {
            pointer: pointer.into(),
        }
    }

    /// Wraps an extraction failure with the pointer that located the node.
    ///
    /// The original error becomes this error's source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::{Error, NodeKind};
    ///
    /// let inner = Error::mismatch(NodeKind::Array);
    /// let err = inner.at_pointer("/items");
    /// assert_eq!(err.to_string(), "cannot get /items: cannot convert to array");
    /// ```
    #[must_use]
    pub fn at_pointer(self, pointer: impl Into<String>) -> Self {
        Error::AtPointer {
            pointer: pointer.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
