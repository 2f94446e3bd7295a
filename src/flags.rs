//! Coercion policy flags.
//!
//! Extraction is strict by default: a null node is not `0`, the number `1`
//! is not `true`, and only the spelled-out conversions in each extractor's
//! table succeed. [`GetFlags`] opts into the loose conversions individually.
//!
//! ## Build-Time Defaults
//!
//! The flag-free entry points ([`get_bool`](crate::get_bool),
//! [`get_i32_by_pointer`](crate::get_i32_by_pointer), ...) use
//! [`GetFlags::default_flags`], a process-wide set fixed at build time
//! through cargo features:
//!
//! ```toml
//! [dependencies]
//! json_getter = { version = "0.1", features = ["null-as-zero"] }
//! ```
//!
//! Each feature (`null-as-zero`, `number-as-bool`, `bool-string-as-bool`,
//! `string-as-bool`) adds the matching flag. With no features enabled the
//! default set is empty.
//!
//! ## Examples
//!
//! ```rust
//! use json_getter::{get_i32_with, GetFlags};
//! use serde_json::json;
//!
//! let node = json!(null);
//! assert!(get_i32_with(&node, GetFlags::empty()).is_err());
//! assert_eq!(get_i32_with(&node, GetFlags::NULL_AS_ZERO).unwrap(), 0);
//! ```

use bitflags::bitflags;

bitflags! {
    /// Bitmask of permitted loose conversions.
    ///
    /// Combine flags with `|`:
    ///
    /// ```rust
    /// use json_getter::GetFlags;
    ///
    /// let flags = GetFlags::NULL_AS_ZERO | GetFlags::BOOL_STRING_AS_BOOL;
    /// assert!(flags.contains(GetFlags::NULL_AS_ZERO));
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GetFlags: u32 {
        /// A null node coerces to `0` / `0.0` / `false` instead of failing.
        const NULL_AS_ZERO        = 1 << 0;
        /// A number node coerces to bool by C-style truthiness.
        const NUMBER_AS_BOOL      = 1 << 1;
        /// The strings `"true"`/`"True"`/`"false"`/`"False"` coerce to bool.
        const BOOL_STRING_AS_BOOL = 1 << 2;
        /// Any other string coerces to bool by non-emptiness.
        const STRING_AS_BOOL      = 1 << 3;
    }
}

impl GetFlags {
    /// The process-wide default flag set, fixed at build time.
    ///
    /// Assembled from the crate's cargo features; empty unless features are
    /// enabled. Used by every entry point that does not take an explicit
    /// `GetFlags` argument.
    #[must_use]
    pub const fn default_flags() -> Self {
        let mut bits = 0;
        if cfg!(feature = "null-as-zero") {
            bits |= Self::NULL_AS_ZERO.bits();
        }
        if cfg!(feature = "number-as-bool") {
            bits |= Self::NUMBER_AS_BOOL.bits();
        }
        if cfg!(feature = "bool-string-as-bool") {
            bits |= Self::BOOL_STRING_AS_BOOL.bits();
        }
        if cfg!(feature = "string-as-bool") {
            bits |= Self::STRING_AS_BOOL.bits();
        }
        Self::from_bits_retain(bits)
    }
}

impl Default for GetFlags {
    fn default() -> Self {
        Self::default_flags()
    }
}
