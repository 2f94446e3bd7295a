//! JSON Pointer (RFC 6901) addressing.
//!
//! A [`Pointer`] is an ordered sequence of reference tokens locating one
//! node inside a document. It can be built from parts with
//! [`Pointer::from_tokens`] / [`Pointer::push`], or parsed from the textual
//! form with [`Pointer::parse`], where `~0` decodes to `~` and `~1` to `/`.
//! [`Display`](std::fmt::Display) renders the textual form back, re-encoding
//! both escapes, so a parsed pointer round-trips exactly.
//!
//! Resolution walks the token sequence against a root value. Applied to an
//! object, a token selects the member with that exact name; applied to an
//! array, it selects an element iff it is `0` or all digits without a
//! leading zero. [`Pointer::resolve`] reports *where* a walk failed (the
//! index of the first token that did not resolve), which the accessor layer
//! and diagnostics build on; [`Pointer::get`] is the plain optional form.
//!
//! ## Examples
//!
//! ```rust
//! use json_getter::Pointer;
//! use serde_json::json;
//!
//! let doc = json!({"servers": [{"host": "db1", "port": 5432}]});
//!
//! let pointer = Pointer::parse("/servers/0/host").unwrap();
//! assert_eq!(pointer.get(&doc), Some(&json!("db1")));
//! assert_eq!(pointer.to_string(), "/servers/0/host");
//!
//! // The second token is the first that fails to resolve.
//! let missing = Pointer::parse("/servers/3/host").unwrap();
//! assert_eq!(missing.resolve(&doc), Err(1));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// A parsed JSON Pointer: a sequence of reference tokens.
///
/// The empty pointer refers to the whole document. Tokens are stored
/// unescaped; escaping only exists in the textual form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// Creates the empty pointer, which resolves to the root itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::Pointer;
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": 1});
    /// assert_eq!(Pointer::new().get(&doc), Some(&doc));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Pointer { tokens: Vec::new() }
    }

    /// Builds a pointer from an ordered token sequence.
    ///
    /// Tokens are taken verbatim; no escape processing happens here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::Pointer;
    ///
    /// let pointer = Pointer::from_tokens(["a/b", "0"]);
    /// assert_eq!(pointer.to_string(), "/a~1b/0");
    /// ```
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Pointer {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses the textual form.
    ///
    /// The literal must be empty or start with `/`; `~0`/`~1` decode to
    /// `~`/`/`. A `~` followed by anything else (or nothing) is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointer`] with the byte offset of the
    /// offending character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::Pointer;
    ///
    /// let pointer = Pointer::parse("/a~1b/~0c").unwrap();
    /// assert_eq!(pointer.tokens(), ["a/b", "~c"]);
    ///
    /// assert!(Pointer::parse("no-slash").is_err());
    /// assert!(Pointer::parse("/bad~2escape").is_err());
    /// ```
    pub fn parse(literal: &str) -> Result<Self> {
        if literal.is_empty() {
            return Ok(Pointer::new());
        }
        if !literal.starts_with('/') {
            return Err(Error::invalid_pointer(literal, 0));
        }

        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut chars = literal.char_indices();
        chars.next(); // leading '/'
        while let Some((offset, c)) = chars.next() {
            match c {
                '/' => tokens.push(std::mem::take(&mut current)),
                '~' => match chars.next() {
                    Some((_, '0')) => current.push('~'),
                    Some((_, '1')) => current.push('/'),
                    _ => return Err(Error::invalid_pointer(literal, offset)),
                },
                c => current.push(c),
            }
        }
        tokens.push(current);
        Ok(Pointer { tokens })
    }

    /// Appends a token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// The unescaped token sequence.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The number of tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` for the empty pointer.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Walks the pointer against a root value.
    ///
    /// On failure, returns the index of the first token that did not
    /// resolve — every token before it matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_getter::Pointer;
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": {"b": [10, 20]}});
    /// let pointer = Pointer::parse("/a/b/1").unwrap();
    /// assert_eq!(pointer.resolve(&doc), Ok(&json!(20)));
    ///
    /// let pointer = Pointer::parse("/a/x/1").unwrap();
    /// assert_eq!(pointer.resolve(&doc), Err(1));
    /// ```
    pub fn resolve<'v>(&self, root: &'v Value) -> std::result::Result<&'v Value, usize> {
        let mut current = root;
        for (index, token) in self.tokens.iter().enumerate() {
            current = match current {
                Value::Object(map) => map.get(token.as_str()),
                Value::Array(items) => array_index(token).and_then(|i| items.get(i)),
                _ => None,
            }
            .ok_or(index)?;
        }
        Ok(current)
    }

    /// Walks the pointer against a root value, discarding failure detail.
    #[inline]
    #[must_use]
    pub fn get<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.resolve(root).ok()
    }
}

// Array reference tokens are `0` or digits without a leading zero; `-` (the
// past-the-end element of RFC 6901) and anything signed never resolve.
fn array_index(token: &str) -> Option<usize> {
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_char('/')?;
            for c in token.chars() {
                match c {
                    '~' => f.write_str("~0")?,
                    '/' => f.write_str("~1")?,
                    c => f.write_char(c)?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pointer::parse(s)
    }
}

impl From<&Pointer> for Pointer {
    fn from(pointer: &Pointer) -> Self {
        pointer.clone()
    }
}

impl Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PointerVisitor;

        impl Visitor<'_> for PointerVisitor {
            type Value = Pointer;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON Pointer string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Pointer, E>
            where
                E: de::Error,
            {
                Pointer::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(PointerVisitor)
    }
}
