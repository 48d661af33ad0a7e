//! Key-value pairs for object construction.
//!
//! A [`Pair`] couples a field name with a pre-serialized value fragment. The
//! value side is formatted at construction time; the key is stored raw and
//! escaped each time the pair is serialized. Both timings produce stable
//! output, so serializing the same pair twice yields identical text.

use crate::fmt;
use crate::value::Value;
use std::fmt as std_fmt;

/// A field name paired with a pre-serialized value fragment.
///
/// Pairs are transient: typically constructed immediately before being pushed
/// into an [`Object`](crate::Object) and then discarded.
///
/// # Examples
///
/// ```rust
/// use jss::{Pair, Value};
///
/// let pair = Pair::new("count", 3);
/// assert_eq!(pair.serialize(), r#""count":3"#);
///
/// let pair = Pair::new("name", Value::string("Alice"));
/// assert_eq!(pair.key(), "name");
/// assert_eq!(pair.value(), "\"Alice\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    key: String,
    value: String,
}

impl Pair {
    /// Creates a pair from a field name and anything convertible to a
    /// [`Value`]: scalars, `Option`, another `Value`, or a borrowed
    /// [`Array`](crate::Array) / [`Object`](crate::Object) whose serialized
    /// text is captured verbatim.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Pair {
            key: key.into(),
            value: value.into().text,
        }
    }

    /// Returns the stored key, unescaped.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the already-serialized value fragment.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Appends `"escaped-key":value` to `out`.
    ///
    /// The key is re-escaped from the raw stored text on every call, so the
    /// output is identical across calls.
    pub fn serialize_into(&self, out: &mut String) {
        out.reserve(self.key.len() + self.value.len() + 3);
        out.push('"');
        fmt::push_escaped(out, &self.key);
        out.push('"');
        out.push(':');
        out.push_str(&self.value);
    }

    /// Returns `"escaped-key":value` in a fresh buffer.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }
}

impl std_fmt::Display for Pair {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&self.serialize())
    }
}
