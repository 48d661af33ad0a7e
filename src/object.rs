//! Append-only JSON object construction.
//!
//! An [`Object`] accumulates `"key":value` fragments into a single growing
//! buffer, comma-joined, and wraps them in braces at serialize time. There is
//! no field lookup, update, or removal; duplicate keys are preserved in
//! insertion order and last-wins semantics are left to downstream JSON
//! consumers.
//!
//! ## Building objects
//!
//! ```rust
//! use jss::{Object, Value};
//!
//! let mut obj = Object::new();
//! obj.set("name", "Alice").set("age", 30);
//!
//! let mut nested = Object::new();
//! nested.set("int", 0);
//! obj.set("object", &nested);
//!
//! assert_eq!(
//!     obj.serialize(),
//!     r#"{"name":"Alice","age":30,"object":{"int":0}}"#
//! );
//! ```
//!
//! ## One-shot field slots
//!
//! [`Object::field`] returns a [`FieldSlot`] that can assign its field at
//! most once; the second attempt fails without mutating the object:
//!
//! ```rust
//! use jss::Object;
//!
//! let mut obj = Object::new();
//! let mut slot = obj.field("x");
//! assert!(slot.try_set(1).is_ok());
//! assert!(slot.try_set(2).is_err());
//! drop(slot);
//! assert_eq!(obj.serialize(), r#"{"x":1}"#);
//! ```

use crate::error::{Error, Result};
use crate::pair::Pair;
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;

/// An append-only accumulator of JSON object fields.
///
/// The buffer holds the comma-joined inner contents without the surrounding
/// braces; it is empty exactly when no field has been appended, and never
/// begins or ends with a comma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    body: String,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pre-built pair, comma-separated from any previous field.
    ///
    /// This is the primitive every other append path routes through.
    pub fn push(&mut self, field: &Pair) -> &mut Self {
        if !self.body.is_empty() {
            self.body.push(',');
        }
        field.serialize_into(&mut self.body);
        self
    }

    /// Appends one field built from `name` and `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jss::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("a", 1).set("b", true);
    /// assert_eq!(obj.serialize(), r#"{"a":1,"b":true}"#);
    /// ```
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.push(&Pair::new(name, value))
    }

    /// Returns a single-use assignment slot for the field `name`.
    ///
    /// The slot borrows this object mutably, so it must be dropped before the
    /// object is used again.
    pub fn field(&mut self, name: impl Into<String>) -> FieldSlot<'_> {
        FieldSlot {
            target: Some(self),
            name: name.into(),
        }
    }

    /// Wraps the accumulated fields in braces and appends them to `out`.
    pub fn serialize_into(&self, out: &mut String) {
        out.reserve(self.body.len() + 2);
        out.push('{');
        out.push_str(&self.body);
        out.push('}');
    }

    /// Returns the serialized object text. An empty object yields `{}`.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Batch append: one field per `(name, value)` entry, in iteration order.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use jss::Object;
///
/// let mut scores = IndexMap::new();
/// scores.insert("alice".to_string(), 10);
/// scores.insert("bob".to_string(), 7);
///
/// let mut obj = Object::new();
/// obj.extend(scores);
/// assert_eq!(obj.serialize(), r#"{"alice":10,"bob":7}"#);
/// ```
impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (name, value) in entries {
            self.push(&Pair::new(name, value));
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut obj = Object::new();
        obj.extend(entries);
        obj
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Object {
    fn from(map: IndexMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

/// A single-use assignment handle for one object field.
///
/// Returned by [`Object::field`]. The first successful [`try_set`] appends
/// the field and consumes the handle's back-reference; every later attempt
/// returns [`Error::SlotConsumed`] and performs no mutation.
///
/// [`try_set`]: FieldSlot::try_set
#[derive(Debug)]
pub struct FieldSlot<'a> {
    target: Option<&'a mut Object>,
    name: String,
}

impl FieldSlot<'_> {
    /// Assigns the field, exactly once per slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotConsumed`] if this slot has already assigned its
    /// field.
    pub fn try_set(&mut self, value: impl Into<Value>) -> Result<()> {
        match self.target.take() {
            Some(obj) => {
                obj.push(&Pair::new(self.name.as_str(), value));
                Ok(())
            }
            None => Err(Error::SlotConsumed {
                key: self.name.clone(),
            }),
        }
    }

    /// Returns `true` once the slot has assigned its field.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.target.is_none()
    }
}
