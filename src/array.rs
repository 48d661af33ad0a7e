//! Append-only JSON array construction.
//!
//! An [`Array`] accumulates element fragments into a single growing buffer,
//! comma-joined, and wraps them in brackets at serialize time. Like
//! [`Object`](crate::Object) it is append-only: no element lookup, update,
//! or removal.
//!
//! ```rust
//! use jss::{Array, Value};
//!
//! let mut ary = Array::new();
//! ary.push(Value::null())
//!     .push(true)
//!     .push(123)
//!     .push(Value::float_with_precision(123.456789, 3))
//!     .push("string");
//!
//! assert_eq!(ary.serialize(), r#"[null,true,123,123.457,"string"]"#);
//! ```

use crate::value::Value;
use std::fmt;

/// An append-only accumulator of JSON array elements.
///
/// The buffer holds the comma-joined element text without the surrounding
/// brackets; it is empty exactly when no element has been pushed, and never
/// begins or ends with a comma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Array {
    body: String,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one element, comma-separated from any previous element.
    ///
    /// Accepts anything convertible to a [`Value`]: scalars, `Option`
    /// (`None` becomes null), another `Value`, or a borrowed
    /// [`Object`](crate::Object) / `Array` whose serialized text is captured
    /// verbatim.
    pub fn push(&mut self, element: impl Into<Value>) -> &mut Self {
        if !self.body.is_empty() {
            self.body.push(',');
        }
        self.body.push_str(&element.into().text);
        self
    }

    /// Wraps the accumulated elements in brackets and appends them to `out`.
    pub fn serialize_into(&self, out: &mut String) {
        out.reserve(self.body.len() + 2);
        out.push('[');
        out.push_str(&self.body);
        out.push(']');
    }

    /// Returns the serialized array text. An empty array yields `[]`.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Batch append: one element per item, in iteration order.
///
/// # Examples
///
/// ```rust
/// use jss::Array;
///
/// let mut ary = Array::new();
/// ary.extend(vec![1, 2, 3]);
/// assert_eq!(ary.serialize(), "[1,2,3]");
/// ```
impl<T: Into<Value>> Extend<T> for Array {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.push(element);
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut ary = Array::new();
        ary.extend(elements);
        ary
    }
}
