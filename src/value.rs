//! Pre-serialized JSON value fragments.
//!
//! A [`Value`] owns one span of text that is always a syntactically complete
//! JSON value. It is produced eagerly: every constructor formats its argument
//! immediately and stores the result, so serialization later is a plain
//! append with no tree walk.
//!
//! ## Creating Values
//!
//! ```rust
//! use jss::Value;
//!
//! let b = Value::bool(true);
//! let i = Value::int(-123);
//! let s = Value::string("hello");
//! let n = Value::null();
//!
//! assert_eq!(b.serialize(), "true");
//! assert_eq!(i.serialize(), "-123");
//! assert_eq!(s.serialize(), "\"hello\"");
//! assert_eq!(n.serialize(), "null");
//! ```
//!
//! `From` conversions cover the native scalar types, `Option` (where `None`
//! maps to JSON null), and the container types:
//!
//! ```rust
//! use jss::{Array, Value};
//!
//! let v = Value::from(Some(42));
//! assert_eq!(v.serialize(), "42");
//!
//! let v = Value::from(Option::<i64>::None);
//! assert_eq!(v.serialize(), "null");
//!
//! let mut ary = Array::new();
//! ary.push(1).push(2);
//! let v = Value::from(&ary);
//! assert_eq!(v.serialize(), "[1,2]");
//! ```

use crate::array::Array;
use crate::fmt::Scalar;
use crate::object::Object;
use std::fmt;

/// An immutable, pre-serialized JSON value fragment.
///
/// The stored text is always a complete JSON value, never a partial span.
/// Construction formats eagerly; afterwards the only operations are reads.
/// Moving a `Value` transfers the buffer without re-formatting, cloning
/// duplicates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub(crate) text: String,
}

impl Value {
    /// Creates a boolean fragment (`true` or `false`).
    #[must_use]
    pub fn bool(v: bool) -> Self {
        Value {
            text: Scalar::Bool(v).render(),
        }
    }

    /// Creates an integer fragment in decimal notation.
    #[must_use]
    pub fn int(v: i64) -> Self {
        Value {
            text: Scalar::Int(v).render(),
        }
    }

    /// Creates a float fragment using the process-wide precision.
    ///
    /// The digit count is read once, here; later calls to
    /// [`set_precision`](crate::set_precision) do not affect this fragment.
    /// Output is always fixed-point, never scientific notation.
    ///
    /// Non-finite floats render as `inf`/`NaN`, which is not valid JSON;
    /// callers feeding untrusted floats should check finiteness first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jss::Value;
    ///
    /// assert_eq!(Value::float(1.5).serialize(), "1.500000");
    /// ```
    #[must_use]
    pub fn float(v: f64) -> Self {
        Value {
            text: Scalar::Float {
                value: v,
                digits: None,
            }
            .render(),
        }
    }

    /// Creates a float fragment with an explicit decimal digit count.
    ///
    /// A positive `digits` overrides the process-wide precision for this one
    /// value; zero falls back to the process-wide setting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jss::Value;
    ///
    /// assert_eq!(Value::float_with_precision(123.456789, 3).serialize(), "123.457");
    /// assert_eq!(Value::float_with_precision(123.456789, 4).serialize(), "123.4568");
    /// ```
    #[must_use]
    pub fn float_with_precision(v: f64, digits: u32) -> Self {
        Value {
            text: Scalar::Float {
                value: v,
                digits: Some(digits),
            }
            .render(),
        }
    }

    /// Creates a string fragment: quoted, with the partial escape applied.
    ///
    /// Carriage return, line feed, tab, and the double quote are escaped;
    /// backslash and other control characters pass through verbatim. See the
    /// crate-level documentation for the rationale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jss::Value;
    ///
    /// assert_eq!(Value::string("a\tb").serialize(), "\"a\\tb\"");
    /// ```
    #[must_use]
    pub fn string(v: &str) -> Self {
        Value {
            text: Scalar::Str(v).render(),
        }
    }

    /// Creates the `null` fragment.
    #[must_use]
    pub fn null() -> Self {
        Value {
            text: Scalar::Null.render(),
        }
    }

    /// Appends the stored fragment to `out`.
    pub fn serialize_into(&self, out: &mut String) {
        out.push_str(&self.text);
    }

    /// Returns the stored fragment in a fresh buffer.
    ///
    /// Pure read; callable any number of times with identical output.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::bool(v)
    }
}

macro_rules! value_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::int(i64::from(v))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::string(&v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::null(),
        }
    }
}

impl From<&Array> for Value {
    fn from(ary: &Array) -> Self {
        Value {
            text: ary.serialize(),
        }
    }
}

impl From<Array> for Value {
    fn from(ary: Array) -> Self {
        Value::from(&ary)
    }
}

impl From<&Object> for Value {
    fn from(obj: &Object) -> Self {
        Value {
            text: obj.serialize(),
        }
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::from(&obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fragments() {
        assert_eq!(Value::bool(true).serialize(), "true");
        assert_eq!(Value::bool(false).serialize(), "false");
        assert_eq!(Value::int(0).serialize(), "0");
        assert_eq!(Value::int(-123).serialize(), "-123");
        assert_eq!(Value::null().serialize(), "null");
        assert_eq!(Value::string("string").serialize(), "\"string\"");
    }

    #[test]
    fn string_values_escape_at_construction() {
        let v = Value::string("v\na\rl\tu\"e");
        assert_eq!(v.serialize(), r#""v\na\rl\tu\"e""#);
    }

    #[test]
    fn serialize_into_appends() {
        let mut out = String::from("[");
        Value::int(7).serialize_into(&mut out);
        out.push(']');
        assert_eq!(out, "[7]");
    }

    #[test]
    fn serialize_is_repeatable() {
        let v = Value::float_with_precision(1.0, 2);
        assert_eq!(v.serialize(), "1.00");
        assert_eq!(v.serialize(), "1.00");
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(Option::<i32>::None).serialize(), "null");
        assert_eq!(Value::from(Some("x")).serialize(), "\"x\"");
    }
}
