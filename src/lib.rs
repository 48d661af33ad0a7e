//! # jss
//!
//! An eager, append-only JSON text builder.
//!
//! `jss` converts a fixed set of value kinds — booleans, integers, floats,
//! strings, and null — into JSON text through incremental string
//! construction. Every append renders its argument immediately and stores
//! final text; there is no value tree and no deferred serialization pass.
//! The crate builds JSON only: parsing, schema validation, and streaming I/O
//! are out of scope.
//!
//! ## Quick Start
//!
//! ```rust
//! use jss::{Array, Object, Value};
//!
//! let mut tags = Array::new();
//! tags.push("admin").push("ops");
//!
//! let mut user = Object::new();
//! user.set("name", "Alice")
//!     .set("age", 30)
//!     .set("active", true)
//!     .set("tags", &tags);
//!
//! assert_eq!(
//!     user.serialize(),
//!     r#"{"name":"Alice","age":30,"active":true,"tags":["admin","ops"]}"#
//! );
//! ```
//!
//! Or build a whole document from a literal with the [`jss!`] macro:
//!
//! ```rust
//! use jss::jss;
//!
//! let doc = jss!({ "ok": true, "ids": [1, 2, 3] });
//! assert_eq!(doc.serialize(), r#"{"ok":true,"ids":[1,2,3]}"#);
//! ```
//!
//! ## Float precision
//!
//! Floats render in fixed-point notation with a configurable decimal digit
//! count: a per-value override via [`Value::float_with_precision`], or the
//! process-wide default managed by [`set_precision`] (6 digits unless
//! changed). Precision is applied when the fragment is *constructed*, so a
//! later `set_precision` never rewrites existing fragments.
//!
//! ## Escaping policy
//!
//! Strings — both keys and values — receive a deliberately partial escape:
//! carriage return, line feed, tab, and the double quote are escaped, and
//! nothing else is. In particular backslash passes through verbatim. This
//! matches the wire format existing consumers already parse; callers feeding
//! untrusted text that may contain backslashes or other control characters
//! must pre-sanitize if strict JSON compliance is required.
//!
//! ## Builder semantics
//!
//! - Containers are append-only: no lookup, update, or removal.
//! - Duplicate object keys are kept in insertion order; last-wins is left to
//!   the downstream JSON consumer.
//! - [`Object::field`] returns a single-use [`FieldSlot`] whose second
//!   `try_set` fails with [`Error::SlotConsumed`] instead of appending twice.
//! - String values escape at construction; keys re-escape at serialize time.
//!   Serialization is a pure read either way and may be repeated freely.

pub mod array;
pub mod error;
mod fmt;
mod macros;
pub mod object;
pub mod pair;
pub mod precision;
pub mod value;

pub use array::Array;
pub use error::{Error, Result};
pub use object::{FieldSlot, Object};
pub use pair::Pair;
pub use precision::{precision, set_precision, DEFAULT_PRECISION};
pub use value::Value;
