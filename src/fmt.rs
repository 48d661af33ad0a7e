//! Scalar formatting and string escaping.
//!
//! Everything the crate emits is produced here: each supported scalar kind
//! maps to exactly one textual form, and every string destined for the output
//! (keys and values alike) goes through [`push_escaped`]. Formatting is
//! infallible; there is no scalar that fails to render.

use crate::precision;

/// A single scalar value tagged with its kind.
///
/// Scalars have no identity beyond the text they render to; they exist only
/// long enough to be formatted into a fragment buffer.
pub(crate) enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    Float { value: f64, digits: Option<u32> },
    Str(&'a str),
    Null,
}

impl Scalar<'_> {
    /// Appends the JSON text for this scalar to `out`.
    pub(crate) fn write_to(&self, out: &mut String) {
        match *self {
            Scalar::Bool(b) => out.push_str(if b { "true" } else { "false" }),
            Scalar::Int(i) => out.push_str(&i.to_string()),
            Scalar::Float { value, digits } => {
                // A per-value override wins only when positive; otherwise the
                // process-wide precision applies.
                let digits = digits
                    .filter(|&d| d > 0)
                    .map_or_else(precision::precision, |d| d as usize);
                out.push_str(&format!("{:.*}", digits, value));
            }
            Scalar::Str(s) => {
                out.reserve(s.len() + 2);
                out.push('"');
                push_escaped(out, s);
                out.push('"');
            }
            Scalar::Null => out.push_str("null"),
        }
    }

    /// Renders this scalar into a fresh buffer.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// Appends `s` to `out` with the partial escape set applied.
///
/// Exactly four characters are escaped: carriage return, line feed,
/// horizontal tab, and the double quote. Backslash and the remaining control
/// characters pass through verbatim; downstream consumers of this format
/// depend on that exact behavior, so the set must not be broadened.
pub(crate) fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        let mut out = String::new();
        push_escaped(&mut out, s);
        out
    }

    #[test]
    fn escapes_the_partial_set() {
        assert_eq!(escaped("a\rb"), "a\\rb");
        assert_eq!(escaped("a\nb"), "a\\nb");
        assert_eq!(escaped("a\tb"), "a\\tb");
        assert_eq!(escaped("a\"b"), "a\\\"b");
        assert_eq!(escaped("\r\n\t\""), "\\r\\n\\t\\\"");
    }

    #[test]
    fn leaves_backslash_and_other_controls_alone() {
        assert_eq!(escaped("a\\b"), "a\\b");
        assert_eq!(escaped("a\u{0}b"), "a\u{0}b");
        assert_eq!(escaped("a\u{8}b"), "a\u{8}b");
    }

    #[test]
    fn passes_non_ascii_through() {
        assert_eq!(escaped("héllo"), "héllo");
        assert_eq!(escaped("日本語"), "日本語");
    }

    #[test]
    fn formats_booleans_and_null() {
        assert_eq!(Scalar::Bool(true).render(), "true");
        assert_eq!(Scalar::Bool(false).render(), "false");
        assert_eq!(Scalar::Null.render(), "null");
    }

    #[test]
    fn formats_integers() {
        assert_eq!(Scalar::Int(0).render(), "0");
        assert_eq!(Scalar::Int(-123).render(), "-123");
        assert_eq!(Scalar::Int(i64::MAX).render(), "9223372036854775807");
    }

    #[test]
    fn float_override_is_fixed_point() {
        let s = Scalar::Float {
            value: 123.456789,
            digits: Some(3),
        };
        assert_eq!(s.render(), "123.457");

        let s = Scalar::Float {
            value: -123.456,
            digits: Some(3),
        };
        assert_eq!(s.render(), "-123.456");

        // Large magnitudes stay in fixed-point notation.
        let s = Scalar::Float {
            value: 1.0e9,
            digits: Some(2),
        };
        assert_eq!(s.render(), "1000000000.00");
    }

    #[test]
    fn quotes_strings() {
        assert_eq!(Scalar::Str("string").render(), "\"string\"");
        assert_eq!(Scalar::Str("").render(), "\"\"");
    }
}
