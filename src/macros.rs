/// Builds a pre-serialized [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects and arrays are assembled eagerly through the same accumulation
/// path as the builder types, so the result is final text, not a tree.
///
/// # Examples
///
/// ```rust
/// use jss::jss;
///
/// let v = jss!({
///     "name": "Alice",
///     "scores": [1, 2, 3],
///     "active": true,
///     "extra": null
/// });
///
/// assert_eq!(
///     v.serialize(),
///     r#"{"name":"Alice","scores":[1,2,3],"active":true,"extra":null}"#
/// );
/// ```
///
/// Integer literals larger than `i32` and negative literals need an explicit
/// typed expression (for example `jss!((-5i64))`), matching ordinary `From`
/// conversion rules.
#[macro_export]
macro_rules! jss {
    // null literal
    (null) => {
        $crate::Value::null()
    };

    // arrays
    ([ $($elem:tt),* $(,)? ]) => {{
        let mut array = $crate::Array::new();
        $( array.push($crate::jss!($elem)); )*
        $crate::Value::from(&array)
    }};

    // objects
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Object::new();
        $( object.push(&$crate::Pair::new($key, $crate::jss!($value))); )*
        $crate::Value::from(&object)
    }};

    // any expression convertible to a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
