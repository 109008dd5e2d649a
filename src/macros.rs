/// Produce a [`Value`][`crate::Value`] using JSON-like syntax.
///
/// ```rust
/// use mcct::value;
/// let _ = value!({
///     "Lock": "secret_key",
///     "Items": [
///         { "Slot": 0, "id": "minecraft:egg", "Count": 1 },
///     ],
///     "CustomName": null,
/// });
/// ```
///
/// Compound keys keep the order they are written in. A key is either a
/// string literal or a parenthesized expression, `"Lock"` above could not be
/// written as just `Lock`. Any expression convertible with `Into<Value>` can
/// be used as a value.
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    ([ $($elems:tt)* ]) => {
        $crate::Value::List($crate::__value_list!([] $($elems)*))
    };

    ({}) => {
        $crate::Value::Compound($crate::Compound::new())
    };

    ({ $($entries:tt)+ }) => {{
        let mut compound = $crate::Compound::new();
        $crate::__value_entries!(compound; $($entries)+);
        $crate::Value::Compound(compound)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Splits list elements on top level commas. Tokens of the element being read
/// collect in the parentheses.
#[macro_export]
#[doc(hidden)]
macro_rules! __value_list {
    ([$($done:expr,)*]) => {
        ::std::vec![$($done),*]
    };

    ([$($done:expr,)*] $($rest:tt)+) => {
        $crate::__value_list!(@elem [$($done,)*] () $($rest)+)
    };

    (@elem [$($done:expr,)*] ($($cur:tt)+) , $($rest:tt)*) => {
        $crate::__value_list!([$($done,)* $crate::value!($($cur)+),] $($rest)*)
    };

    (@elem [$($done:expr,)*] ($($cur:tt)+)) => {
        $crate::__value_list!([$($done,)* $crate::value!($($cur)+),])
    };

    (@elem [$($done:expr,)*] ($($cur:tt)*) $next:tt $($rest:tt)*) => {
        $crate::__value_list!(@elem [$($done,)*] ($($cur)* $next) $($rest)*)
    };
}

/// Inserts `key: value` entries into the named compound, in order. A key is a
/// single token: a string literal or a parenthesized expression.
#[macro_export]
#[doc(hidden)]
macro_rules! __value_entries {
    ($compound:ident;) => {};

    ($compound:ident; $key:tt : $($rest:tt)+) => {
        $crate::__value_entries!(@value $compound; $key; () $($rest)+)
    };

    (@value $compound:ident; $key:expr; ($($v:tt)+) , $($rest:tt)*) => {
        let _ = $compound.insert(::std::string::String::from($key), $crate::value!($($v)+));
        $crate::__value_entries!($compound; $($rest)*);
    };

    (@value $compound:ident; $key:expr; ($($v:tt)+)) => {
        let _ = $compound.insert(::std::string::String::from($key), $crate::value!($($v)+));
    };

    (@value $compound:ident; $key:expr; ($($v:tt)*) $next:tt $($rest:tt)*) => {
        $crate::__value_entries!(@value $compound; $key; ($($v)* $next) $($rest)*)
    };
}
