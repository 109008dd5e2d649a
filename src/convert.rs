//! Conversion of a [`Value`] into the shape Minecraft's command syntax wants.
use log::trace;

use crate::{Compound, Value};

/// Converts a value to Minecraft's syntax. `None` means the value is omitted
/// and whichever key holds it should be left out of the output.
///
/// * Booleans become the strings `"true"` and `"false"`.
/// * Empty lists are omitted. Other lists are returned as they are, their
///   elements are not converted.
/// * Compounds are converted entry by entry. Entries whose value is omitted are
///   removed, but the compound itself is kept even if that leaves it empty.
/// * Everything else, including [`Value::Null`], is returned unchanged.
///
/// ```
/// # use mcct::{convert, value, Value};
/// assert_eq!(convert(&Value::Bool(true)), Some(Value::from("true")));
/// assert_eq!(convert(&value!([])), None);
/// assert_eq!(
///     convert(&value!({ "a": [], "b": false })),
///     Some(value!({ "b": "false" })),
/// );
/// ```
pub fn convert(value: &Value) -> Option<Value> {
    match value {
        Value::Compound(compound) => Some(Value::Compound(convert_compound(compound))),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        Value::List(list) if list.is_empty() => None,
        other => Some(other.clone()),
    }
}

pub(crate) fn convert_compound(compound: &Compound) -> Compound {
    compound
        .iter()
        .filter_map(|(key, value)| match convert(value) {
            Some(converted) => Some((key.clone(), converted)),
            None => {
                trace!("omitting {}", key);
                None
            }
        })
        .collect()
}
