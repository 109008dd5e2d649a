//! Block state properties, written as `[key=value,...]`.
//!
//! Not to be confused with the `tag` compound found in item NBT.
use std::borrow::Cow;

use log::trace;

use crate::{convert, error::Result, nbt::prune_within, to_string, Compound, Value};

/// Block state properties of a block, e.g. for a bell
/// `[attachment=single_wall,facing=south]`.
///
/// Values are written bare: `facing=south`, not `facing="south"`. Properties
/// whose value is omitted by [`convert`] or is [`Value::Null`] are left out.
/// A list or compound value is written as NBT text, with the same pruning as
/// [`NbtData`](crate::NbtData): `{q:null,r:1}` is written `{r:1}`.
///
/// ```
/// # use mcct::{value, TagData};
/// let tag: TagData = [("a", value!(1)), ("b", value!("x")), ("c", value!([]))]
///     .into_iter()
///     .collect();
/// assert_eq!(tag.render().unwrap(), "[a=1,b=x]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagData {
    properties: Compound,
}

impl TagData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, keeping insertion order. Setting an existing name
    /// replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// The properties as given, before conversion.
    pub fn properties(&self) -> &Compound {
        &self.properties
    }

    /// Parses the properties into a list of `key=value` strings.
    pub fn parse(&self) -> Result<Vec<String>> {
        let mut pairs = Vec::with_capacity(self.properties.len());

        for (key, value) in &self.properties {
            let converted = match convert(value) {
                Some(Value::Null) | None => {
                    trace!("skipping unset property {}", key);
                    continue;
                }
                Some(v) => v,
            };

            pairs.push(format!("{}={}", key, property_text(&converted)?));
        }

        Ok(pairs)
    }

    /// Whether no property survives conversion, ie `render` gives `[]`.
    pub fn is_empty(&self) -> bool {
        self.properties
            .values()
            .all(|v| matches!(convert(v), None | Some(Value::Null)))
    }

    pub fn render(&self) -> Result<String> {
        Ok(format!("[{}]", self.parse()?.join(",")))
    }
}

/// Text of a single property value. Strings are bare, containers fall back to
/// NBT text and are pruned like NBT first.
fn property_text(value: &Value) -> Result<Cow<'_, str>> {
    Ok(match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::List(_) | Value::Compound(_) => {
            Cow::Owned(to_string(&prune_within(value.clone()))?)
        }
        other => Cow::Owned(to_string(other)?),
    })
}

impl From<Compound> for TagData {
    fn from(properties: Compound) -> Self {
        Self { properties }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for TagData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
