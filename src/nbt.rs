//! NBT compounds rendered as Minecraft's NBT text.
//!
//! Rendering goes in three steps. The compound to render is taken from an
//! [`NbtView`], every value is passed through [`convert`], and empty or unset
//! entries are pruned. What is left is written with unquoted keys and quoted
//! string values:
//!
//! ```
//! # use mcct::{value, NbtData};
//! let mut nbt = NbtData::new();
//! nbt.insert("id", "minecraft:egg")
//!     .insert("Count", 1)
//!     .insert("tag", value!({ "Enchantments": [] }));
//! assert_eq!(nbt.render().unwrap(), r#"{id:"minecraft:egg",Count:1}"#);
//! ```
//!
//! # Pruning
//!
//! An entry is pruned when its value is [`Value::Null`], an empty list or an
//! empty compound. This applies to compounds at every depth, including
//! compounds held in lists or in lists of lists, and is applied bottom up: a
//! compound that only held pruned entries is itself pruned. List elements are
//! never removed.
use log::trace;
use serde::Serialize;

use crate::{convert, convert::convert_compound, error::Result, to_string, Compound, Value};

/// The compound a type exposes as its NBT.
///
/// Implement this to choose which of a type's fields end up in the rendered
/// NBT, and under what names. A chest for instance only exposes `Lock` and
/// `Items`.
pub trait NbtView {
    fn nbt_view(&self) -> Result<Compound>;

    /// The pruned and converted compound that [`render_nbt`](Self::render_nbt)
    /// writes out.
    fn parse_nbt(&self) -> Result<Compound> {
        let view = self.nbt_view()?;
        let mut parsed = Compound::with_capacity(view.len());

        for (key, value) in &view {
            match convert(value).and_then(prune) {
                Some(v) => {
                    parsed.insert(key.clone(), v);
                }
                None => trace!("pruned {}", key),
            }
        }

        Ok(convert_compound(&parsed))
    }

    /// Render the view as NBT text. An empty view renders as `{}`.
    fn render_nbt(&self) -> Result<String> {
        to_string(&Value::Compound(self.parse_nbt()?))
    }
}

/// Prune a converted value, `None` if nothing is left of it.
fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Compound(compound) => {
            let compound: Compound = compound
                .into_iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                .collect();
            (!compound.is_empty()).then_some(Value::Compound(compound))
        }
        Value::List(list) if list.is_empty() => None,
        Value::List(list) => Some(Value::List(list.into_iter().map(prune_within).collect())),
        other => Some(other),
    }
}

/// Prune the inside of a list element. The element itself always stays, a
/// compound left with nothing renders as `{}`.
pub(crate) fn prune_within(value: Value) -> Value {
    match value {
        Value::Compound(_) => prune(value).unwrap_or_else(|| Value::Compound(Compound::new())),
        Value::List(list) => Value::List(list.into_iter().map(prune_within).collect()),
        other => other,
    }
}

/// NBT data of anything: a free-form compound.
///
/// Also usable as a nested payload, such as the `tag` of an item in a chest
/// slot, since it serializes as its compound.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct NbtData {
    entries: Compound,
}

impl NbtData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, keeping insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> &Compound {
        &self.entries
    }

    /// Whether the data holds no entries at all. Note that non-empty data can
    /// still render as `{}` when everything in it is pruned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parse(&self) -> Result<Compound> {
        self.parse_nbt()
    }

    pub fn render(&self) -> Result<String> {
        self.render_nbt()
    }
}

impl NbtView for NbtData {
    fn nbt_view(&self) -> Result<Compound> {
        Ok(self.entries.clone())
    }
}

impl From<Compound> for NbtData {
    fn from(entries: Compound) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for NbtData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
