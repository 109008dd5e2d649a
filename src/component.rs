//! Blocks and items as a whole: identifier, block state and NBT.
use std::fmt;

use log::debug;

use crate::{error::Result, NbtView, TagData, Value};

/// Text of an NBT compound with nothing in it. Components leave it out.
const EMPTY_COMPOUND: &str = "{}";

/// One block state property of a component, built from a typed field.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub value: Value,
}

impl Property {
    pub fn new(name: &'static str, value: impl Into<Value>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A block or item definition, rendered as `id[state]{nbt}`.
///
/// Implementors declare their properties explicitly and in order. An unset
/// optional property should still be listed, with a [`Value::Null`] value;
/// it is left out when rendering.
///
/// ```
/// use mcct::{Component, Property};
///
/// struct Lever {
///     powered: Option<bool>,
/// }
///
/// impl Component for Lever {
///     const ID: Option<&'static str> = Some("minecraft:lever");
///
///     fn properties(&self) -> Vec<Property> {
///         vec![Property::new("powered", self.powered)]
///     }
/// }
///
/// assert_eq!(Lever { powered: Some(true) }.render().unwrap(), "minecraft:lever[powered=true]");
/// assert_eq!(Lever { powered: None }.render().unwrap(), "minecraft:lever");
/// ```
pub trait Component {
    /// The namespaced identifier, eg `minecraft:chest`.
    const ID: Option<&'static str>;

    fn properties(&self) -> Vec<Property> {
        Vec::new()
    }

    /// The NBT payload, if this kind of component carries one.
    fn nbt(&self) -> Option<&dyn NbtView> {
        None
    }

    fn tag_data(&self) -> TagData {
        self.properties()
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect()
    }

    /// Render the full `id[state]{nbt}` string. The state is left out when
    /// no property is set, and the NBT when it renders as `{}`.
    fn render(&self) -> Result<String> {
        let pairs = self.tag_data().parse()?;
        let tag_text = if pairs.is_empty() {
            String::new()
        } else {
            format!("[{}]", pairs.join(","))
        };

        let nbt_text = match self.nbt() {
            Some(nbt) => {
                let text = nbt.render_nbt()?;
                if text == EMPTY_COMPOUND {
                    String::new()
                } else {
                    text
                }
            }
            None => String::new(),
        };

        let rendered = format!("{}{}{}", Self::ID.unwrap_or(""), tag_text, nbt_text);
        debug!("rendered {}", rendered);
        Ok(rendered)
    }

    /// Adapter implementing [`Display`](fmt::Display) through
    /// [`render`](Self::render). Render errors surface as [`fmt::Error`].
    fn display(&self) -> Rendered<'_, Self>
    where
        Self: Sized,
    {
        Rendered(self)
    }
}

pub struct Rendered<'a, C>(&'a C);

impl<C: Component> fmt::Display for Rendered<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
