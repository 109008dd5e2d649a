//! Ready made block definitions.
//!
//! ```
//! use mcct::blocks::{BellAttachment, BellBlock, Cardinal};
//! use mcct::Component;
//!
//! let bell = BellBlock {
//!     attachment: Some(BellAttachment::SingleWall),
//!     facing: Some(Cardinal::South),
//! };
//! assert_eq!(bell.render().unwrap(), "minecraft:bell[attachment=single_wall,facing=south]");
//! ```
use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    Compound, Component, NbtData, NbtView, Property, Value,
};

/// Defines a block state property whose value is one of a fixed set of names.
macro_rules! property_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(Error::bespoke(format!(
                        "unknown {} value: {:?}",
                        stringify!($name),
                        s
                    ))),
                }
            }
        }

        impl From<$name> for Value {
            fn from(v: $name) -> Self {
                Value::String(v.as_str().to_owned())
            }
        }
    };
}

property_enum! {
    /// A horizontal direction.
    Cardinal {
        North => "north",
        East => "east",
        South => "south",
        West => "west",
    }
}

property_enum! {
    /// What a bell hangs from.
    BellAttachment {
        SingleWall => "single_wall",
        Floor => "floor",
        Ceiling => "ceiling",
    }
}

property_enum! {
    /// Whether a chest stands alone or is one half of a double chest.
    ChestType {
        Single => "single",
        Left => "left",
        Right => "right",
    }
}

/// A bell block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BellBlock {
    /// The attachment type of the bell.
    pub attachment: Option<BellAttachment>,
    /// The direction the bell is facing.
    pub facing: Option<Cardinal>,
}

impl Component for BellBlock {
    const ID: Option<&'static str> = Some("minecraft:bell");

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("attachment", self.attachment),
            Property::new("facing", self.facing),
        ]
    }
}

/// An item stored in a chest.
#[derive(Debug, Clone, PartialEq)]
pub struct ChestSlot {
    /// Index of the slot the item is in.
    pub slot: i8,
    pub id: String,
    pub count: i8,
    /// The item's own NBT.
    pub tag: NbtData,
}

impl ChestSlot {
    pub fn new(slot: i8, id: impl Into<String>, count: i8) -> Self {
        Self {
            slot,
            id: id.into(),
            count,
            tag: NbtData::new(),
        }
    }

    pub fn with_tag(mut self, tag: NbtData) -> Self {
        self.tag = tag;
        self
    }
}

/// A slot as NBT: `{Slot:0,id:"minecraft:egg",Count:1,tag:{...}}`.
impl From<&ChestSlot> for Value {
    fn from(slot: &ChestSlot) -> Self {
        let mut item = Compound::with_capacity(4);
        item.insert("Slot".to_owned(), slot.slot.into());
        item.insert("id".to_owned(), slot.id.as_str().into());
        item.insert("Count".to_owned(), slot.count.into());
        item.insert("tag".to_owned(), slot.tag.entries().clone().into());
        Value::Compound(item)
    }
}

/// The NBT of a chest. Only `Lock` and `Items` are exposed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChestNbt {
    /// When set, the chest only opens for a player holding an item named
    /// exactly this.
    pub lock: Option<String>,
    pub items: Vec<ChestSlot>,
}

impl NbtView for ChestNbt {
    fn nbt_view(&self) -> Result<Compound> {
        let items = self.items.iter().map(Value::from).collect();
        let mut view = Compound::with_capacity(2);
        view.insert("Lock".to_owned(), Value::from(self.lock.as_deref()));
        view.insert("Items".to_owned(), Value::List(items));
        Ok(view)
    }
}

/// A chest block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChestBlock {
    /// The direction the chest is facing.
    pub facing: Option<Cardinal>,
    pub chest_type: Option<ChestType>,
    pub waterlogged: Option<bool>,
    pub nbt: ChestNbt,
}

impl Component for ChestBlock {
    const ID: Option<&'static str> = Some("minecraft:chest");

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("facing", self.facing),
            Property::new("type", self.chest_type),
            Property::new("waterlogged", self.waterlogged),
        ]
    }

    fn nbt(&self) -> Option<&dyn NbtView> {
        Some(&self.nbt)
    }
}
