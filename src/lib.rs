//! mcct renders Minecraft block states and NBT data into the text accepted by
//! commands such as `/setblock` and `/give`.
//!
//! * For a block or item as a whole, see [`Component`].
//! * For block state properties (`[facing=south]`), see [`TagData`].
//! * For NBT (`{Lock:"key"}`), see [`NbtData`] and [`NbtView`].
//! * For the data model, see [`Value`] and the [`value!`] macro.
//! * Ready made blocks live in [`blocks`].
//!
//! ```toml
//! [dependencies]
//! mcct = "1"
//! ```
//!
//! # Quick example
//!
//! ```
//! use mcct::blocks::{Cardinal, ChestBlock, ChestNbt, ChestSlot};
//! use mcct::{Component, NbtData};
//!
//! let mut tag = NbtData::new();
//! tag.insert("HideFlags", 1);
//!
//! let chest = ChestBlock {
//!     facing: Some(Cardinal::North),
//!     waterlogged: Some(false),
//!     nbt: ChestNbt {
//!         lock: None,
//!         items: vec![ChestSlot::new(0, "minecraft:egg", 1).with_tag(tag)],
//!     },
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     chest.render().unwrap(),
//!     r#"minecraft:chest[facing=north,waterlogged=false]{Items:[{Slot:0,id:"minecraft:egg",Count:1,tag:{HideFlags:1}}]}"#
//! );
//! ```
//!
//! # Conversion rules
//!
//! Values go through [`convert`] before being written. Booleans become the
//! strings `true` and `false`, and empty lists are omitted together with the
//! key holding them. NBT additionally drops unset ([`Value::Null`]) entries
//! and empty compounds, see [`nbt`] for the details.
//!
//! Numbers are written without NBT type suffixes: a byte and an int both
//! render as plain digits.

use std::io::Write;

use error::Result;
use serde::Serialize;

pub mod blocks;
pub mod component;
pub mod convert;
pub mod error;
pub mod nbt;
pub mod ser;
pub mod tag;

#[macro_use]
mod macros;
mod value;

pub use component::{Component, Property};
pub use convert::convert;
pub use nbt::{NbtData, NbtView};
pub use tag::TagData;
pub use value::*;

#[cfg(test)]
mod test;

/// Serialize some `T` into NBT text, written to the given writer.
pub fn to_writer<T, W>(writer: W, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let mut serializer = ser::Serializer::new(writer);
    value.serialize(&mut serializer)
}

/// Serialize some `T` into NBT text as bytes.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut result = vec![];
    to_writer(&mut result, value)?;
    Ok(result)
}

/// Serialize some `T` into NBT text.
///
/// ```
/// # use mcct::value;
/// let text = mcct::to_string(&value!({ "id": "minecraft:egg", "display name": "Egg" })).unwrap();
/// assert_eq!(text, r#"{id:"minecraft:egg","display name":"Egg"}"#);
/// ```
///
/// This writes exactly what it is given: unlike [`NbtData::render`] nothing
/// is converted or pruned first.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let bytes = to_vec(value)?;
    String::from_utf8(bytes).map_err(|e| error::Error::bespoke(format!("non-utf8 output: {}", e)))
}
