//! This module contains a serde serializer for the NBT text used in commands.
//! Use [`to_string`](crate::to_string) or [`to_writer`](crate::to_writer).
//!
//! Compound keys are written bare when Minecraft accepts them unquoted, string
//! values are always double-quoted. Numbers carry no type suffix, so `1u8` and
//! `1i64` both render as `1`.
//!
//! Some Rust structures have no sensible mapping to NBT text: `None`, `()`,
//! non-finite floats, and enum variants carrying tuples or structs. These
//! result in a [`Conversion`](crate::error::ErrorKind::Conversion) error
//! rather than a panic.

use std::io::Write;

use serde::{
    ser::{self, Impossible, SerializeMap},
    Serialize,
};

use crate::error::{Error, Result};

use self::name_serializer::NameSerializer;

mod name_serializer;

/// Write `text` double-quoted, escaping `"` and `\`.
pub(crate) fn write_quoted<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(b"\"")?;
    let mut rest = text;
    while let Some(at) = rest.find(|c: char| c == '"' || c == '\\') {
        out.write_all(rest[..at].as_bytes())?;
        out.write_all(b"\\")?;
        out.write_all(rest[at..at + 1].as_bytes())?;
        rest = &rest[at + 1..];
    }
    out.write_all(rest.as_bytes())?;
    out.write_all(b"\"")?;
    Ok(())
}

/// Whether Minecraft accepts `key` as a compound key without quotes.
pub(crate) fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'+'))
}

/// Writes NBT text to any [`Write`].
pub struct Serializer<W> {
    out: W,
}

impl<W: Write> Serializer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn raw(&mut self, text: &[u8]) -> Result<()> {
        Ok(self.out.write_all(text)?)
    }

    fn float<F>(&mut self, v: F) -> Result<()>
    where
        F: ryu::Float + Into<f64> + Copy,
    {
        let wide: f64 = v.into();
        if !wide.is_finite() {
            return Err(Error::non_finite_float(wide));
        }
        self.raw(ryu::Buffer::new().format_finite(v).as_bytes())
    }
}

macro_rules! integers {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(fn $method(self, v: $ty) -> Result<()> {
            self.raw(itoa::Buffer::new().format(v).as_bytes())
        })*
    };
}

impl<'a, W: Write> ser::Serializer for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    type SerializeSeq = Nested<'a, W>;
    type SerializeTuple = Nested<'a, W>;
    type SerializeTupleStruct = Nested<'a, W>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Nested<'a, W>;
    type SerializeStruct = Nested<'a, W>;
    type SerializeStructVariant = Impossible<(), Error>;

    integers! {
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
    }

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.raw(if v { b"true" } else { b"false" })
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.float(v)
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.float(v)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.serialize_str(v.encode_utf8(&mut [0; 4]))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        write_quoted(&mut self.out, v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        let mut list = Nested::open(self, b'[', b']')?;
        for byte in v {
            list.element(byte)?;
        }
        list.close()
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::null_value())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Err(Error::null_value())
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<()> {
        Err(Error::unsupported(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, variant: &'static str) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    /// Written as a compound with the variant as its only key.
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()> {
        let mut compound = Nested::open(self, b'{', b'}')?;
        compound.serialize_entry(variant, value)?;
        compound.close()
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Nested<'a, W>> {
        Nested::open(self, b'[', b']')
    }

    fn serialize_tuple(self, _: usize) -> Result<Nested<'a, W>> {
        Nested::open(self, b'[', b']')
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Nested<'a, W>> {
        Nested::open(self, b'[', b']')
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported(&format!("tuple variant {}::{}", name, variant)))
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Nested<'a, W>> {
        Nested::open(self, b'{', b'}')
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Nested<'a, W>> {
        Nested::open(self, b'{', b'}')
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported(&format!("struct variant {}::{}", name, variant)))
    }
}

/// A list or compound being written. The opening bracket is written up front,
/// so one with no entries still renders as `[]` or `{}`.
pub struct Nested<'a, W> {
    ser: &'a mut Serializer<W>,
    closing: u8,
    empty: bool,
}

impl<'a, W: Write> Nested<'a, W> {
    fn open(ser: &'a mut Serializer<W>, opening: u8, closing: u8) -> Result<Self> {
        ser.raw(&[opening])?;
        Ok(Self {
            ser,
            closing,
            empty: true,
        })
    }

    fn separate(&mut self) -> Result<()> {
        if self.empty {
            self.empty = false;
            Ok(())
        } else {
            self.ser.raw(b",")
        }
    }

    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.separate()?;
        value.serialize(&mut *self.ser)
    }

    fn close(self) -> Result<()> {
        self.ser.raw(&[self.closing])
    }
}

macro_rules! list_like {
    ($($tr:ident::$method:ident),*) => {
        $(impl<'a, W: Write> ser::$tr for Nested<'a, W> {
            type Ok = ();
            type Error = Error;

            fn $method<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
                self.element(value)
            }

            fn end(self) -> Result<()> {
                self.close()
            }
        })*
    };
}

list_like!(
    SerializeSeq::serialize_element,
    SerializeTuple::serialize_element,
    SerializeTupleStruct::serialize_field
);

impl<'a, W: Write> ser::SerializeMap for Nested<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.separate()?;
        key.serialize(NameSerializer::new(&mut self.ser.out))?;
        self.ser.raw(b":")
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl<'a, W: Write> ser::SerializeStruct for Nested<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.serialize_entry(key, value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}
