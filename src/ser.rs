//! Serialization to variables files.
//!
//! This module provides the [`Serializer`] that writes a struct or map as one
//! `KEY="VALUE"` line per field, in field order.
//!
//! ## Field values
//!
//! Each field must be a scalar. Booleans are written as `true`/`false`,
//! floats in shortest round-trip form (see [`format_float`]) and integers in
//! decimal. `None` fields are omitted, and unit enum variants are written by
//! name. Sequences, nested maps and nested structs are rejected with
//! [`Error::UnsupportedType`].
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_vars::{Serializer, VarsOptions};
//!
//! #[derive(Serialize)]
//! struct Build {
//!     #[serde(rename = "CC")]
//!     cc: &'static str,
//!     #[serde(rename = "CGO_ENABLED")]
//!     cgo: bool,
//! }
//!
//! let mut serializer = Serializer::new(VarsOptions::default());
//! Build { cc: "gcc", cgo: true }.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "CC=\"gcc\"\nCGO_ENABLED=\"true\"\n");
//! ```
//!
//! Every written line parses back to the same key and value. Keys that are
//! not identifiers and values containing `\n` or `\r` cannot be written that
//! way and fail with [`Error::InvalidEntry`].

use crate::convert::format_bool;
use crate::float::{format_float, format_float32};
use crate::map::invalid_key_offset;
use crate::options::LineEnding;
use crate::{Error, Result, VarsOptions};
use serde::ser::{self, Impossible, Serialize};
use tracing::trace;

/// The variables file serializer.
///
/// Created via [`Serializer::new`]; the written document is retrieved with
/// [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: VarsOptions,
}

impl Serializer {
    pub fn new(options: VarsOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

/// Appends one `KEY="VALUE"` line to `out`.
///
/// # Errors
///
/// Returns [`Error::InvalidEntry`] when the line would not parse back to the
/// same key and value.
pub(crate) fn write_entry(
    out: &mut String,
    key: &str,
    value: &str,
    ending: LineEnding,
) -> Result<()> {
    if let Some(offset) = invalid_key_offset(key) {
        let msg = if key.is_empty() {
            "key is empty".to_string()
        } else {
            format!("key is not an identifier (offset {offset})")
        };
        return Err(Error::invalid_entry(key, &msg));
    }
    if value.contains(['\n', '\r']) {
        return Err(Error::invalid_entry(key, "value contains a line break"));
    }

    out.reserve(key.len() + value.len() + 5);
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
    out.push_str(ending.as_str());
    Ok(())
}

fn top_level(what: &str) -> Error {
    Error::unsupported_type(&format!(
        "{what} cannot be written as a document, expected a struct or map"
    ))
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = MapSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(top_level("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<()> {
        Err(top_level("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(top_level("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(top_level("float"))
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(top_level("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        Err(top_level("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(top_level("bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        Err(top_level("enum"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(top_level("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(top_level("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(top_level("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(top_level("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(top_level("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            current_key: None,
            written: 0,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(MapSerializer {
            ser: self,
            current_key: None,
            written: 0,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(top_level("enum"))
    }
}

/// Writes map entries and struct fields as lines.
pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    current_key: Option<String>,
    written: usize,
}

impl MapSerializer<'_> {
    fn write_field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let Some(raw) = value.serialize(RawValueSerializer).map_err(|e| match e {
            Error::UnsupportedType(msg) => Error::unsupported_type(&format!("field {key:?}: {msg}")),
            other => other,
        })?
        else {
            return Ok(());
        };
        write_entry(&mut self.ser.output, key, &raw, self.ser.options.line_ending)?;
        self.written += 1;
        Ok(())
    }
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(RawValueSerializer)? {
            Some(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            None => Err(Error::custom("Map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.write_field(&key, value)
    }

    fn end(self) -> Result<()> {
        trace!(entries = self.written, "wrote variable lines");
        Ok(())
    }
}

impl ser::SerializeStruct for MapSerializer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.write_field(key, value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeMap::end(self)
    }
}

/// Renders one scalar into its raw form; `None` means the field is omitted.
struct RawValueSerializer;

fn nested(what: &str) -> Error {
    Error::unsupported_type(&format!("{what} cannot be written as a single value"))
}

impl ser::Serializer for RawValueSerializer {
    type Ok = Option<String>;
    type Error = Error;

    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = Impossible<Option<String>, Error>;
    type SerializeStruct = Impossible<Option<String>, Error>;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(format_bool(v).to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(Some(format_float32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Some(format_float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        match std::str::from_utf8(v) {
            Ok(s) => Ok(Some(s.to_string())),
            Err(_) => Err(nested("non-UTF-8 bytes")),
        }
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Some(String::new()))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Some(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(nested("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(nested("sequences"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(nested("tuples"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(nested("tuple structs"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(nested("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(nested("maps"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(nested("structs"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(nested("struct variants"))
    }
}
