//! Parsing and deserialization of variables files.
//!
//! A document is a sequence of `KEY="VALUE"` lines. [`parse_entries`] splits
//! it into [`Entry`] values in line order; [`Deserializer`] applies the
//! duplicate key policy and feeds the result to Serde, converting each raw
//! value only when the target field asks for a type:
//!
//! | Field type | Conversion |
//! |------------|------------|
//! | `String`, `&str`, `char` | identity |
//! | `bool` | [`parse_bool`] |
//! | `f64` | [`parse_float`] |
//! | `f32` | [`parse_float32`] |
//! | integers | [`parse_int`] |
//! | `Option<T>` | `Some` when the key is present |
//! | unit enum variants | by name |
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_vars::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
//! struct Env {
//!     goarch: String,
//!     cgo_enabled: bool,
//! }
//!
//! let env: Env = from_str("GOARCH=\"amd64\"\nCGO_ENABLED=\"1\"\n").unwrap();
//! assert_eq!(env, Env { goarch: "amd64".to_string(), cgo_enabled: true });
//! ```
//!
//! ## Line grammar
//!
//! ```text
//! line  = KEY "=" '"' VALUE '"'
//! KEY   = [A-Za-z_][A-Za-z0-9_]*
//! VALUE = everything between the opening quote and the final quote
//! ```
//!
//! Values are taken verbatim: there are no escape sequences, and a quote
//! inside the value is part of it. A trailing `\r` is dropped and lines that
//! are empty or only whitespace are skipped.

use crate::convert::{parse_bool, parse_int};
use crate::float::{parse_float, parse_float32};
use crate::map::invalid_key_offset;
use crate::options::DuplicateKeys;
use crate::{Entry, Error, Result, VarMap, VarsOptions};
use indexmap::IndexMap;
use serde::de::value::BorrowedStrDeserializer;
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};
use tracing::{debug, trace};

/// One parsed line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RawEntry<'a> {
    line: usize,
    text: &'a str,
    key: &'a str,
    value: &'a str,
}

/// Splits `input` into entries, one per non-blank line, in order.
///
/// Duplicate keys are returned as they appear; [`parse`](crate::parse)
/// applies the duplicate key policy.
///
/// # Errors
///
/// Returns [`Error::Syntax`] naming the first line that is not a
/// `KEY="VALUE"` entry.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{parse_entries, Entry};
///
/// let entries = parse_entries("CC=\"gcc\"\n\nCXX=\"g++\"\n").unwrap();
/// assert_eq!(entries, vec![Entry::new("CC", "gcc"), Entry::new("CXX", "g++")]);
///
/// let err = parse_entries("CC=\"gcc\"\nCXX=g++\n").unwrap_err();
/// assert!(err.to_string().contains("line 2"));
/// ```
pub fn parse_entries(input: &str) -> Result<Vec<Entry>> {
    Ok(raw_entries(input)?
        .into_iter()
        .map(|e| Entry::new(e.key, e.value))
        .collect())
}

fn raw_entries(input: &str) -> Result<Vec<RawEntry<'_>>> {
    let mut entries = Vec::new();
    for (index, line) in input.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(index + 1, line)?);
    }
    trace!(entries = entries.len(), "parsed variable lines");
    Ok(entries)
}

fn parse_line(number: usize, line: &str) -> Result<RawEntry<'_>> {
    let Some(eq) = line.find('=') else {
        return Err(Error::syntax(
            number,
            line.len() + 1,
            "expected '=' after key",
            line,
        ));
    };

    let key = &line[..eq];
    if let Some(offset) = invalid_key_offset(key) {
        let msg = if key.is_empty() {
            "missing key before '='"
        } else {
            "key must be an identifier ([A-Za-z_][A-Za-z0-9_]*)"
        };
        return Err(Error::syntax(number, offset + 1, msg, line));
    }

    let Some(quoted) = line[eq + 1..].strip_prefix('"') else {
        return Err(Error::syntax(
            number,
            eq + 2,
            "expected '\"' to open the value",
            line,
        ));
    };
    let Some(value) = quoted.strip_suffix('"') else {
        return Err(Error::syntax(
            number,
            line.len() + 1,
            "missing closing '\"'",
            line,
        ));
    };

    Ok(RawEntry {
        line: number,
        text: line,
        key,
        value,
    })
}

/// Applies the duplicate key policy, keeping first-occurrence order.
fn collect_entries<'a>(
    entries: Vec<RawEntry<'a>>,
    policy: DuplicateKeys,
) -> Result<IndexMap<&'a str, &'a str>> {
    let mut map = IndexMap::with_capacity(entries.len());
    for entry in entries {
        match map.entry(entry.key) {
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entry.value);
            }
            indexmap::map::Entry::Occupied(mut slot) => {
                debug!(key = entry.key, line = entry.line, ?policy, "duplicate key");
                match policy {
                    DuplicateKeys::LastWins => {
                        slot.insert(entry.value);
                    }
                    DuplicateKeys::FirstWins => {}
                    DuplicateKeys::Reject => {
                        return Err(Error::syntax(
                            entry.line,
                            1,
                            &format!("duplicate key {:?}", entry.key),
                            entry.text,
                        ));
                    }
                }
            }
        }
    }
    Ok(map)
}

/// Parses `input` into a [`VarMap`] using `options`.
pub(crate) fn parse_map(input: &str, options: &VarsOptions) -> Result<VarMap> {
    let entries = raw_entries(input)?;
    let map = collect_entries(entries, options.duplicates)?;
    Ok(map
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect())
}

/// The variables file deserializer.
///
/// Deserializes a struct or map from a document of `KEY="VALUE"` lines.
/// Created via [`Deserializer::from_str`] or [`Deserializer::with_options`].
pub struct Deserializer<'de> {
    input: &'de str,
    options: VarsOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, VarsOptions::default())
    }

    pub fn with_options(input: &'de str, options: VarsOptions) -> Self {
        Deserializer { input, options }
    }

    fn entries(&self) -> Result<IndexMap<&'de str, &'de str>> {
        collect_entries(raw_entries(self.input)?, self.options.duplicates)
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer::new(self.entries()?))
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct MapDeserializer<'de> {
    iter: indexmap::map::IntoIter<&'de str, &'de str>,
    entry: Option<(&'de str, &'de str)>,
}

impl<'de> MapDeserializer<'de> {
    fn new(map: IndexMap<&'de str, &'de str>) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            entry: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.entry = Some((key, value));
                seed.deserialize(BorrowedStrDeserializer::new(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.entry.take() {
            Some((key, value)) => seed
                .deserialize(ValueDeserializer::new(value))
                .map_err(|e| {
                    debug!(key, error = %e, "value conversion failed");
                    e
                }),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

/// Deserializes one raw value, converting it to whatever the visitor asks for.
struct ValueDeserializer<'de> {
    value: &'de str,
}

impl<'de> ValueDeserializer<'de> {
    fn new(value: &'de str) -> Self {
        ValueDeserializer { value }
    }
}

macro_rules! deserialize_int {
    ($($method:ident => $visit:ident : $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(parse_int::<$ty>(self.value)?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_bool(parse_bool(self.value)?)
    }

    deserialize_int! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f32(parse_float32(self.value)?)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f64(parse_float(self.value)?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut chars = self.value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(Error::invalid_syntax("parse_char", self.value)),
        }
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.value.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_empty() {
            visitor.visit_unit()
        } else {
            Err(Error::invalid_syntax("parse_unit", self.value))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("sequences cannot be read from a single value"))
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("maps cannot be read from a single value"))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.value.into_deserializer())
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        str string identifier
    }
}
