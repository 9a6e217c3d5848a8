//! Serde deserialization out of a parsed [`Value`].
//!
//! Text is always parsed into a [`Value`] tree first (see [`crate::parse`]); the
//! [`ValueDeserializer`] then drives a `Deserialize` implementation from that tree.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_cfg::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Window { width: u32, height: u32, title: Option<String> }
//!
//! let window: Window = from_str("{width=640 height=480 title=nil}").unwrap();
//! assert_eq!(window, Window { width: 640, height: 480, title: None });
//! ```
//!
//! ## Mapping
//!
//! | Value     | Accepted by                                                       |
//! |-----------|-------------------------------------------------------------------|
//! | `nil`     | `()`, unit structs, `Option::None`                                |
//! | `Bool`    | `bool`                                                            |
//! | `Int`     | every integer type that can hold it, `f32`, `f64`                 |
//! | `Real`    | `f32`, `f64`                                                      |
//! | `String`  | `String`, `&str`-like types, `char`, unit enum variants           |
//! | `List`    | sequences, tuples, tuple structs                                  |
//! | `Section` | maps, structs, and single-entry sections as data-carrying variants |

use crate::{Error, Result, Section, Value};
use serde::de::value::StringDeserializer;
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializer that consumes an owned [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_cfg::{parse, ValueDeserializer};
///
/// let value = parse("[1 2 3]").unwrap();
/// let numbers = Vec::<u8>::deserialize(ValueDeserializer::new(value)).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Nil => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(n) => visitor.visit_i64(n),
            Value::Real(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            Value::Section(section) => visitor.visit_map(MapDeserializer::new(section)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Nil => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
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
        match self.value {
            Value::String(variant) => visitor.visit_enum(string_deserializer(variant)),
            Value::Section(section) => {
                let mut entries = section.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    _ => Err(Error::custom(
                        "expected a section with exactly one entry for an enum variant",
                    )),
                }
            }
            other => Err(Error::custom(format!(
                "expected string or section for an enum, found {}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

fn string_deserializer(s: String) -> StringDeserializer<Error> {
    s.into_deserializer()
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(list: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: list.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(section: Section) -> Self {
        MapDeserializer {
            iter: section.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(string_deserializer(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(string_deserializer(self.variant))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Nil => Ok(()),
            other => Err(Error::custom(format!(
                "expected nil for a unit variant, found {}",
                other.kind()
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            other => Err(Error::custom(format!(
                "expected list for a tuple variant, found {}",
                other.kind()
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Section(section) => visitor.visit_map(MapDeserializer::new(section)),
            other => Err(Error::custom(format!(
                "expected section for a struct variant, found {}",
                other.kind()
            ))),
        }
    }
}
