//! Dynamic value representation for config data.
//!
//! This module provides the [`Value`] enum, the in-memory tree the parser builds
//! and the stringifier renders. A value owns its children outright; the tree is
//! acyclic by construction.
//!
//! ## Core Types
//!
//! - [`Value`]: one of nil, bool, int, real, string, list or section
//! - [`ValueKind`]: the tag of a value, used in type-mismatch errors
//! - [`Index`]: types usable with [`Value::get`] (`usize` for lists, strings for sections)
//!
//! ## Usage Patterns
//!
//! ### Typed Extraction
//!
//! Accessors return a [`Result`](crate::Result) and fail with
//! [`Error::TypeMismatch`] when the tag does not match. Ints and reals coerce into
//! each other in both directions.
//!
//! ```rust
//! use serde_cfg::{parse, ErrorKind};
//!
//! let root = parse("{x=10 pi=3.1415 name='srv'}").unwrap();
//! assert_eq!(root.get("x").unwrap().as_int().unwrap(), 10);
//! assert_eq!(root.get("x").unwrap().as_real().unwrap(), 10.0);
//! assert_eq!(root.get("pi").unwrap().as_int().unwrap(), 3);
//!
//! let err = root.get("x").unwrap().as_str().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! ```
//!
//! ### Indexed Lookup
//!
//! ```rust
//! use serde_cfg::{parse, ErrorKind};
//!
//! let list = parse("[1 2 3]").unwrap();
//! assert_eq!(list.get(2).unwrap().as_int().unwrap(), 3);
//! assert_eq!(list.get(3).unwrap_err().kind(), ErrorKind::OutOfBounds);
//! assert_eq!(list.get("a").unwrap_err().kind(), ErrorKind::TypeMismatch);
//! ```

use crate::{Error, Result, Section};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any value the config language can express.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{Value, ValueKind};
///
/// let nil = Value::Nil;
/// let num = Value::from(42);
/// let text = Value::from("hello");
///
/// assert!(nil.is_nil());
/// assert!(num.is_scalar());
/// assert_eq!(text.kind(), ValueKind::String);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Real(f64),
    String(String),
    List(Vec<Value>),
    Section(Section),
}

/// The tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Real,
    String,
    List,
    Section,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Nil => "nil",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Real => "real",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Section => "section",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the tag of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Real(_) => ValueKind::Real,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Section(_) => ValueKind::Section,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Returns `true` for ints and reals.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    fn mismatch(&self, expected: ValueKind) -> Error {
        Error::type_mismatch(expected, self.kind())
    }

    /// Extracts a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `Bool`.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    /// Extracts an integer, narrowing a `Real` toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_cfg::Value;
    ///
    /// assert_eq!(Value::Int(7).as_int().unwrap(), 7);
    /// assert_eq!(Value::Real(-2.9).as_int().unwrap(), -2);
    /// assert!(Value::Bool(true).as_int().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is an `Int` or `Real`.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Real(f) => Ok(*f as i64),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }

    /// Extracts a real, widening an `Int`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is an `Int` or `Real`.
    pub fn as_real(&self) -> Result<f64> {
        match self {
            Value::Real(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            other => Err(other.mismatch(ValueKind::Real)),
        }
    }

    /// Borrows the text of a `String`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `String`.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Borrows the elements of a `List`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `List`.
    pub fn as_list(&self) -> Result<&Vec<Value>> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(other.mismatch(ValueKind::List)),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `List`.
    pub fn as_list_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(other.mismatch(ValueKind::List)),
        }
    }

    /// Borrows the entries of a `Section`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `Section`.
    pub fn as_section(&self) -> Result<&Section> {
        match self {
            Value::Section(section) => Ok(section),
            other => Err(other.mismatch(ValueKind::Section)),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `Section`.
    pub fn as_section_mut(&mut self) -> Result<&mut Section> {
        match self {
            Value::Section(section) => Ok(section),
            other => Err(other.mismatch(ValueKind::Section)),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `String`.
    pub fn into_string(self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `List`.
    pub fn into_list(self) -> Result<Vec<Value>> {
        match self {
            Value::List(list) => Ok(list),
            other => Err(other.mismatch(ValueKind::List)),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] unless the value is a `Section`.
    pub fn into_section(self) -> Result<Section> {
        match self {
            Value::Section(section) => Ok(section),
            other => Err(other.mismatch(ValueKind::Section)),
        }
    }

    /// Looks up a list element by position or a section entry by key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when the index or key does not exist, and
    /// [`Error::TypeMismatch`] when the value is not the matching container.
    pub fn get<I: Index>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`Value::get`].
    ///
    /// # Errors
    ///
    /// Same as [`Value::get`].
    pub fn get_mut<I: Index>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A type that can index into a [`Value`]: `usize` for lists, string keys for sections.
///
/// This trait is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::List(list) => list
                .get(*self)
                .ok_or_else(|| Error::out_of_bounds(self, list.len())),
            other => Err(other.mismatch(ValueKind::List)),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        match value {
            Value::List(list) => {
                let len = list.len();
                list.get_mut(*self)
                    .ok_or_else(|| Error::out_of_bounds(self, len))
            }
            other => Err(other.mismatch(ValueKind::List)),
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        match value {
            Value::Section(section) => section
                .get(self)
                .ok_or_else(|| Error::out_of_bounds(format!("key '{}'", self), section.len())),
            other => Err(other.mismatch(ValueKind::Section)),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        match value {
            Value::Section(section) => {
                let len = section.len();
                section
                    .get_mut(self)
                    .ok_or_else(|| Error::out_of_bounds(format!("key '{}'", self), len))
            }
            other => Err(other.mismatch(ValueKind::Section)),
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T: ?Sized + Index> Index for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::stringify(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Real(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Section(section) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(section.len()))?;
                for (k, v) in section {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid config value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(Value::Int)
                    .map_err(|_| E::custom(format!("integer {} exceeds i64::MAX", value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Real(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Nil)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Nil)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::List(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut section = Section::new();
                while let Some((key, value)) = map.next_entry()? {
                    section.insert(key, value);
                }
                Ok(Value::Section(section))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_int()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_real()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_bool()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_string()
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Section> for Value {
    fn from(value: Section) -> Self {
        Value::Section(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}
