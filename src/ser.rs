//! Rendering values as config text, and Serde serialization into [`Value`].
//!
//! ## Stringifier
//!
//! [`Stringifier`] walks a [`Value`] tree and writes the single-line canonical form:
//!
//! - `nil`, `true`, `false` and decimal integers as-is
//! - reals in shortest round-trip form, always with a decimal point (`2.0`)
//! - strings between double quotes
//! - lists as `[a b c]` and sections as `{key=value other=value}`
//!
//! ```rust
//! use serde_cfg::{config, stringify};
//!
//! let value = config!({ name: "demo", ports: [80, 443], ratio: 0.5 });
//! assert_eq!(stringify(&value), r#"{name="demo" ports=[80 443] ratio=0.5}"#);
//! ```
//!
//! ## Serde
//!
//! [`ValueSerializer`] turns any `T: Serialize` into a [`Value`]. Structs and maps
//! become sections, sequences and tuples become lists, `None` and `()` become `nil`.
//! Enum variants carrying data become a single-entry section keyed by the variant
//! name; unit variants become the variant name as a string.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_cfg::to_string;
//!
//! #[derive(Serialize)]
//! enum Shape { Circle { r: f64 }, Empty }
//!
//! assert_eq!(to_string(&Shape::Circle { r: 1.5 }).unwrap(), "{Circle={r=1.5}}");
//! assert_eq!(to_string(&Shape::Empty).unwrap(), r#""Empty""#);
//! ```

use crate::escape::escape;
use crate::scanner::Scanner;
use crate::{to_value, Error, KeyOrder, Result, Section, StringifyOptions, Value};
use serde::{ser, Serialize};

/// One rendering hook per value kind.
///
/// [`Renderer::render`] dispatches on the kind of a value. Implementors decide how
/// each kind is written; containers are expected to call back into `render` for
/// their children.
pub trait Renderer {
    fn render_nil(&mut self);
    fn render_bool(&mut self, value: bool);
    fn render_int(&mut self, value: i64);
    fn render_real(&mut self, value: f64);
    fn render_string(&mut self, value: &str);
    fn render_list(&mut self, list: &[Value]);
    fn render_section(&mut self, section: &Section);

    fn render(&mut self, value: &Value) {
        match value {
            Value::Nil => self.render_nil(),
            Value::Bool(b) => self.render_bool(*b),
            Value::Int(n) => self.render_int(*n),
            Value::Real(f) => self.render_real(*f),
            Value::String(s) => self.render_string(s),
            Value::List(list) => self.render_list(list),
            Value::Section(section) => self.render_section(section),
        }
    }
}

/// Writes values as config text into an internal buffer.
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{parse, Renderer, Stringifier, StringifyOptions};
///
/// let value = parse("[1 2.5 'x']").unwrap();
/// let mut stringifier = Stringifier::new(StringifyOptions::default());
/// stringifier.render(&value);
/// assert_eq!(stringifier.into_inner(), r#"[1 2.5 "x"]"#);
/// ```
pub struct Stringifier {
    output: String,
    options: StringifyOptions,
}

impl Stringifier {
    pub fn new(options: StringifyOptions) -> Self {
        Stringifier {
            output: String::with_capacity(64),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_quoted(&mut self, s: &str) {
        self.output.push('"');
        if self.options.escape_strings {
            self.output.push_str(&escape(s));
        } else {
            self.output.push_str(s);
        }
        self.output.push('"');
    }

    fn write_key(&mut self, key: &str) {
        if is_bare_key(key) {
            self.output.push_str(key);
        } else {
            self.write_quoted(key);
        }
    }

    fn write_entry(&mut self, key: &str, value: &Value) {
        self.write_key(key);
        self.output.push('=');
        self.render(value);
    }
}

impl Renderer for Stringifier {
    fn render_nil(&mut self) {
        self.output.push_str("nil");
    }

    fn render_bool(&mut self, value: bool) {
        self.output.push_str(if value { "true" } else { "false" });
    }

    fn render_int(&mut self, value: i64) {
        self.output.push_str(&value.to_string());
    }

    fn render_real(&mut self, value: f64) {
        if !value.is_finite() {
            return self.render_nil();
        }
        let text = value.to_string();
        self.output.push_str(&text);
        if !text.contains('.') {
            self.output.push_str(".0");
        }
    }

    fn render_string(&mut self, value: &str) {
        self.write_quoted(value);
    }

    fn render_list(&mut self, list: &[Value]) {
        self.output.push('[');
        for (i, item) in list.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.render(item);
        }
        self.output.push(']');
    }

    fn render_section(&mut self, section: &Section) {
        self.output.push('{');
        match self.options.key_order {
            KeyOrder::Insertion => {
                for (i, (key, value)) in section.iter().enumerate() {
                    if i > 0 {
                        self.output.push(' ');
                    }
                    self.write_entry(key, value);
                }
            }
            KeyOrder::Sorted => {
                for (i, (key, value)) in section.sorted_entries().into_iter().enumerate() {
                    if i > 0 {
                        self.output.push(' ');
                    }
                    self.write_entry(key, value);
                }
            }
        }
        self.output.push('}');
    }
}

/// Returns `true` when `key` re-scans as a single section-name token.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_ok = chars.next().is_some_and(Scanner::is_alpha);
    starts_ok
        && chars.all(Scanner::is_alpha_numeric)
        && !matches!(key, "true" | "false" | "nil")
}

/// Renders a value with default options.
#[must_use]
pub fn stringify(value: &Value) -> String {
    stringify_with_options(value, &StringifyOptions::default())
}

/// Renders a value with the given options.
#[must_use]
pub fn stringify_with_options(value: &Value, options: &StringifyOptions) -> String {
    let mut stringifier = Stringifier::new(options.clone());
    stringifier.render(value);
    stringifier.into_inner()
}

/// Serializer producing a [`Value`] tree from any `T: Serialize`.
pub struct ValueSerializer;

pub struct SerializeList {
    list: Vec<Value>,
}

pub struct SerializeSection {
    section: Section,
    next_key: Option<String>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    list: Vec<Value>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    section: Section,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeSection;
    type SerializeStruct = SerializeSection;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| Error::custom(format!("integer {} does not fit in i64", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Real(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Real(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(v.iter().map(|&b| Value::Int(i64::from(b))).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList> {
        Ok(SerializeList::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeList> {
        Ok(SerializeList::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeList> {
        Ok(SerializeList::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            list: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeSection> {
        Ok(SerializeSection::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeSection> {
        Ok(SerializeSection::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            section: Section::new(),
        })
    }
}

impl SerializeList {
    fn with_capacity(capacity: usize) -> Self {
        SerializeList {
            list: Vec::with_capacity(capacity),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.list.push(to_value(value)?);
        Ok(())
    }
}

impl SerializeSection {
    fn new() -> Self {
        SerializeSection {
            section: Section::new(),
            next_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.list))
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.list))
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.list))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.list.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::List(self.list)))
    }
}

impl ser::SerializeMap for SerializeSection {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Int(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "section keys must be strings, found {}",
                    other.kind()
                )))
            }
        };
        self.next_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.section.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Section(self.section))
    }
}

impl ser::SerializeStruct for SerializeSection {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.section.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Section(self.section))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.section.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Section(self.section)))
    }
}

fn tagged(variant: &str, value: Value) -> Value {
    let mut section = Section::with_capacity(1);
    section.insert(variant.to_string(), value);
    Value::Section(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use std::collections::BTreeMap;

    fn render(value: &Value) -> String {
        stringify(value)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Nil), "nil");
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::Bool(false)), "false");
        assert_eq!(render(&Value::Int(-42)), "-42");
        assert_eq!(render(&Value::from("hi")), "\"hi\"");
    }

    #[test]
    fn test_reals_keep_decimal_point() {
        assert_eq!(render(&Value::Real(2.0)), "2.0");
        assert_eq!(render(&Value::Real(3.1415)), "3.1415");
        assert_eq!(render(&Value::Real(-0.5)), "-0.5");
        assert_eq!(render(&Value::Real(1e20)), "100000000000000000000.0");
    }

    #[test]
    fn test_non_finite_reals_render_nil() {
        assert_eq!(render(&Value::Real(f64::NAN)), "nil");
        assert_eq!(render(&Value::Real(f64::INFINITY)), "nil");
        assert_eq!(render(&Value::Real(f64::NEG_INFINITY)), "nil");
    }

    #[test]
    fn test_containers() {
        let value = parse("{a=[1 2 3] b={c=nil} e=[]}").unwrap();
        assert_eq!(render(&value), "{a=[1 2 3] b={c=nil} e=[]}");
        assert_eq!(render(&parse("{}").unwrap()), "{}");
    }

    #[test]
    fn test_key_quoting() {
        let value = parse(r#"{"key str"="test" nil_ok=1 "nil"=2 "1x"=3 a:b=4}"#).unwrap();
        assert_eq!(
            render(&value),
            r#"{"key str"="test" nil_ok=1 "nil"=2 "1x"=3 a:b=4}"#
        );
        assert_eq!(parse(&render(&value)).unwrap(), value);
    }

    #[test]
    fn test_sorted_keys() {
        let value = parse("{b=1 c=2 a=3}").unwrap();
        let options = StringifyOptions::new().with_key_order(KeyOrder::Sorted);
        assert_eq!(stringify_with_options(&value, &options), "{a=3 b=1 c=2}");
        assert_eq!(render(&value), "{b=1 c=2 a=3}");
    }

    #[test]
    fn test_escaping_is_opt_in() {
        let value = Value::from("line\n\"quoted\"");
        assert_eq!(render(&value), "\"line\n\"quoted\"\"");

        let text = stringify_with_options(&value, &StringifyOptions::lossless());
        assert_eq!(text, r#""line\n\"quoted\"""#);
        assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn test_serialize_primitives() {
        assert_eq!(to_value(&7u8).unwrap(), Value::Int(7));
        assert_eq!(to_value(&1.5f32).unwrap(), Value::Real(1.5));
        assert_eq!(to_value(&'c').unwrap(), Value::from("c"));
        assert_eq!(to_value(&()).unwrap(), Value::Nil);
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Nil);
        assert_eq!(to_value(&Some(3)).unwrap(), Value::Int(3));
        assert!(to_value(&u64::MAX).is_err());
    }

    #[test]
    fn test_serialize_struct_and_map() {
        #[derive(Serialize)]
        struct Server {
            host: String,
            port: u16,
            tags: Vec<&'static str>,
        }

        let server = Server {
            host: "localhost".into(),
            port: 8080,
            tags: vec!["a", "b"],
        };
        assert_eq!(
            render(&to_value(&server).unwrap()),
            r#"{host="localhost" port=8080 tags=["a" "b"]}"#
        );

        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(1, "one");
        assert_eq!(render(&to_value(&map).unwrap()), r#"{"1"="one" "2"="two"}"#);
    }

    #[test]
    fn test_serialize_enum_variants() {
        #[derive(Serialize)]
        enum Event {
            Start,
            Move(i32),
            Resize(u32, u32),
            Rename { to: String },
        }

        assert_eq!(render(&to_value(&Event::Start).unwrap()), r#""Start""#);
        assert_eq!(render(&to_value(&Event::Move(-3)).unwrap()), "{Move=-3}");
        assert_eq!(render(&to_value(&Event::Resize(4, 5)).unwrap()), "{Resize=[4 5]}");
        assert_eq!(
            render(&to_value(&Event::Rename { to: "x".into() }).unwrap()),
            r#"{Rename={to="x"}}"#
        );
    }

    #[test]
    fn test_serialize_rejects_list_keys() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], 1);
        assert!(to_value(&map).is_err());
    }
}
